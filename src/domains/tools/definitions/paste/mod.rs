//! Pastebin tools module.
//!
//! - `create`: Publish a new paste
//! - `read`: Fetch the raw content of a paste
//! - `list`: List the pastes of the configured user
//!
//! Each tool has handlers for both HTTP and STDIO/TCP transports.

pub mod common;
pub mod create;
pub mod list;
pub mod read;

pub use create::{CreatePasteParams, CreatePasteResult, CreatePasteTool};
pub use list::{ListPastesParams, ListPastesResult, ListPastesTool};
pub use read::{ReadPasteParams, ReadPasteResult, ReadPasteTool};
