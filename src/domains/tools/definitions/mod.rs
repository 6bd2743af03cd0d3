//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod paste;

pub use paste::{
    CreatePasteParams, CreatePasteTool, ListPastesParams, ListPastesTool, ReadPasteParams,
    ReadPasteTool,
};
