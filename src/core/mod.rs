//! Core module containing shared infrastructure components.
//!
//! Error handling, configuration, the MCP server handler and the transport
//! layer it runs on.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{Config, LoggingConfig, PastebinConfig};
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
