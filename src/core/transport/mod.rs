//! Transports the Pastebin MCP server can run on.
//!
//! | Feature | Transport | Session model |
//! |---|---|---|
//! | `stdio` (default) | stdin/stdout | one session for the process |
//! | `tcp` | line-delimited JSON-RPC over TCP | one session per connection |
//! | `http` | JSON-RPC 2.0 over `POST` | stateless requests |
//!
//! All of them share one [`McpServer`](crate::core::McpServer) and therefore
//! one Pastebin backend. `MCP_TRANSPORT` picks among the compiled-in ones.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "tcp")]
pub use config::TcpConfig;

#[cfg(feature = "http")]
pub use config::HttpConfig;
