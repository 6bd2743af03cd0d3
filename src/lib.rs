//! Pastebin MCP Server Library
//!
//! A Model Context Protocol (MCP) server that lets clients create, read and
//! list pastes on Pastebin.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and its transports
//! - **domains**: business logic organized by bounded contexts
//!   - **pastebin**: credentials, form encoding, HTTP transport and response parsing
//!   - **tools**: the `create_paste`, `read_paste` and `list_user_pastes` tools
//!
//! # Example
//!
//! ```rust,no_run
//! use pastebin_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
