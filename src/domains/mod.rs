//! Domains module containing business logic organized by bounded contexts.
//!
//! - **pastebin**: Pastebin API access (credentials, requests, transport, responses)
//! - **tools**: MCP tools built on top of the pastebin domain

pub mod pastebin;
pub mod tools;
