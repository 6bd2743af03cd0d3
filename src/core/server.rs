//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating tool calls to the paste tool definitions.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/paste/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (core logic)
//! - `http_handler()` method (called via ToolRegistry for HTTP transport)
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`.

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;

use super::config::Config;
use crate::domains::{pastebin::Pastebin, tools::build_tool_router};

#[cfg(feature = "http")]
use crate::domains::tools::ToolRegistry;

const INSTRUCTIONS: &str = "Pastebin MCP server. Use create_paste to publish text, \
    read_paste to fetch a paste by key, and list_user_pastes to list the configured \
    user's pastes. Credentials come from PASTEBIN_API_KEY and PASTEBIN_USER_KEY.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. Cloning is
/// cheap; all clones share the same Pastebin backend.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared Pastebin backend used by every tool.
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    pastebin: Arc<Pastebin>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the production Pastebin backend.
    pub fn new(config: Config) -> crate::core::Result<Self> {
        config.validate()?;
        let pastebin = Pastebin::from_config(&config.pastebin)?;
        Ok(Self::with_pastebin(config, pastebin))
    }

    /// Create a server around an already assembled backend.
    pub fn with_pastebin(config: Config, pastebin: Pastebin) -> Self {
        let pastebin = Arc::new(pastebin);

        Self {
            tool_router: build_tool_router::<Self>(pastebin.clone()),
            config: Arc::new(config),
            pastebin,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the instructions sent to clients on initialization.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> crate::core::Result<serde_json::Value> {
        let registry = ToolRegistry::new(self.pastebin.clone());
        Ok(registry.call_tool(name, arguments).await?)
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::pastebin::testing::{FakeTransport, pastebin};

    fn test_server() -> McpServer {
        McpServer::with_pastebin(
            Config::default(),
            pastebin(&FakeTransport::new(), Some("dev"), Some("user")),
        )
    }

    #[test]
    fn test_server_lists_paste_tools() {
        let server = test_server();
        let tools = server.list_tools();
        assert_eq!(tools.len(), 3);
        assert!(tools.iter().all(|t| t["inputSchema"].is_object()));
    }

    #[test]
    fn test_server_info_enables_tools_only() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.capabilities.resources.is_none());
        assert!(info.capabilities.prompts.is_none());
    }

    #[test]
    fn test_new_builds_from_default_config() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "pastebin-mcp-server");
        assert_eq!(server.list_tools().len(), 3);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = Config::default();
        config.pastebin.base_url = "pastebin.com".to_string();
        assert!(McpServer::new(config).is_err());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_call_unknown_tool_is_tool_error() {
        let err = test_server()
            .call_tool("delete_paste", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, crate::core::Error::Tool(_)));
    }
}
