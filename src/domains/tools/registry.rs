//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use crate::domains::pastebin::Pastebin;

#[cfg(feature = "http")]
use super::ToolError;
use super::definitions::{CreatePasteTool, ListPastesTool, ReadPasteTool};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    pastebin: Arc<Pastebin>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(pastebin: Arc<Pastebin>) -> Self {
        Self { pastebin }
    }

    /// Names of every registered tool, in registration order.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            CreatePasteTool::NAME,
            ReadPasteTool::NAME,
            ListPastesTool::NAME,
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let pastebin = self.pastebin.clone();
        match name {
            CreatePasteTool::NAME => CreatePasteTool::http_handler(arguments, pastebin).await,
            ReadPasteTool::NAME => ReadPasteTool::http_handler(arguments, pastebin).await,
            ListPastesTool::NAME => ListPastesTool::http_handler(arguments, pastebin).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    #[cfg(feature = "http")]
    use crate::domains::pastebin::testing::{FakeTransport, pastebin};

    #[cfg(feature = "http")]
    fn test_registry() -> ToolRegistry {
        ToolRegistry::new(Arc::new(pastebin(&FakeTransport::new(), Some("dev"), Some("user"))))
    }

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names, vec!["create_paste", "read_paste", "list_user_pastes"]);
    }

    #[test]
    fn test_all_tools_have_schemas() {
        let tools = [
            CreatePasteTool::to_tool(),
            ReadPasteTool::to_tool(),
            ListPastesTool::to_tool(),
        ];
        for tool in tools {
            assert!(tool.description.is_some());
            assert_eq!(
                tool.input_schema.get("type").and_then(|t| t.as_str()),
                Some("object")
            );
        }
    }

    #[test]
    fn test_read_schema_uses_paste_key() {
        let tool = ReadPasteTool::to_tool();
        let properties = tool.input_schema.get("properties").unwrap();
        assert!(properties.get("pasteKey").is_some());
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_validation_failure() {
        let registry = test_registry();
        let result = registry
            .call_tool("list_user_pastes", serde_json::json!({ "limit": 0 }))
            .await
            .unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(result["structuredContent"]["kind"], "validation");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_invalid_arguments() {
        let registry = test_registry();
        let result = registry
            .call_tool("read_paste", serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(ToolError::InvalidArguments { tool: "read_paste", .. })));
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_registry_call_unknown() {
        let registry = test_registry();
        let result = registry.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
