//! Common utilities shared across the paste tools.
//!
//! Result encoding for both transports and the status check every handler
//! applies to a non-error response.

use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use tracing::warn;

use crate::domains::pastebin::{HttpResponse, PasteError};

#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Maximum number of pastes one list call may request.
pub const MAX_LIST_LIMIT: i64 = 100;

/// Default number of pastes returned by a list call.
pub fn default_limit() -> i64 {
    10
}

pub fn default_format() -> String {
    "text".to_string()
}

pub fn default_visibility() -> String {
    "public".to_string()
}

/// A non-2xx answer that did not carry the API's own error prefix.
pub fn status_error(response: &HttpResponse) -> PasteError {
    PasteError::Network {
        message: format!("Request failed with status code {}", response.status),
        details: Some(response.body.clone()),
    }
}

/// Success result: text summary plus the payload as structured content.
pub fn structured_result<T: Serialize>(summary: String, data: T) -> CallToolResult {
    match serde_json::to_value(&data) {
        Ok(structured) => CallToolResult {
            content: vec![Content::text(summary)],
            structured_content: Some(structured),
            is_error: Some(false),
            meta: None,
        },
        Err(e) => {
            warn!("Failed to serialize structured content: {}", e);
            CallToolResult::success(vec![Content::text(summary)])
        }
    }
}

/// Failure result: the message as text, the failure object as structured content.
pub fn failure_result(error: &PasteError) -> CallToolResult {
    let failure = error.to_failure();
    let structured = serde_json::to_value(&failure).ok();

    CallToolResult {
        content: vec![Content::text(failure.error)],
        structured_content: structured,
        is_error: Some(true),
        meta: None,
    }
}

/// Encode a tool result as the JSON body of an HTTP `tools/call` response.
#[cfg(feature = "http")]
pub fn http_response(result: CallToolResult) -> Result<serde_json::Value, ToolError> {
    let mut response = serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    });

    if let Some(structured) = result.structured_content {
        response
            .as_object_mut()
            .ok_or_else(|| ToolError::encoding("tool response is not an object"))?
            .insert("structuredContent".to_string(), structured);
    }

    Ok(response)
}

/// Deserialize HTTP `tools/call` arguments into a params struct.
#[cfg(feature = "http")]
pub fn parse_arguments<T: serde::de::DeserializeOwned>(
    tool: &'static str,
    arguments: serde_json::Value,
) -> Result<T, ToolError> {
    serde_json::from_value(arguments).map_err(|e| ToolError::invalid_arguments(tool, e.to_string()))
}
