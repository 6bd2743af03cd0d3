//! Read paste tool.
//!
//! Fetches the raw content of a paste. The API endpoint is probed first;
//! only an explicit API error stops the read. Content then comes from the
//! public raw endpoint. The two calls are not atomic: a paste removed in
//! between shows up as a raw-fetch failure.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::domains::pastebin::{
    Credential, PasteError, Pastebin, ResponseShape, classify, show_paste_form,
};

use super::common::{failure_result, status_error, structured_result};

#[cfg(feature = "http")]
use super::common::{http_response, parse_arguments};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for reading a paste.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReadPasteParams {
    /// Key of the paste, e.g. the `AbC123` in `https://pastebin.com/AbC123`.
    #[serde(rename = "pasteKey")]
    #[schemars(description = "The key of the paste to read (required)")]
    pub paste_key: String,
}

/// Structured output of a successful read.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ReadPasteResult {
    pub success: bool,
    pub content: String,
    #[serde(rename = "pasteKey")]
    pub paste_key: String,
    pub url: String,
}

/// Read paste tool implementation.
#[derive(Debug, Clone)]
pub struct ReadPasteTool;

impl ReadPasteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "read_paste";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Read a paste from Pastebin by its key. \
         Returns the raw paste content together with its public URL.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(paste_key = %params.paste_key))]
    pub async fn execute(params: &ReadPasteParams, pastebin: &Pastebin) -> CallToolResult {
        match Self::read(params, pastebin).await {
            Ok(result) => {
                info!("Read paste {} ({} bytes)", result.paste_key, result.content.len());
                let summary = format!(
                    "Read paste {} ({} bytes) from {}",
                    result.paste_key,
                    result.content.len(),
                    result.url
                );
                structured_result(summary, result)
            }
            Err(e) => {
                warn!("Paste read failed: {}", e);
                failure_result(&e)
            }
        }
    }

    /// Probe the API, then fetch the raw content.
    pub async fn read(
        params: &ReadPasteParams,
        pastebin: &Pastebin,
    ) -> Result<ReadPasteResult, PasteError> {
        let paste_key = params.paste_key.trim();
        validate_paste_key(paste_key)?;

        let credentials = pastebin.credentials();
        let dev_key = credentials.require(Credential::DeveloperKey)?;
        let user_key = credentials.get(Credential::UserKey);

        let form = show_paste_form(&dev_key, paste_key, user_key.as_deref());
        let probe = pastebin
            .transport()
            .post_form(pastebin.api_url(), &form)
            .await?;

        if let ResponseShape::RemoteError(message) = classify(&probe.body) {
            return Err(PasteError::RemoteApi(message.to_string()));
        }
        debug!("Probe answered HTTP {}, fetching raw content", probe.status);

        let url = pastebin.paste_url(paste_key);
        let raw = match pastebin.transport().get(&pastebin.raw_url(paste_key)).await {
            Ok(response) if response.is_success() => response,
            Ok(response) => {
                return Err(PasteError::raw_content(paste_key, url, status_error(&response)));
            }
            Err(e) => return Err(PasteError::raw_content(paste_key, url, e.into())),
        };

        Ok(ReadPasteResult {
            success: true,
            content: raw.body,
            paste_key: paste_key.to_string(),
            url,
        })
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        pastebin: Arc<Pastebin>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: ReadPasteParams = parse_arguments(Self::NAME, arguments)?;
        http_response(Self::execute(&params, &pastebin).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ReadPasteParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(pastebin: Arc<Pastebin>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let pastebin = pastebin.clone();
            async move {
                let params: ReadPasteParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &pastebin).await)
            }
            .boxed()
        })
    }
}

/// Keys are interpolated into URLs, so only `[A-Za-z0-9_-]` is accepted.
fn validate_paste_key(key: &str) -> Result<(), PasteError> {
    if key.is_empty() {
        return Err(PasteError::validation("pasteKey is required"));
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(PasteError::validation(format!(
            "pasteKey '{key}' may only contain letters, digits, '-' or '_'"
        )));
    }

    Ok(())
}
