//! Create paste tool.
//!
//! Publishes new content on Pastebin and returns the paste URL.

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
    Credential, NewPaste, PasteError, Pastebin, ResponseShape, Visibility, classify,
    create_paste_form,
};

use super::common::{
    default_format, default_visibility, failure_result, status_error, structured_result,
};

#[cfg(feature = "http")]
use super::common::{http_response, parse_arguments};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

const DEFAULT_TITLE: &str = "Untitled Paste";

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for creating a paste.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreatePasteParams {
    /// Title of the paste.
    #[serde(default)]
    #[schemars(description = "Title of the paste")]
    pub title: Option<String>,

    /// Paste body.
    #[schemars(description = "Content of the paste (required)")]
    pub content: String,

    /// Syntax highlighting format.
    #[serde(default = "default_format")]
    #[schemars(
        description = "Format/language of the paste (optional, e.g., javascript, python, text)"
    )]
    pub format: String,

    /// One of "public", "unlisted", "private".
    #[serde(default = "default_visibility")]
    #[schemars(description = "Visibility of the paste: public, unlisted or private (default: public)")]
    pub visibility: String,
}

// ============================================================================
// Structured Output
// ============================================================================

/// Structured output of a successful creation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CreatePasteResult {
    pub success: bool,
    pub url: String,
    pub message: String,
}

// ============================================================================
// Tool Implementation
// ============================================================================

/// Create paste tool implementation.
#[derive(Debug, Clone)]
pub struct CreatePasteTool;

impl CreatePasteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "create_paste";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a new paste on Pastebin. \
         Private pastes require PASTEBIN_USER_KEY. \
         Returns the URL of the new paste.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(visibility = %params.visibility, format = %params.format))]
    pub async fn execute(params: &CreatePasteParams, pastebin: &Pastebin) -> CallToolResult {
        match Self::create(params, pastebin).await {
            Ok(result) => {
                info!("Paste created: {}", result.url);
                structured_result(format!("Paste created: {}", result.url), result)
            }
            Err(e) => {
                warn!("Paste creation failed: {}", e);
                failure_result(&e)
            }
        }
    }

    /// Validate, resolve credentials, post and interpret the answer.
    ///
    /// Validation and credential failures return before any request is sent.
    pub async fn create(
        params: &CreatePasteParams,
        pastebin: &Pastebin,
    ) -> Result<CreatePasteResult, PasteError> {
        if params.content.is_empty() {
            return Err(PasteError::validation("Content is required"));
        }

        let visibility: Visibility = params.visibility.parse()?;

        let credentials = pastebin.credentials();
        let dev_key = credentials.require(Credential::DeveloperKey)?;
        let user_key = match visibility {
            Visibility::Private => {
                Some(credentials.require_for(Credential::UserKey, "for private pastes")?)
            }
            Visibility::Public | Visibility::Unlisted => None,
        };

        let title = params
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE);
        let format = match params.format.trim() {
            "" => "text",
            f => f,
        };

        let paste = NewPaste {
            title,
            content: &params.content,
            format,
            visibility,
        };
        let form = create_paste_form(&dev_key, &paste, user_key.as_deref());
        debug!("Posting new {} paste ({} bytes)", visibility, params.content.len());

        let response = pastebin
            .transport()
            .post_form(pastebin.api_url(), &form)
            .await?;

        match classify(&response.body) {
            ResponseShape::RemoteError(message) => Err(PasteError::RemoteApi(message.to_string())),
            _ if !response.is_success() => Err(status_error(&response)),
            ResponseShape::SecureUrl(url) => Ok(CreatePasteResult {
                success: true,
                url: url.to_string(),
                message: "Paste created successfully".to_string(),
            }),
            ResponseShape::EmptyList | ResponseShape::Other(_) => Err(
                PasteError::UnexpectedResponse(response.body.trim().to_string()),
            ),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        pastebin: Arc<Pastebin>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: CreatePasteParams = parse_arguments(Self::NAME, arguments)?;
        http_response(Self::execute(&params, &pastebin).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CreatePasteParams>(),
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
                let params: CreatePasteParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &pastebin).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
