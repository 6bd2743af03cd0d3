//! List user pastes tool.
//!
//! Lists the pastes of the user identified by `PASTEBIN_USER_KEY`.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domains::pastebin::{
    Credential, PasteError, PasteSummary, Pastebin, ResponseShape, classify, list_pastes_form,
    parse_paste_list,
};

use super::common::{
    MAX_LIST_LIMIT, default_limit, failure_result, status_error, structured_result,
};

#[cfg(feature = "http")]
use super::common::{http_response, parse_arguments};
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

/// Parameters for listing pastes.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListPastesParams {
    /// Maximum number of pastes to return (1-100).
    #[serde(default = "default_limit")]
    #[schemars(description = "Maximum number of pastes to return (optional, default 10, max 100)")]
    pub limit: i64,
}

/// Structured output of a list call.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListPastesResult {
    pub success: bool,
    pub pastes: Vec<PasteSummary>,
    pub count: usize,
    pub message: String,
}

impl ListPastesResult {
    fn new(pastes: Vec<PasteSummary>) -> Self {
        let message = if pastes.is_empty() {
            "No pastes found".to_string()
        } else {
            format!("Found {} pastes", pastes.len())
        };

        Self {
            success: true,
            count: pastes.len(),
            pastes,
            message,
        }
    }
}

/// List user pastes tool implementation.
#[derive(Debug, Clone)]
pub struct ListPastesTool;

impl ListPastesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "list_user_pastes";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "List user's pastes from Pastebin. \
         Requires PASTEBIN_USER_KEY. Returns key, title, date, size, URL and format of each paste.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(limit = params.limit))]
    pub async fn execute(params: &ListPastesParams, pastebin: &Pastebin) -> CallToolResult {
        match Self::list(params, pastebin).await {
            Ok(result) => {
                info!("{}", result.message);
                structured_result(result.message.clone(), result)
            }
            Err(e) => {
                warn!("Listing pastes failed: {}", e);
                failure_result(&e)
            }
        }
    }

    /// Validate the limit, post the list request and parse the records.
    pub async fn list(
        params: &ListPastesParams,
        pastebin: &Pastebin,
    ) -> Result<ListPastesResult, PasteError> {
        if !(1..=MAX_LIST_LIMIT).contains(&params.limit) {
            return Err(PasteError::validation("Limit must be between 1 and 100"));
        }
        let limit = params.limit as u32;

        let credentials = pastebin.credentials();
        let dev_key = credentials.require(Credential::DeveloperKey)?;
        let user_key = credentials.require_for(Credential::UserKey, "to list user pastes")?;

        let form = list_pastes_form(&dev_key, &user_key, limit);
        let response = pastebin
            .transport()
            .post_form(pastebin.api_url(), &form)
            .await?;

        let pastes = match classify(&response.body) {
            ResponseShape::RemoteError(message) => {
                return Err(PasteError::RemoteApi(message.to_string()));
            }
            _ if !response.is_success() => return Err(status_error(&response)),
            ResponseShape::EmptyList => Vec::new(),
            ResponseShape::SecureUrl(_) | ResponseShape::Other(_) => {
                parse_paste_list(&response.body, limit as usize, pastebin.base_url())
            }
        };

        Ok(ListPastesResult::new(pastes))
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        pastebin: Arc<Pastebin>,
    ) -> Result<serde_json::Value, ToolError> {
        let params: ListPastesParams = parse_arguments(Self::NAME, arguments)?;
        http_response(Self::execute(&params, &pastebin).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ListPastesParams>(),
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
                let params: ListPastesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Ok(Self::execute(&params, &pastebin).await)
            }
            .boxed()
        })
    }
}
