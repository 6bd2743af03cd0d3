//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::pastebin::Pastebin;

use super::definitions::{CreatePasteTool, ListPastesTool, ReadPasteTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(pastebin: Arc<Pastebin>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(CreatePasteTool::create_route(pastebin.clone()))
        .with_route(ReadPasteTool::create_route(pastebin.clone()))
        .with_route(ListPastesTool::create_route(pastebin))
}
