//! Tool Registry - central registration and dispatch for all tools.
//!
//! This is the single source of truth for available tools. Both the
//! rmcp ServerHandler and the HTTP transport dispatch tool calls
//! through it. Dispatch never raises to the transport layer: unknown
//! tools and invalid arguments become error envelopes the caller can
//! read.

use std::sync::Arc;

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use super::definitions::{GetNewsTool, SearchNewsTool};
use super::{envelope, error::ToolError};
use crate::domains::news::NewsStore;
use crate::domains::widgets::WidgetRegistry;

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    store: Arc<NewsStore>,
    widgets: Arc<WidgetRegistry>,
}

impl ToolRegistry {
    /// Create a new tool registry over the shared store and widgets.
    pub fn new(store: Arc<NewsStore>, widgets: Arc<WidgetRegistry>) -> Self {
        Self { store, widgets }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![GetNewsTool::NAME, SearchNewsTool::NAME]
    }

    /// Get all tools as Tool models (metadata), in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        let mut tools = Vec::new();
        if let Some(widget) = self.widgets.by_identifier(GetNewsTool::NAME) {
            tools.push(GetNewsTool::to_tool(widget));
        }
        if let Some(widget) = self.widgets.by_identifier(SearchNewsTool::NAME) {
            tools.push(SearchNewsTool::to_tool(widget));
        }
        tools
    }

    /// Dispatch a tool call to the appropriate handler.
    ///
    /// Every outcome is a `CallToolResult`: unknown names and argument
    /// validation failures are returned as `isError=true` envelopes.
    pub fn call(&self, name: &str, arguments: JsonObject) -> CallToolResult {
        let Some(widget) = self.widgets.by_identifier(name) else {
            warn!("Unknown tool requested: {}", name);
            return envelope::failure(&ToolError::NotFound);
        };

        match name {
            GetNewsTool::NAME => GetNewsTool::execute(arguments, &self.store, widget),
            SearchNewsTool::NAME => SearchNewsTool::execute(arguments, &self.store, widget),
            _ => {
                warn!("Widget registered without a tool handler: {}", name);
                envelope::failure(&ToolError::NotFound)
            }
        }
    }
}
