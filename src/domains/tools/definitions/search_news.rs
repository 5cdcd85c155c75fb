//! Search news tool definition.
//!
//! Free-text search over the article set with optional category filter
//! and limit/page slicing, rendered as a list widget payload.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::news::{NewsQuery, NewsStore, select};
use crate::domains::tools::{envelope, error::ToolError, input};
use crate::domains::widgets::{WidgetDescriptor, definitions::NewsListWidget, WidgetDefinition};

/// Parameters for the search news tool.
///
/// The schema is closed: unknown keys are rejected. `limit` and `page`
/// must be at least 1; zero is rejected rather than clamped so callers
/// get an explicit signal instead of silently altered paging.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SearchNewsParams {
    /// News category (technology, business, or sports).
    pub category: Option<String>,

    /// Case-insensitive keyword matched against title, summary, content
    /// and tags.
    pub query: Option<String>,

    /// Maximum number of articles per page (minimum 1).
    pub limit: Option<u32>,

    /// 1-based page index (minimum 1).
    pub page: Option<u32>,
}

impl SearchNewsParams {
    /// Enforce the range constraints the JSON type system cannot.
    fn validate(&self) -> Result<(), ToolError> {
        if self.limit == Some(0) {
            return Err(ToolError::validation("limit must be at least 1"));
        }
        if self.page == Some(0) {
            return Err(ToolError::validation("page must be at least 1"));
        }
        Ok(())
    }
}

/// Search news tool - keyword search with paging over the article set.
pub struct SearchNewsTool;

impl SearchNewsTool {
    /// Tool name as registered in MCP (matches the widget identifier).
    pub const NAME: &'static str = NewsListWidget::IDENTIFIER;

    /// Execute the tool logic.
    #[instrument(skip_all)]
    pub fn execute(
        arguments: JsonObject,
        store: &NewsStore,
        widget: &WidgetDescriptor,
    ) -> CallToolResult {
        let params: SearchNewsParams = match input::parse_arguments(arguments) {
            Ok(params) => params,
            Err(e) => return envelope::failure(&e),
        };
        if let Err(e) = params.validate() {
            return envelope::failure(&e);
        }

        let query = NewsQuery {
            category: params.category,
            query: params.query,
            limit: params.limit.map(|limit| limit as usize),
            page: params.page.map(|page| page as usize),
        };
        let articles = select(store, &query);
        info!("Search news tool returning {} articles", articles.len());

        envelope::success(&articles, widget)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(widget: &WidgetDescriptor) -> Tool {
        Tool {
            name: Self::NAME.into(),
            title: Some(widget.title.to_string()),
            description: Some(widget.description.into()),
            input_schema: cached_schema_for_type::<SearchNewsParams>(),
            output_schema: None,
            annotations: None,
            icons: None,
            meta: Some(widget.meta()),
        }
    }
}
