//! Get news tool definition.
//!
//! Returns the latest articles, optionally narrowed to one category,
//! as a carousel widget payload.

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{CallToolResult, JsonObject, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::domains::news::{NewsQuery, NewsStore, select};
use crate::domains::tools::{envelope, input};
use crate::domains::widgets::{WidgetDescriptor, definitions::NewsCarouselWidget, WidgetDefinition};

/// Parameters for the get news tool.
///
/// The schema is closed: any key other than `category` is rejected.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetNewsParams {
    /// News category (technology, business, or sports).
    pub category: Option<String>,
}

/// Get news tool - returns a carousel of the latest news articles.
pub struct GetNewsTool;

impl GetNewsTool {
    /// Tool name as registered in MCP (matches the widget identifier).
    pub const NAME: &'static str = NewsCarouselWidget::IDENTIFIER;

    /// Execute the tool logic.
    #[instrument(skip_all, fields(category))]
    pub fn execute(
        arguments: JsonObject,
        store: &NewsStore,
        widget: &WidgetDescriptor,
    ) -> CallToolResult {
        let params: GetNewsParams = match input::parse_arguments(arguments) {
            Ok(params) => params,
            Err(e) => return envelope::failure(&e),
        };
        tracing::Span::current().record("category", params.category.as_deref());

        let articles = select(store, &NewsQuery::for_category(params.category));
        info!("Get news tool returning {} articles", articles.len());

        envelope::success(&articles, widget)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool(widget: &WidgetDescriptor) -> Tool {
        Tool {
            name: Self::NAME.into(),
            title: Some(widget.title.to_string()),
            description: Some(widget.description.into()),
            input_schema: cached_schema_for_type::<GetNewsParams>(),
            output_schema: None,
            annotations: None,
            icons: None,
            meta: Some(widget.meta()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::WidgetsConfig;
    use crate::domains::widgets::WidgetRegistry;
    use rmcp::model::RawContent;
    use serde_json::json;

    fn fixtures() -> (NewsStore, WidgetRegistry) {
        (
            NewsStore::with_seed_data(),
            WidgetRegistry::new(&WidgetsConfig::for_tests()).unwrap(),
        )
    }

    fn args(value: serde_json::Value) -> JsonObject {
        value.as_object().unwrap().clone()
    }

    fn items(result: &CallToolResult) -> Vec<serde_json::Value> {
        result.structured_content.as_ref().unwrap()["items"]
            .as_array()
            .unwrap()
            .clone()
    }

    #[test]
    fn test_no_filter_returns_all_sorted() {
        let (store, registry) = fixtures();
        let widget = registry.by_identifier(GetNewsTool::NAME).unwrap();

        let result = GetNewsTool::execute(JsonObject::new(), &store, widget);
        assert_eq!(result.is_error, Some(false));

        let items = items(&result);
        assert_eq!(items.len(), 4);
        assert_eq!(items[0]["title"], "Championship Finals Set for This Weekend");
    }

    #[test]
    fn test_category_filter() {
        let (store, registry) = fixtures();
        let widget = registry.by_identifier(GetNewsTool::NAME).unwrap();

        let result =
            GetNewsTool::execute(args(json!({"category": "technology"})), &store, widget);
        let items = items(&result);
        assert_eq!(items.len(), 2);
        for item in &items {
            assert!(
                item["subtitle"]
                    .as_str()
                    .unwrap()
                    .starts_with("Technology — ")
            );
        }
    }

    #[test]
    fn test_unknown_field_yields_validation_error() {
        let (store, registry) = fixtures();
        let widget = registry.by_identifier(GetNewsTool::NAME).unwrap();

        let result =
            GetNewsTool::execute(args(json!({"category": "x", "extra": 1})), &store, widget);
        assert_eq!(result.is_error, Some(true));
        match &result.content[0].raw {
            RawContent::Text(text) => {
                assert!(text.text.starts_with("Validation error:"));
                assert!(text.text.contains("extra"));
            }
            _ => panic!("Expected text content"),
        }
    }

    #[test]
    fn test_non_string_category_yields_validation_error() {
        let (store, registry) = fixtures();
        let widget = registry.by_identifier(GetNewsTool::NAME).unwrap();

        let result = GetNewsTool::execute(args(json!({"category": 7})), &store, widget);
        assert_eq!(result.is_error, Some(true));
    }

    #[test]
    fn test_schema_forbids_additional_properties() {
        let (_, registry) = fixtures();
        let widget = registry.by_identifier(GetNewsTool::NAME).unwrap();

        let tool = GetNewsTool::to_tool(widget);
        let schema = serde_json::to_value(tool.input_schema.as_ref()).unwrap();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["additionalProperties"], false);
        assert!(schema["properties"].get("category").is_some());
    }
}
