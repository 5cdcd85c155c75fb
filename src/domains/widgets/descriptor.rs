//! Widget descriptor model.
//!
//! A widget pairs a tool with the HTML template a client uses to render
//! the tool's structured result. The descriptor carries everything the
//! protocol layer needs: resource metadata, the template body, and the
//! fixed `_meta` contract binding responses to the template.

use rmcp::model::{AnnotateAble, Meta, RawResource, Resource, ResourceContents};
use serde_json::json;

/// MIME type for all widget template content.
pub const MIME_TYPE: &str = "text/html+skybridge";

/// A registered widget: identifier, template, and presentation metadata.
///
/// Constructed once at startup by the registry (which loads `html` from
/// the asset file) and read-only afterwards.
#[derive(Debug, Clone)]
pub struct WidgetDescriptor {
    /// Unique identifier, also used as the tool name.
    pub identifier: &'static str,

    /// Human-readable title, used as the resource name.
    pub title: &'static str,

    /// Description shown in tool and resource listings.
    pub description: &'static str,

    /// Unique template URI, used as the resource URI.
    pub template_uri: &'static str,

    /// Template body, loaded from the asset file at startup.
    pub html: String,

    /// Status string shown while the tool invocation is in flight.
    pub invoking: &'static str,

    /// Status string shown once the tool invocation completed.
    pub invoked: &'static str,

    /// Plain-text acknowledgment returned in the tool response.
    pub response_text: &'static str,

    /// Heading placed at the top of the structured content.
    pub heading: &'static str,
}

impl WidgetDescriptor {
    /// The fixed `_meta` map attached to tool descriptors, resource
    /// descriptors and call-tool responses for this widget.
    pub fn meta(&self) -> Meta {
        let mut map = serde_json::Map::new();
        map.insert("openai/outputTemplate".to_string(), json!(self.template_uri));
        map.insert(
            "openai/toolInvocation/invoking".to_string(),
            json!(self.invoking),
        );
        map.insert(
            "openai/toolInvocation/invoked".to_string(),
            json!(self.invoked),
        );
        map.insert("openai/widgetAccessible".to_string(), json!(true));
        map.insert("openai/resultCanProduceWidget".to_string(), json!(true));
        Meta(map)
    }

    /// Resource descriptor for the template, as listed to clients.
    pub fn to_resource(&self) -> Resource {
        let mut raw = RawResource::new(self.template_uri, self.title);
        raw.title = Some(self.title.to_string());
        raw.description = Some(self.description.to_string());
        raw.mime_type = Some(MIME_TYPE.to_string());
        raw.meta = Some(self.meta());
        raw.no_annotation()
    }

    /// The full template body as resource contents, used both for
    /// resource reads and for inlining into tool responses. The variant
    /// has no title field of its own, so the widget title rides in the
    /// contents meta.
    pub fn template_contents(&self) -> ResourceContents {
        let mut meta = serde_json::Map::new();
        meta.insert("title".to_string(), json!(self.title));
        ResourceContents::TextResourceContents {
            uri: self.template_uri.to_string(),
            mime_type: Some(MIME_TYPE.to_string()),
            text: self.html.clone(),
            meta: Some(Meta(meta)),
        }
    }
}

/// Trait for widget definitions.
///
/// Each widget is declared in `definitions/` with its static metadata;
/// the registry pairs it with the template asset at startup.
pub trait WidgetDefinition {
    /// Unique widget identifier (doubles as the tool name).
    const IDENTIFIER: &'static str;

    /// Display title.
    const TITLE: &'static str;

    /// Listing description.
    const DESCRIPTION: &'static str;

    /// Unique template URI.
    const TEMPLATE_URI: &'static str;

    /// Template file name, resolved against the configured assets dir.
    const TEMPLATE_FILE: &'static str;

    /// In-flight invocation status string.
    const INVOKING: &'static str;

    /// Completed invocation status string.
    const INVOKED: &'static str;

    /// Plain-text acknowledgment for tool responses.
    const RESPONSE_TEXT: &'static str;

    /// Structured-content heading.
    const HEADING: &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> WidgetDescriptor {
        WidgetDescriptor {
            identifier: "get_news",
            title: "Get Latest News",
            description: "Returns a carousel of the latest news articles.",
            template_uri: "ui://widget/get_news.html",
            html: "<div>template</div>".to_string(),
            invoking: "Fetching latest news",
            invoked: "Displayed news carousel",
            response_text: "Here are the latest news articles.",
            heading: "Latest News",
        }
    }

    #[test]
    fn test_meta_has_fixed_keys() {
        let meta = descriptor().meta();
        assert_eq!(
            meta.get("openai/outputTemplate").unwrap(),
            "ui://widget/get_news.html"
        );
        assert_eq!(
            meta.get("openai/toolInvocation/invoking").unwrap(),
            "Fetching latest news"
        );
        assert_eq!(
            meta.get("openai/toolInvocation/invoked").unwrap(),
            "Displayed news carousel"
        );
        assert_eq!(meta.get("openai/widgetAccessible").unwrap(), true);
        assert_eq!(meta.get("openai/resultCanProduceWidget").unwrap(), true);
    }

    #[test]
    fn test_resource_descriptor_fields() {
        let resource = descriptor().to_resource();
        assert_eq!(resource.raw.uri, "ui://widget/get_news.html");
        assert_eq!(resource.raw.name, "Get Latest News");
        assert_eq!(resource.raw.mime_type.as_deref(), Some(MIME_TYPE));
        assert!(resource.raw.meta.is_some());
    }

    #[test]
    fn test_template_contents_mirror_html() {
        match descriptor().template_contents() {
            ResourceContents::TextResourceContents {
                uri,
                mime_type,
                text,
                meta,
            } => {
                assert_eq!(uri, "ui://widget/get_news.html");
                assert_eq!(mime_type.as_deref(), Some(MIME_TYPE));
                assert_eq!(text, "<div>template</div>");
                let meta = meta.expect("contents meta");
                assert_eq!(meta.get("title").unwrap(), "Get Latest News");
            }
            _ => panic!("Expected text resource contents"),
        }
    }
}
