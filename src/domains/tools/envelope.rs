//! Response envelope assembly.
//!
//! Builds the externally visible `CallToolResult` from query results and
//! widget metadata: a plain-text acknowledgment, the embedded template
//! resource, the structured content a client renders into the widget,
//! and the fixed `_meta` contract. Assembly trusts its inputs (already
//! validated upstream) and cannot fail; serialization problems degrade
//! to a text-only response.

use rmcp::model::{CallToolResult, Content};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::ToolError;
use crate::domains::news::ArticleRecord;
use crate::domains::widgets::WidgetDescriptor;

/// Fixed label on every item link.
pub const LINK_LABEL: &str = "Read full article →";

/// Structured content payload: a heading plus ordered presentation items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredNews {
    pub title: String,
    pub items: Vec<NewsItem>,
}

/// One widget item derived from an article record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image_url: String,
    pub link: ItemLink,
}

/// Link attached to a widget item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemLink {
    pub url: String,
    pub label: String,
}

/// Build a success envelope for the given articles and widget.
///
/// The embedded resource block mirrors the widget's full template body
/// and MIME label so a client that cannot resolve the template
/// out-of-band still receives it inline.
pub fn success(articles: &[ArticleRecord], widget: &WidgetDescriptor) -> CallToolResult {
    let structured = StructuredNews {
        title: widget.heading.to_string(),
        items: articles.iter().map(news_item).collect(),
    };

    let content = vec![
        Content::text(widget.response_text),
        Content::resource(widget.template_contents()),
    ];

    match serde_json::to_value(&structured) {
        Ok(value) => CallToolResult {
            content,
            structured_content: Some(value),
            is_error: Some(false),
            meta: Some(widget.meta()),
        },
        Err(e) => {
            warn!("Failed to serialize structured content: {}", e);
            CallToolResult::success(vec![Content::text(widget.response_text)])
        }
    }
}

/// Build an error envelope from a tool error.
///
/// Failures stay in-band: the result carries `isError=true` and a text
/// explanation instead of raising a transport-level fault.
pub fn failure(error: &ToolError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(error.to_string())])
}

/// Map one article record onto a widget item.
fn news_item(record: &ArticleRecord) -> NewsItem {
    NewsItem {
        title: record.title.clone(),
        subtitle: format!("{} — {}", title_case(&record.category), record.author),
        description: record.summary.clone(),
        image_url: record.image_url.clone(),
        link: ItemLink {
            url: record.url.clone(),
            label: LINK_LABEL.to_string(),
        },
    }
}

/// Title-case a category key: first letter of each word upper-cased,
/// the rest lower-cased.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
