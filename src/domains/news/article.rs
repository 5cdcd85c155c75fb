//! Article record model.

use serde::{Deserialize, Serialize};

/// A single news article.
///
/// Records are loaded once at startup and never mutated. `published_at`
/// is an RFC 3339 / ISO-8601 timestamp string; identically formatted
/// timestamps order lexicographically the same as chronologically, which
/// the query engine relies on for sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    /// Globally unique article identifier.
    pub id: String,

    /// Headline.
    pub title: String,

    /// Short summary shown in widget items.
    pub summary: String,

    /// Full article body, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    /// Author byline.
    pub author: String,

    /// Publication timestamp (ISO-8601 string).
    pub published_at: String,

    /// Lower-cased category key; always matches the store group the
    /// record lives under.
    pub category: String,

    /// Preview image URL.
    pub image_url: String,

    /// Canonical article URL.
    pub url: String,

    /// Free-form tags, searchable by the query engine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Publishing outlet, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ArticleRecord {
        ArticleRecord {
            id: "tech-9".to_string(),
            title: "Sample".to_string(),
            summary: "A sample record".to_string(),
            content: None,
            author: "Jane Doe".to_string(),
            published_at: "2025-01-10T09:00:00Z".to_string(),
            category: "technology".to_string(),
            image_url: "https://example.com/img.png".to_string(),
            url: "https://example.com/tech-9".to_string(),
            tags: None,
            source: None,
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["publishedAt"], "2025-01-10T09:00:00Z");
        assert_eq!(value["imageUrl"], "https://example.com/img.png");
        assert!(value.get("published_at").is_none());
    }

    #[test]
    fn test_optional_fields_omitted_when_absent() {
        let value = serde_json::to_value(sample()).unwrap();
        assert!(value.get("content").is_none());
        assert!(value.get("tags").is_none());
        assert!(value.get("source").is_none());
    }
}
