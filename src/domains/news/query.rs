//! Query engine for article selection.
//!
//! Selection is a pure function over the store: pick the working set by
//! category, sort newest-first, then apply the optional free-text filter
//! and page slicing. No step can fail; empty results are returned as
//! empty vectors.

use tracing::debug;

use super::article::ArticleRecord;
use super::store::NewsStore;

/// Parameters for a single selection pass.
///
/// `limit` and `page` must already be validated (>= 1) by the caller;
/// the tools layer rejects zero before building a query.
#[derive(Debug, Clone, Default)]
pub struct NewsQuery {
    /// Category filter. Unknown or absent selects all categories.
    pub category: Option<String>,

    /// Case-insensitive substring filter over title, summary, content
    /// and tags.
    pub query: Option<String>,

    /// Maximum items per page. `None` disables slicing.
    pub limit: Option<usize>,

    /// 1-based page index, only meaningful together with `limit`.
    pub page: Option<usize>,
}

impl NewsQuery {
    /// Query selecting an optional category and nothing else.
    pub fn for_category(category: Option<String>) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }
}

/// Select articles from the store according to the query.
///
/// A category that matches a known grouping key (case-insensitively)
/// narrows the working set to exactly that group; an absent or unknown
/// category degrades to the union of all groups. The result is sorted by
/// `published_at` descending with a stable sort, so records with equal
/// timestamps keep their store order.
pub fn select(store: &NewsStore, query: &NewsQuery) -> Vec<ArticleRecord> {
    let mut records = match &query.category {
        Some(category) if store.has_category(category) => store.by_category(category),
        _ => store.all(),
    };

    // Lexicographic comparison is chronological for uniformly formatted
    // ISO-8601 timestamps. sort_by is stable.
    records.sort_by(|a, b| b.published_at.cmp(&a.published_at));

    if let Some(needle) = &query.query {
        let needle = needle.to_lowercase();
        records.retain(|record| matches_query(record, &needle));
    }

    if let Some(limit) = query.limit {
        let page = query.page.unwrap_or(1).max(1);
        let start = (page - 1).saturating_mul(limit);
        records = records.into_iter().skip(start).take(limit).collect();
    }

    debug!(
        category = query.category.as_deref(),
        count = records.len(),
        "Selected articles"
    );

    records
}

/// Whether the lowercase needle occurs in the record's searchable text.
fn matches_query(record: &ArticleRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.summary.to_lowercase().contains(needle)
        || record
            .content
            .as_deref()
            .is_some_and(|content| content.to_lowercase().contains(needle))
        || record
            .tags
            .iter()
            .flatten()
            .any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> NewsStore {
        NewsStore::with_seed_data()
    }

    fn sorted_desc(records: &[ArticleRecord]) -> bool {
        records
            .windows(2)
            .all(|pair| pair[0].published_at >= pair[1].published_at)
    }

    #[test]
    fn test_known_category_returns_exactly_that_group() {
        let store = store();
        let results = select(&store, &NewsQuery::for_category(Some("technology".into())));
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|a| a.category == "technology"));
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let store = store();
        let results = select(&store, &NewsQuery::for_category(Some("TECHNOLOGY".into())));
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_absent_category_returns_union() {
        let store = store();
        let results = select(&store, &NewsQuery::default());
        assert_eq!(results.len(), store.len());
    }

    #[test]
    fn test_unknown_category_degrades_to_all() {
        let store = store();
        let results = select(&store, &NewsQuery::for_category(Some("weather".into())));
        assert_eq!(results.len(), store.len());
    }

    #[test]
    fn test_sorted_published_at_descending() {
        let store = store();
        let results = select(&store, &NewsQuery::default());
        assert!(sorted_desc(&results));
        assert_eq!(results[0].id, "sports-1");
        assert_eq!(results[0].published_at, "2025-01-15T16:20:00Z");
        assert_eq!(results.last().unwrap().id, "tech-2");
    }

    #[test]
    fn test_free_text_query_matches_title() {
        let store = store();
        let query = NewsQuery {
            query: Some("quantum".into()),
            ..NewsQuery::default()
        };
        let results = select(&store, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "tech-2");
    }

    #[test]
    fn test_free_text_query_is_case_insensitive() {
        let store = store();
        let query = NewsQuery {
            query: Some("QUANTUM".into()),
            ..NewsQuery::default()
        };
        assert_eq!(select(&store, &query).len(), 1);
    }

    #[test]
    fn test_free_text_query_matches_tags_and_content() {
        let store = store();
        let by_tag = NewsQuery {
            query: Some("championship".into()),
            ..NewsQuery::default()
        };
        assert!(select(&store, &by_tag).iter().any(|a| a.id == "sports-1"));

        let by_content = NewsQuery {
            query: Some("investor sentiment".into()),
            ..NewsQuery::default()
        };
        let results = select(&store, &by_content);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "biz-1");
    }

    #[test]
    fn test_no_match_yields_empty_not_error() {
        let store = store();
        let query = NewsQuery {
            query: Some("no such phrase anywhere".into()),
            ..NewsQuery::default()
        };
        assert!(select(&store, &query).is_empty());
    }

    #[test]
    fn test_limit_and_page_slice() {
        let store = store();
        let page_one = NewsQuery {
            limit: Some(2),
            page: Some(1),
            ..NewsQuery::default()
        };
        let first = select(&store, &page_one);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].id, "sports-1");

        let page_two = NewsQuery {
            limit: Some(2),
            page: Some(2),
            ..NewsQuery::default()
        };
        let second = select(&store, &page_two);
        assert_eq!(second.len(), 2);
        assert_eq!(second[0].id, "biz-1");
    }

    #[test]
    fn test_out_of_range_page_yields_empty() {
        let store = store();
        let query = NewsQuery {
            limit: Some(3),
            page: Some(5),
            ..NewsQuery::default()
        };
        assert!(select(&store, &query).is_empty());
    }

    #[test]
    fn test_limit_without_page_defaults_to_first_page() {
        let store = store();
        let query = NewsQuery {
            limit: Some(1),
            ..NewsQuery::default()
        };
        let results = select(&store, &query);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "sports-1");
    }

    #[test]
    fn test_select_is_deterministic() {
        let store = store();
        let query = NewsQuery::for_category(Some("technology".into()));
        let first = select(&store, &query);
        let second = select(&store, &query);
        assert_eq!(first, second);
    }
}
