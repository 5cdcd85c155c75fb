//! In-memory news record store.
//!
//! The store holds the full article set grouped by category. It is
//! constructed once at startup from the static seed set and is read-only
//! afterwards, so it is safe to share across concurrent request handlers
//! without locking.

use tracing::info;

use super::article::ArticleRecord;

/// Read-only article store, grouped by lower-cased category key.
///
/// Groups preserve insertion order so that `all()` and tie-breaking in
/// the query engine stay deterministic across calls.
pub struct NewsStore {
    groups: Vec<(String, Vec<ArticleRecord>)>,
}

impl NewsStore {
    /// Build the store from the static seed set.
    pub fn with_seed_data() -> Self {
        let store = Self { groups: seed_data() };
        info!(
            "Initialized news store: {} articles in {} categories",
            store.len(),
            store.groups.len()
        );
        store
    }

    /// All records across every category, in group insertion order.
    pub fn all(&self) -> Vec<ArticleRecord> {
        self.groups
            .iter()
            .flat_map(|(_, records)| records.iter().cloned())
            .collect()
    }

    /// Records for one category (case-insensitive lookup).
    ///
    /// Unknown categories yield an empty vector, never an error.
    pub fn by_category(&self, key: &str) -> Vec<ArticleRecord> {
        let key = key.to_lowercase();
        self.groups
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, records)| records.clone())
            .unwrap_or_default()
    }

    /// Whether a category key exists (case-insensitive).
    pub fn has_category(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        self.groups.iter().any(|(name, _)| *name == key)
    }

    /// All category keys, in insertion order.
    pub fn category_names(&self) -> Vec<&str> {
        self.groups.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, records)| records.len()).sum()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Static seed set: technology x2, business x1, sports x1.
fn seed_data() -> Vec<(String, Vec<ArticleRecord>)> {
    vec![
        (
            "technology".to_string(),
            vec![
                ArticleRecord {
                    id: "tech-1".to_string(),
                    title: "AI Breakthrough in Natural Language Processing".to_string(),
                    summary: "Researchers achieve new milestone in AI understanding with transformers.".to_string(),
                    content: Some(
                        "A research consortium announced a new milestone in natural language \
                         understanding, demonstrating transformer models that generalize across \
                         tasks with far less supervision than previous systems."
                            .to_string(),
                    ),
                    author: "Dr. Sarah Chen".to_string(),
                    published_at: "2025-01-15T10:30:00Z".to_string(),
                    category: "technology".to_string(),
                    image_url: "https://via.placeholder.com/400x200/0066cc/white?text=AI+News".to_string(),
                    url: "https://example.com/tech-1".to_string(),
                    tags: Some(vec!["ai".to_string(), "nlp".to_string(), "research".to_string()]),
                    source: Some("Example Tech Wire".to_string()),
                },
                ArticleRecord {
                    id: "tech-2".to_string(),
                    title: "Quantum Computing Reaches New Milestone".to_string(),
                    summary: "IBM announces breakthrough in quantum error correction.".to_string(),
                    content: None,
                    author: "Michael Rodriguez".to_string(),
                    published_at: "2025-01-14T14:45:00Z".to_string(),
                    category: "technology".to_string(),
                    image_url: "https://via.placeholder.com/400x200/6600cc/white?text=Quantum+Computing".to_string(),
                    url: "https://example.com/tech-2".to_string(),
                    tags: Some(vec!["quantum".to_string(), "hardware".to_string()]),
                    source: None,
                },
            ],
        ),
        (
            "business".to_string(),
            vec![ArticleRecord {
                id: "biz-1".to_string(),
                title: "Global Markets Rally on Economic Optimism".to_string(),
                summary: "Stocks worldwide rise amid positive indicators.".to_string(),
                content: Some(
                    "Equity markets across three continents closed higher after a round of \
                     better-than-expected indicators lifted investor sentiment."
                        .to_string(),
                ),
                author: "Jennifer Walsh".to_string(),
                published_at: "2025-01-15T08:15:00Z".to_string(),
                category: "business".to_string(),
                image_url: "https://via.placeholder.com/400x200/cc6600/white?text=Market+Rally".to_string(),
                url: "https://example.com/biz-1".to_string(),
                tags: Some(vec!["markets".to_string(), "economy".to_string()]),
                source: Some("Example Business Desk".to_string()),
            }],
        ),
        (
            "sports".to_string(),
            vec![ArticleRecord {
                id: "sports-1".to_string(),
                title: "Championship Finals Set for This Weekend".to_string(),
                summary: "Two powerhouse teams prepare for the ultimate showdown.".to_string(),
                content: None,
                author: "David Kim".to_string(),
                published_at: "2025-01-15T16:20:00Z".to_string(),
                category: "sports".to_string(),
                image_url: "https://via.placeholder.com/400x200/cc0066/white?text=Championship".to_string(),
                url: "https://example.com/sports-1".to_string(),
                tags: Some(vec!["championship".to_string()]),
                source: None,
            }],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use std::collections::HashSet;

    #[test]
    fn test_seed_counts() {
        let store = NewsStore::with_seed_data();
        assert_eq!(store.len(), 4);
        assert_eq!(store.by_category("technology").len(), 2);
        assert_eq!(store.by_category("business").len(), 1);
        assert_eq!(store.by_category("sports").len(), 1);
    }

    #[test]
    fn test_ids_globally_unique() {
        let store = NewsStore::with_seed_data();
        let ids: HashSet<_> = store.all().into_iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn test_category_matches_grouping_key() {
        let store = NewsStore::with_seed_data();
        for key in store.category_names().to_vec() {
            for record in store.by_category(key) {
                assert_eq!(record.category, key);
            }
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let store = NewsStore::with_seed_data();
        assert_eq!(store.by_category("Technology").len(), 2);
        assert_eq!(store.by_category("SPORTS").len(), 1);
        assert!(store.has_category("Business"));
    }

    #[test]
    fn test_unknown_category_yields_empty() {
        let store = NewsStore::with_seed_data();
        assert!(store.by_category("weather").is_empty());
        assert!(!store.has_category("weather"));
    }

    #[test]
    fn test_all_is_union_of_groups() {
        let store = NewsStore::with_seed_data();
        let total: usize = store
            .category_names()
            .iter()
            .map(|key| store.by_category(key).len())
            .sum();
        assert_eq!(store.all().len(), total);
    }

    #[test]
    fn test_timestamps_are_valid_rfc3339() {
        let store = NewsStore::with_seed_data();
        for record in store.all() {
            assert!(
                DateTime::parse_from_rfc3339(&record.published_at).is_ok(),
                "bad timestamp on {}: {}",
                record.id,
                record.published_at
            );
        }
    }
}
