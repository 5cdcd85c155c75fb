//! News domain module.
//!
//! Holds the read-only article store and the query engine that filters,
//! sorts and slices records for the tools layer.

pub mod article;
pub mod query;
pub mod store;

pub use article::ArticleRecord;
pub use query::{NewsQuery, select};
pub use store::NewsStore;
