//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

mod get_news;
mod search_news;

pub use get_news::{GetNewsParams, GetNewsTool};
pub use search_news::{SearchNewsParams, SearchNewsTool};
