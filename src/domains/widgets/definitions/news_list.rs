//! News list widget definition.

use super::super::descriptor::WidgetDefinition;

/// List widget backing the `search_news` tool.
pub struct NewsListWidget;

impl WidgetDefinition for NewsListWidget {
    const IDENTIFIER: &'static str = "search_news";
    const TITLE: &'static str = "Search News";
    const DESCRIPTION: &'static str =
        "Searches news articles by keyword with optional category filter and paging.";
    const TEMPLATE_URI: &'static str = "ui://widget/search_news.html";
    const TEMPLATE_FILE: &'static str = "news-list.html";
    const INVOKING: &'static str = "Searching news articles";
    const INVOKED: &'static str = "Displayed search results";
    const RESPONSE_TEXT: &'static str = "Here are the matching news articles.";
    const HEADING: &'static str = "Search Results";
}
