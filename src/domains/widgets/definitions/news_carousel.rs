//! News carousel widget definition.

use super::super::descriptor::WidgetDefinition;

/// Carousel widget backing the `get_news` tool.
pub struct NewsCarouselWidget;

impl WidgetDefinition for NewsCarouselWidget {
    const IDENTIFIER: &'static str = "get_news";
    const TITLE: &'static str = "Get Latest News";
    const DESCRIPTION: &'static str = "Returns a carousel of the latest news articles.";
    const TEMPLATE_URI: &'static str = "ui://widget/get_news.html";
    const TEMPLATE_FILE: &'static str = "news-carousel.html";
    const INVOKING: &'static str = "Fetching latest news";
    const INVOKED: &'static str = "Displayed news carousel";
    const RESPONSE_TEXT: &'static str = "Here are the latest news articles.";
    const HEADING: &'static str = "Latest News";
}
