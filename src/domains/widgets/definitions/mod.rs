//! Widget definitions module.
//!
//! Each widget is declared in its own file with its static metadata.
//!
//! ## Adding a New Widget
//!
//! 1. Create a new file (e.g., `my_widget.rs`) implementing
//!    [`WidgetDefinition`](super::descriptor::WidgetDefinition)
//! 2. Add the template file under the configured assets directory
//! 3. Export it here
//! 4. Register it in `registry.rs`

mod news_carousel;
mod news_list;

pub use news_carousel::NewsCarouselWidget;
pub use news_list::NewsListWidget;
