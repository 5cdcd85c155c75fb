//! Widget-specific error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building the widget registry.
///
/// These are all startup failures. The server must not come up with a
/// partially initialized registry, so construction errors abort the
/// process instead of being converted into protocol responses.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// A declared widget's template asset could not be read.
    #[error("template asset for widget '{identifier}' could not be read at {}: {source}", path.display())]
    AssetMissing {
        identifier: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two widgets declared the same identifier or template URI.
    #[error("duplicate widget registration: {0}")]
    Duplicate(String),
}
