//! Widgets domain module.
//!
//! A widget is the pairing of a tool and the HTML render template a
//! client uses to present that tool's structured result. This module
//! owns the widget descriptors, the template assets, and the registry
//! that serves both tool metadata and the MCP resources surface.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual widget declarations (one file per widget)
//! - `descriptor.rs` - Descriptor model and the fixed `_meta` contract
//! - `registry.rs` - Parallel by-identifier / by-URI lookup, asset loading
//! - `error.rs` - Widget-specific error types (all fatal at startup)

pub mod definitions;
pub mod descriptor;
mod error;
mod registry;

pub use descriptor::{MIME_TYPE, WidgetDefinition, WidgetDescriptor};
pub use error::WidgetError;
pub use registry::WidgetRegistry;
