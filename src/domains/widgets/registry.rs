//! Widget Registry - central registration and lookup for all widgets.
//!
//! The registry is built once at startup. Every declared widget has its
//! template asset read from disk at construction time; a missing asset
//! is a fatal error so the server never starts partially initialized.
//! After construction the registry is read-only and safe for unbounded
//! concurrent readers.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rmcp::model::{
    AnnotateAble, RawResourceTemplate, Resource, ResourceContents, ResourceTemplate,
};
use tracing::info;

use super::definitions::{NewsCarouselWidget, NewsListWidget};
use super::descriptor::{WidgetDefinition, WidgetDescriptor};
use super::error::WidgetError;
use crate::core::config::WidgetsConfig;

/// Registry of all widgets, indexed by identifier and by template URI.
pub struct WidgetRegistry {
    /// Widgets in registration order.
    widgets: Vec<WidgetDescriptor>,

    /// Identifier -> index into `widgets`.
    by_identifier: HashMap<&'static str, usize>,

    /// Template URI -> index into `widgets`.
    by_template_uri: HashMap<&'static str, usize>,
}

impl WidgetRegistry {
    /// Build the registry, loading every template asset from the
    /// configured directory. Fails if any asset is missing or if two
    /// widgets share an identifier or URI.
    pub fn new(config: &WidgetsConfig) -> Result<Self, WidgetError> {
        info!(
            "Initializing widget registry from {}",
            config.assets_dir.display()
        );

        let mut registry = Self {
            widgets: Vec::new(),
            by_identifier: HashMap::new(),
            by_template_uri: HashMap::new(),
        };

        registry.register(load_widget::<NewsCarouselWidget>(&config.assets_dir)?)?;
        registry.register(load_widget::<NewsListWidget>(&config.assets_dir)?)?;

        Ok(registry)
    }

    /// Register a widget, enforcing identifier and URI uniqueness.
    fn register(&mut self, widget: WidgetDescriptor) -> Result<(), WidgetError> {
        if self.by_identifier.contains_key(widget.identifier) {
            return Err(WidgetError::Duplicate(widget.identifier.to_string()));
        }
        if self.by_template_uri.contains_key(widget.template_uri) {
            return Err(WidgetError::Duplicate(widget.template_uri.to_string()));
        }

        info!("Registering widget: {}", widget.identifier);
        let index = self.widgets.len();
        self.by_identifier.insert(widget.identifier, index);
        self.by_template_uri.insert(widget.template_uri, index);
        self.widgets.push(widget);
        Ok(())
    }

    /// Look up a widget by identifier (tool name).
    pub fn by_identifier(&self, name: &str) -> Option<&WidgetDescriptor> {
        self.by_identifier
            .get(name)
            .map(|&index| &self.widgets[index])
    }

    /// Look up a widget by template URI.
    pub fn by_template_uri(&self, uri: &str) -> Option<&WidgetDescriptor> {
        self.by_template_uri
            .get(uri)
            .map(|&index| &self.widgets[index])
    }

    /// All widgets in registration order.
    pub fn list_all(&self) -> &[WidgetDescriptor] {
        &self.widgets
    }

    /// Resource descriptors for all widget templates.
    pub fn list_resources(&self) -> Vec<Resource> {
        self.widgets.iter().map(|w| w.to_resource()).collect()
    }

    /// Resource template descriptors for the widget URI namespace.
    pub fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        vec![
            RawResourceTemplate {
                uri_template: "ui://widget/{widget}.html".to_string(),
                name: "Widget Templates".to_string(),
                title: Some("Widget Render Templates".to_string()),
                description: Some(
                    "HTML templates used to render tool results as widgets".to_string(),
                ),
                mime_type: Some(super::descriptor::MIME_TYPE.to_string()),
            }
            .no_annotation(),
        ]
    }

    /// Template contents for a URI, or `None` for unknown URIs.
    ///
    /// Unknown URIs are not an error; the dispatcher turns `None` into
    /// an empty-contents result.
    pub fn read_resource(&self, uri: &str) -> Option<ResourceContents> {
        self.by_template_uri(uri).map(|w| w.template_contents())
    }
}

/// Load a declared widget, reading its template asset from disk.
fn load_widget<W: WidgetDefinition>(assets_dir: &Path) -> Result<WidgetDescriptor, WidgetError> {
    let path = assets_dir.join(W::TEMPLATE_FILE);
    let html = fs::read_to_string(&path).map_err(|source| WidgetError::AssetMissing {
        identifier: W::IDENTIFIER,
        path: path.clone(),
        source,
    })?;

    Ok(WidgetDescriptor {
        identifier: W::IDENTIFIER,
        title: W::TITLE,
        description: W::DESCRIPTION,
        template_uri: W::TEMPLATE_URI,
        html,
        invoking: W::INVOKING,
        invoked: W::INVOKED,
        response_text: W::RESPONSE_TEXT,
        heading: W::HEADING,
    })
}
