//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for the MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Widgets domain configuration.
    pub widgets: WidgetsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the widgets domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetsConfig {
    /// Directory holding the widget template assets. Every declared
    /// widget must have its template file here or startup fails.
    pub assets_dir: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
        }
    }
}

impl WidgetsConfig {
    /// Assets directory resolved against the crate root, independent of
    /// the test runner's working directory.
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            assets_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "news-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            widgets: WidgetsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(assets_dir) = std::env::var("MCP_WIDGET_ASSETS_DIR") {
            config.widgets.assets_dir = PathBuf::from(assets_dir);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}
