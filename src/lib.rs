//! News MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! curated news articles as interactive widgets, with a modular architecture
//! organized by domains.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **news**: The article record set and query engine
//!   - **widgets**: Widget descriptors, templates, and the resource registry
//!   - **tools**: MCP tools that render news into widget envelopes
//!
//! # Example
//!
//! ```rust,no_run
//! use news_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
