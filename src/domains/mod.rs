//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents a specific area of functionality within the
//! MCP server: the news record set and query engine, the widget
//! descriptors and templates, and the tools that tie them together.

pub mod news;
pub mod tools;
pub mod widgets;
