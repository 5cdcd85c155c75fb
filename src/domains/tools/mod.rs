//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP
//! server: closed-schema argument parsing, tool execution over the news
//! store, response envelope assembly, and central dispatch.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `input.rs` - Closed-schema argument parsing
//! - `envelope.rs` - Response envelope assembly (structured content + meta)
//! - `registry.rs` - Central tool registry and dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Declare its widget in `domains/widgets/definitions/`
//! 2. Create a new file in `definitions/` with params, `execute()` and
//!    `to_tool()`
//! 3. Export it in `definitions/mod.rs`
//! 4. Register it in `registry.rs`

pub mod definitions;
pub mod envelope;
mod error;
pub mod input;
mod registry;

pub use error::ToolError;
pub use registry::ToolRegistry;
