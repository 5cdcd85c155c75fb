//! Tool-specific error types.
//!
//! Tool failures are expected outcomes, not faults: the dispatcher
//! converts every `ToolError` into a normal response envelope with
//! `isError=true` so a calling agent can read and react to the failure
//! without a protocol-level exception.

use thiserror::Error;

/// Errors that can occur while handling a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool name is not registered. The client-facing
    /// text is the fixed "Unknown tool"; the name itself is logged at
    /// the dispatch site.
    #[error("Unknown tool")]
    NotFound,

    /// The tool arguments failed closed-schema validation (unknown
    /// field, wrong type, or an out-of-range value).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl ToolError {
    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_displays_fixed_text() {
        assert_eq!(ToolError::NotFound.to_string(), "Unknown tool");
    }

    #[test]
    fn test_validation_embeds_detail() {
        let err = ToolError::validation("unknown field `extra`");
        assert_eq!(err.to_string(), "Validation error: unknown field `extra`");
    }
}
