//! Closed-schema argument parsing for tool calls.
//!
//! Every tool declares a serde params struct with `deny_unknown_fields`,
//! so unknown keys and wrong types are hard validation errors rather
//! than being silently ignored. This mirrors the
//! `additionalProperties: false` clause advertised in each tool's input
//! schema.

use serde::de::DeserializeOwned;
use serde_json::Value;

use rmcp::model::JsonObject;

use super::error::ToolError;

/// Parse untrusted tool-call arguments into a typed params struct.
///
/// Fails with [`ToolError::Validation`] on unknown fields or wrong
/// types. An empty argument map is valid for tools whose fields are all
/// optional.
pub fn parse_arguments<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments)).map_err(|e| ToolError::validation(e.to_string()))
}
