//! JSON result envelope shared by every command.
//!
//! Commands never exit nonzero for a logical failure; the envelope's
//! `success` field carries status so scripted callers can pipe output
//! straight into a JSON parser regardless of what happened.

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

/// The `{success, message, data, errors, warnings}` envelope printed by
/// every command.
#[derive(Debug, Clone, Serialize)]
pub struct Outcome {
    /// Whether the operation succeeded logically.
    pub success: bool,
    /// Human-readable summary of what happened.
    pub message: String,
    /// Operation-specific payload; an empty object on failure.
    pub data: Value,
    /// Error strings when `success` is false.
    pub errors: Vec<String>,
    /// Non-fatal notices (backup locations, git hiccups).
    pub warnings: Vec<String>,
}

impl Outcome {
    /// Builds a success envelope with the given payload.
    #[must_use]
    pub fn ok(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Builds a success envelope carrying warnings.
    #[must_use]
    pub fn ok_with_warnings(message: impl Into<String>, data: Value, warnings: Vec<String>) -> Self {
        Self { warnings, ..Self::ok(message, data) }
    }

    /// Builds a failure envelope from an operation error.
    #[must_use]
    pub fn failure(error: &Error) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            data: Value::Object(serde_json::Map::new()),
            errors: vec![error.to_string()],
            warnings: Vec::new(),
        }
    }

    /// Renders the envelope as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error string if serialization fails (it cannot for this
    /// type, but the boundary stays explicit).
    pub fn to_json(&self) -> std::result::Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("Failed to render envelope: {e}"))
    }
}
