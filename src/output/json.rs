//! JSON output formatting

use crate::expand::ExpansionResult;

/// Format a result as JSON
pub fn format(result: &ExpansionResult) -> String {
    serde_json::to_string_pretty(result)
        .unwrap_or_else(|e| format!(r#"{{"error": "Failed to serialize result: {}"}}"#, e))
}
