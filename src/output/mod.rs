//! Output formatting

pub mod human;
pub mod json;

use crate::cli::OutputFormat;
use crate::expand::ExpansionResult;

/// Format an expansion result for output
pub fn format_result(result: &ExpansionResult, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => human::format(result),
        OutputFormat::Json => json::format(result),
    }
}
