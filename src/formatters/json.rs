use crate::assessment::AssessmentReport;

/// Serializes an `AssessmentReport`; readings are keyed by their wire names
pub struct JsonFormatter;

impl JsonFormatter {
    /// Indented output for the CLI `--json` flag
    pub fn format(report: &AssessmentReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Same document on a single line
    pub fn format_compact(report: &AssessmentReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }

    /// Report as a JSON value (used by the HTTP layer and its cache)
    pub fn to_value(report: &AssessmentReport) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(report)
    }
}
