//! JSON reporter: the whole run report via serde_json.

use super::Reporter;
use crate::orchestrator::RunReport;

/// JSON reporter for machine-readable output.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &RunReport) -> Result<String, String> {
        serde_json::to_string_pretty(report).map_err(|e| format!("JSON serialization failed: {e}"))
    }
}
