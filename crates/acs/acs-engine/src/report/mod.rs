//! Reporters: output formats for a finished run, plus the live console
//! line printer.

pub mod console;
pub mod json;
pub mod printer;

pub use console::{
    format_header, format_result, format_selection_summary, format_summary, ConsoleReporter,
};
pub use json::JsonReporter;
pub use printer::ConsoleEventHandler;

use acs_core::config::ReportFormat;

use crate::orchestrator::RunReport;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, report: &RunReport) -> Result<String, String>;
}

/// Create the reporter for a format.
pub fn create_reporter(format: ReportFormat, use_color: bool) -> Box<dyn Reporter> {
    match format {
        ReportFormat::Console => Box::new(ConsoleReporter::new(use_color)),
        ReportFormat::Json => Box::new(JsonReporter),
    }
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    &["console", "json"]
}
