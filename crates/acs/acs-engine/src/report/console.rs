//! Console line formats.
//!
//! ```text
//! START PE B_PE_01 : Check Arch symmetry across PE
//! END B_PE_01 PASSED
//! ```
//!
//! Base rules run through an alias are indented four spaces per level.

use std::fmt::Write as _;

use acs_core::types::{ModuleId, RuleId, RuleStatus, RunStatistics};
use acs_core::SelectionConfig;

use super::Reporter;
use crate::orchestrator::RunReport;

const INDENT: &str = "    ";

/// `START <MODULE> <RULE> : <description>`. A rule with no catalog entry
/// prints `-` for its module.
pub fn format_header(
    rule: RuleId,
    module: Option<ModuleId>,
    description: &str,
    depth: usize,
) -> String {
    let module = module.map(|m| m.as_str()).unwrap_or("-");
    format!("{}START {module} {rule} : {description}", INDENT.repeat(depth))
}

/// `END <RULE> <STATUS>`.
pub fn format_result(rule: RuleId, status: RuleStatus, depth: usize) -> String {
    format!("{}END {rule} {}", INDENT.repeat(depth), status.report_str())
}

/// The counter block printed at the end of a run.
pub fn format_summary(stats: &RunStatistics) -> String {
    let rows = [
        ("Total Rules Run", stats.total_rules_run),
        ("Passed", stats.passed),
        ("Passed (Partial)", stats.partial_coverage),
        ("Warnings", stats.warnings),
        ("Skipped", stats.skipped),
        ("Failed", stats.failed),
        ("PAL Not Supported", stats.pal_not_supported),
        ("Not Implemented", stats.not_implemented),
    ];
    let mut out = String::from("---------- ACS Summary ----------\n");
    for (label, value) in rows {
        let _ = writeln!(out, "   {label:<23}: {value}");
    }
    out.push_str("---------------------------------\n");
    out
}

fn join<T: std::fmt::Display>(items: &[T]) -> String {
    items.iter().map(ToString::to_string).collect::<Vec<_>>().join(",")
}

/// Lines listing what is about to run. Skip and module lists are only
/// shown when set.
pub fn format_selection_summary(config: &SelectionConfig, rules: &[RuleId]) -> String {
    let mut out = format!("Selected rules: {}\n", join(rules));
    if !config.skip_rule_list.is_empty() {
        let _ = writeln!(out, "Skipped rules (--skip): {}", join(&config.skip_rule_list));
    }
    if !config.execute_modules.is_empty() {
        let _ = writeln!(out, "Selected modules (-m): {}", join(&config.execute_modules));
    }
    if !config.skip_modules.is_empty() {
        let _ = writeln!(out, "Skipped modules (--skip-modules): {}", join(&config.skip_modules));
    }
    out
}

/// End-of-run report: the summary block.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, report: &RunReport) -> Result<String, String> {
        let mut output = String::new();
        if report.cancelled {
            output.push_str("Run cancelled before all rules were dispatched.\n");
        }
        let summary = format_summary(&report.statistics);
        if self.use_color && report.statistics.failed > 0 {
            output.push_str("\x1b[31m");
            output.push_str(&summary);
            output.push_str("\x1b[0m");
        } else {
            output.push_str(&summary);
        }
        Ok(output)
    }
}
