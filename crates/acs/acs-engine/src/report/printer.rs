//! Live console output driven by run events.

use std::io::Write;
use std::sync::{Mutex, MutexGuard, PoisonError};

use acs_core::events::{
    AcsEventHandler, PeTimeoutEvent, RuleCompletedEvent, RuleStartedEvent, RunCompletedEvent,
    RunStartedEvent, TokenRejectedEvent,
};
use acs_core::types::RuleStatus;

use super::console::{format_header, format_result};

/// Prints START/END lines as rules run. Each line goes out in one write so
/// it cannot interleave with output from other PEs.
pub struct ConsoleEventHandler<W: Write + Send> {
    out: Mutex<W>,
    use_color: bool,
}

impl ConsoleEventHandler<std::io::Stdout> {
    pub fn stdout(use_color: bool) -> Self {
        Self::with_writer(std::io::stdout(), use_color)
    }
}

impl<W: Write + Send> ConsoleEventHandler<W> {
    pub fn with_writer(writer: W, use_color: bool) -> Self {
        Self {
            out: Mutex::new(writer),
            use_color,
        }
    }

    /// Access the underlying writer.
    pub fn writer(&self) -> MutexGuard<'_, W> {
        self.out.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_line(&self, line: &str) {
        let mut out = self.writer();
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }

    fn color(&self, status: RuleStatus) -> (&'static str, &'static str) {
        if !self.use_color {
            return ("", "");
        }
        let start = match status {
            RuleStatus::Pass | RuleStatus::Partial => "\x1b[32m",
            RuleStatus::Fail => "\x1b[31m",
            RuleStatus::Warn | RuleStatus::Skip => "\x1b[33m",
            RuleStatus::PalNotSupported | RuleStatus::NotImplemented => "\x1b[90m",
        };
        (start, "\x1b[0m")
    }
}

impl<W: Write + Send> AcsEventHandler for ConsoleEventHandler<W> {
    fn on_run_started(&self, _event: &RunStartedEvent) {
        self.write_line("\n-------------------- Running tests --------------------\n");
    }

    fn on_run_completed(&self, _event: &RunCompletedEvent) {
        self.write_line("\n-------------------- Suite run complete --------------------\n");
    }

    fn on_rule_started(&self, event: &RuleStartedEvent) {
        let header = format_header(event.rule, event.module, event.description, event.depth);
        self.write_line(&format!("\n{header}\n"));
    }

    fn on_rule_completed(&self, event: &RuleCompletedEvent) {
        let (start, end) = self.color(event.status);
        let line = format_result(event.rule, event.status, event.depth);
        self.write_line(&format!("{start}{line}{end}\n"));
    }

    fn on_pe_timeout(&self, event: &PeTimeoutEvent) {
        self.write_line(&format!(
            "    PE {} did not complete test {} before timeout\n",
            event.pe_index, event.test_id
        ));
    }

    fn on_token_rejected(&self, event: &TokenRejectedEvent) {
        let line = match event.kind {
            "module" => format!("Invalid module: {}\n", event.token),
            _ => format!("Invalid rule id: {}\n", event.token),
        };
        self.write_line(&line);
    }
}
