//! Tests for console line formats, reporters and the live printer.

use std::sync::Arc;

use acs_core::config::ReportFormat;
use acs_core::events::{
    AcsEventHandler, EventDispatcher, PeTimeoutEvent, RuleCompletedEvent, RuleStartedEvent,
    TokenRejectedEvent,
};
use acs_core::types::{ModuleId, RuleId, RuleStatus, RunStatistics};
use acs_core::SelectionConfig;
use acs_engine::orchestrator::RuleContext;
use acs_engine::report::{
    available_formats, create_reporter, format_header, format_result, format_selection_summary,
    format_summary, ConsoleEventHandler,
};
use acs_engine::{ModuleGate, Orchestrator, RuleCatalog, RunReport, TestRegistry};

#[test]
fn test_header_and_result_lines() {
    assert_eq!(
        format_header(RuleId::B_PE_01, Some(ModuleId::Pe), "Check Arch symmetry across PE", 0),
        "START PE B_PE_01 : Check Arch symmetry across PE"
    );
    assert_eq!(format_header(RuleId::B_PE_05, None, "", 0), "START - B_PE_05 : ");
    assert_eq!(
        format_result(RuleId::B_WD_01, RuleStatus::Skip, 1),
        "    END B_WD_01 SKIPPED"
    );
    assert_eq!(
        format_result(RuleId::S_L3_01, RuleStatus::Partial, 0),
        "END S_L3_01 PASSED(*PARTIAL)"
    );
}

#[test]
fn test_summary_block() {
    let mut stats = RunStatistics::default();
    stats.record(RuleStatus::Pass);
    stats.record(RuleStatus::Fail);
    let summary = format_summary(&stats);
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines.first(), Some(&"---------- ACS Summary ----------"));
    assert_eq!(lines[1], "   Total Rules Run        : 2");
    assert_eq!(lines[6], "   Failed                 : 1");
    assert_eq!(lines.len(), 10);
}

#[test]
fn test_selection_summary() {
    let config = SelectionConfig {
        skip_rule_list: vec![RuleId::B_PE_02],
        execute_modules: vec![ModuleId::Pe, ModuleId::Gic],
        ..Default::default()
    };
    let text = format_selection_summary(&config, &[RuleId::B_PE_01, RuleId::B_GIC_01]);
    assert_eq!(
        text,
        "Selected rules: B_PE_01,B_GIC_01\n\
         Skipped rules (--skip): B_PE_02\n\
         Selected modules (-m): PE,GIC\n"
    );
}

fn sample_report() -> RunReport {
    let selection = SelectionConfig::default();
    let gate = ModuleGate::with_build_list(&selection, None);
    let registry = TestRegistry::new()
        .with_test("PE001", |_: &RuleContext<'_>| RuleStatus::Pass)
        .with_test("PE002", |_: &RuleContext<'_>| RuleStatus::Fail);
    Orchestrator::new(RuleCatalog::standard(), selection)
        .with_gate(gate)
        .with_registry(registry)
        .run(&[RuleId::B_PE_01, RuleId::B_PE_02])
}

/// The JSON report carries every outcome and the counters.
#[test]
fn test_json_reporter() {
    let reporter = create_reporter(ReportFormat::Json, false);
    assert_eq!(reporter.name(), "json");
    let output = reporter.generate(&sample_report()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["platform"], "uefi");
    assert_eq!(value["outcomes"][0]["rule"], "B_PE_01");
    assert_eq!(value["outcomes"][0]["module"], "PE");
    assert_eq!(value["outcomes"][1]["status"], "fail");
    assert_eq!(value["statistics"]["total_rules_run"], 2);
    assert_eq!(value["cancelled"], false);
}

/// Failures color the console summary red only when color is on.
#[test]
fn test_console_reporter_color() {
    let report = sample_report();
    let plain = create_reporter(ReportFormat::Console, false).generate(&report).unwrap();
    assert!(plain.starts_with("---------- ACS Summary"));
    assert!(!plain.contains('\x1b'));

    let colored = create_reporter(ReportFormat::Console, true).generate(&report).unwrap();
    assert!(colored.starts_with("\x1b[31m"));
    assert_eq!(available_formats(), &["console", "json"]);
}

fn printed(handler: &ConsoleEventHandler<Vec<u8>>) -> String {
    String::from_utf8(handler.writer().clone()).unwrap()
}

/// The live printer writes one header and one result line per rule.
#[test]
fn test_console_event_handler_lines() {
    let handler = ConsoleEventHandler::with_writer(Vec::new(), false);
    handler.on_rule_started(&RuleStartedEvent {
        rule: RuleId::B_WD_01,
        module: Some(ModuleId::Watchdog),
        description: "Non Secure Watchdog Access",
        depth: 1,
    });
    handler.on_rule_completed(&RuleCompletedEvent {
        rule: RuleId::B_WD_01,
        status: RuleStatus::Pass,
        depth: 1,
    });
    handler.on_pe_timeout(&PeTimeoutEvent { test_id: 12, pe_index: 2 });
    handler.on_token_rejected(&TokenRejectedEvent {
        kind: "module",
        token: "bogus".to_string(),
    });

    assert_eq!(
        printed(&handler),
        "\n    START WATCHDOG B_WD_01 : Non Secure Watchdog Access\n\
         \x20   END B_WD_01 PASSED\n\
         \x20   PE 2 did not complete test 12 before timeout\n\
         Invalid module: bogus\n"
    );
}

#[test]
fn test_console_event_handler_color() {
    let handler = ConsoleEventHandler::with_writer(Vec::new(), true);
    handler.on_rule_completed(&RuleCompletedEvent {
        rule: RuleId::B_PE_01,
        status: RuleStatus::Fail,
        depth: 0,
    });
    assert_eq!(printed(&handler), "\x1b[31mEND B_PE_01 FAILED\x1b[0m\n");
}

/// Driven through a run, the printer frames the output with banners.
#[test]
fn test_console_event_handler_in_run() {
    let handler = Arc::new(ConsoleEventHandler::with_writer(Vec::new(), false));
    let mut events = EventDispatcher::new();
    events.register(handler.clone());

    let selection = SelectionConfig::default();
    let gate = ModuleGate::with_build_list(&selection, None);
    Orchestrator::new(RuleCatalog::standard(), selection)
        .with_gate(gate)
        .with_events(events)
        .run(&[RuleId::B_PE_01]);

    let out = printed(&handler);
    assert!(out.starts_with("\n-------------------- Running tests --------------------\n"));
    assert!(out.contains("\nSTART PE B_PE_01 : Check Arch symmetry across PE\n"));
    assert!(out.contains("END B_PE_01 NOT TESTED (TEST NOT IMPLEMENTED)\n"));
    assert!(out.ends_with("\n-------------------- Suite run complete --------------------\n"));
}
