//! Tests for rule dispatch, alias resolution and run statistics.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use acs_core::events::{AcsEventHandler, EventDispatcher, PeFailureEvent, RuleStartedEvent};
use acs_core::traits::{Cancellable, CancellationToken};
use acs_core::types::{ModuleId, Platform, Platforms, RuleId, RuleStatus};
use acs_core::SelectionConfig;
use acs_engine::catalog::{ModuleTestEntry, RuleFlag, TestEntryId};
use acs_engine::gate::ModuleDiscovery;
use acs_engine::orchestrator::{PayloadTest, RuleContext};
use acs_engine::pe::{PeContext, PeRendezvous, PeSlots, ThreadCluster};
use acs_engine::{ModuleGate, Orchestrator, RuleCatalog, TestRegistry};

fn base(rule: RuleId, entry: &'static str, platforms: Platforms) -> ModuleTestEntry {
    ModuleTestEntry {
        rule,
        module: ModuleId::Pe,
        test_entry: Some(TestEntryId::new(entry)),
        description: "base rule",
        platforms,
        flag: RuleFlag::Base,
    }
}

fn alias(rule: RuleId, precheck: Option<&'static str>) -> ModuleTestEntry {
    ModuleTestEntry {
        rule,
        module: ModuleId::Base,
        test_entry: precheck.map(TestEntryId::new),
        description: "alias rule",
        platforms: Platforms::UEFI,
        flag: RuleFlag::Alias,
    }
}

fn pass(_: &RuleContext<'_>) -> RuleStatus {
    RuleStatus::Pass
}

/// Registers `entry` as a passing test that counts its calls.
fn counted_pass(registry: &mut TestRegistry, entry: &'static str) -> Arc<AtomicUsize> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    registry.register(entry, move |_: &RuleContext<'_>| {
        counter.fetch_add(1, Ordering::SeqCst);
        RuleStatus::Pass
    });
    calls
}

fn orchestrator(catalog: RuleCatalog, registry: TestRegistry) -> Orchestrator {
    let selection = SelectionConfig::default();
    let gate = ModuleGate::with_build_list(&selection, None);
    Orchestrator::new(catalog, selection).with_gate(gate).with_registry(registry)
}

/// One PAL-unsupported base turns an otherwise passing alias PARTIAL.
#[test]
fn test_alias_partial() {
    let catalog = RuleCatalog::empty()
        .with_entry(alias(RuleId::S_L3_01, None))
        .with_entry(base(RuleId::B_PE_01, "T1", Platforms::UEFI))
        .with_entry(base(RuleId::B_PE_02, "T2", Platforms::BAREMETAL))
        .with_entry(base(RuleId::B_PE_03, "T3", Platforms::UEFI))
        .with_alias(RuleId::S_L3_01, &[RuleId::B_PE_01, RuleId::B_PE_02, RuleId::B_PE_03]);
    let registry = TestRegistry::new()
        .with_test("T1", pass)
        .with_test("T2", pass)
        .with_test("T3", pass);

    let report = orchestrator(catalog, registry).run(&[RuleId::S_L3_01]);

    assert_eq!(report.status_of(RuleId::S_L3_01), Some(RuleStatus::Partial));
    assert_eq!(report.status_of(RuleId::B_PE_02), Some(RuleStatus::PalNotSupported));
    let order: Vec<(RuleId, usize)> = report.outcomes.iter().map(|o| (o.rule, o.depth)).collect();
    assert_eq!(
        order,
        vec![
            (RuleId::B_PE_01, 1),
            (RuleId::B_PE_02, 1),
            (RuleId::B_PE_03, 1),
            (RuleId::S_L3_01, 0),
        ]
    );
    assert_eq!(report.outcomes[0].parent, Some(RuleId::S_L3_01));
    assert_eq!(report.statistics.total_rules_run, 3);
    assert_eq!(report.statistics.passed, 2);
    assert_eq!(report.statistics.pal_not_supported, 1);
    assert_eq!(report.statistics.bucket_sum(), report.statistics.total_rules_run);
}

/// The most severe base verdict wins.
#[test]
fn test_alias_takes_worst_verdict() {
    let catalog = RuleCatalog::empty()
        .with_entry(alias(RuleId::S_L3_01, None))
        .with_entry(base(RuleId::B_PE_01, "T1", Platforms::UEFI))
        .with_entry(base(RuleId::B_PE_02, "T2", Platforms::UEFI))
        .with_alias(RuleId::S_L3_01, &[RuleId::B_PE_01, RuleId::B_PE_02]);
    let registry = TestRegistry::new()
        .with_test("T1", |_: &RuleContext<'_>| RuleStatus::Warn)
        .with_test("T2", |_: &RuleContext<'_>| RuleStatus::Skip);

    let report = orchestrator(catalog, registry).run(&[RuleId::S_L3_01]);
    assert_eq!(report.status_of(RuleId::S_L3_01), Some(RuleStatus::Skip));
}

#[derive(Default)]
struct RecordingDiscovery {
    discovered: Arc<Mutex<Vec<ModuleId>>>,
}

impl ModuleDiscovery for RecordingDiscovery {
    fn discover(&self, module: ModuleId, _num_pe: usize) -> bool {
        self.discovered.lock().unwrap().push(module);
        module != ModuleId::Gic
    }
}

/// A failed module init skips every rule of the module and is discovered once.
#[test]
fn test_module_init_failure_skips_module() {
    let mut registry = TestRegistry::new().with_test("PE001", pass);
    let g1 = counted_pass(&mut registry, "G001");
    let g2 = counted_pass(&mut registry, "G002");
    let discovery = RecordingDiscovery::default();
    let discovered = discovery.discovered.clone();

    let mut orch = orchestrator(RuleCatalog::standard(), registry)
        .with_module_discovery(Box::new(discovery));
    let report = orch.run(&[RuleId::B_GIC_02, RuleId::B_PE_01, RuleId::B_GIC_01]);

    assert_eq!(report.status_of(RuleId::B_PE_01), Some(RuleStatus::Pass));
    assert_eq!(report.status_of(RuleId::B_GIC_01), Some(RuleStatus::Skip));
    assert_eq!(report.status_of(RuleId::B_GIC_02), Some(RuleStatus::Skip));
    assert_eq!(g1.load(Ordering::SeqCst) + g2.load(Ordering::SeqCst), 0);
    assert_eq!(*discovered.lock().unwrap(), vec![ModuleId::Pe, ModuleId::Gic]);
    assert_eq!(orch.module_init_status(ModuleId::Gic), Some(false));
    assert_eq!(report.statistics.skipped, 2);
}

/// A base reached through two aliases, and listed directly, runs and
/// counts once.
#[test]
fn test_shared_base_counted_once() {
    let catalog = RuleCatalog::empty()
        .with_entry(alias(RuleId::S_L3_01, None))
        .with_entry(alias(RuleId::P_L1_01, None))
        .with_entry(base(RuleId::B_PE_01, "T1", Platforms::UEFI))
        .with_entry(base(RuleId::B_PE_02, "T2", Platforms::UEFI))
        .with_entry(base(RuleId::B_PE_03, "T3", Platforms::UEFI))
        .with_alias(RuleId::S_L3_01, &[RuleId::B_PE_01, RuleId::B_PE_02])
        .with_alias(RuleId::P_L1_01, &[RuleId::B_PE_02, RuleId::B_PE_03]);
    let mut registry = TestRegistry::new().with_test("T1", pass).with_test("T3", pass);
    let shared = counted_pass(&mut registry, "T2");

    let report = orchestrator(catalog, registry)
        .run(&[RuleId::B_PE_02, RuleId::P_L1_01, RuleId::S_L3_01]);

    assert_eq!(shared.load(Ordering::SeqCst), 1);
    assert_eq!(report.status_of(RuleId::P_L1_01), Some(RuleStatus::Pass));
    assert_eq!(report.outcomes.iter().filter(|o| o.rule == RuleId::B_PE_02).count(), 1);
    assert_eq!(report.statistics.total_rules_run, 3);
    assert_eq!(report.statistics.bucket_sum(), 3);
}

/// An unsupported base reported through an earlier alias is not reported
/// again on its own turn.
#[test]
fn test_unsupported_base_reached_through_alias_counted_once() {
    let catalog = RuleCatalog::empty()
        .with_entry(alias(RuleId::S_L3_01, None))
        .with_entry(base(RuleId::B_PE_01, "T1", Platforms::LINUX))
        .with_entry(base(RuleId::B_PE_02, "T2", Platforms::UEFI))
        .with_alias(RuleId::S_L3_01, &[RuleId::B_PE_01, RuleId::B_PE_02]);
    let registry = TestRegistry::new().with_test("T1", pass).with_test("T2", pass);

    let report = orchestrator(catalog, registry)
        .with_platform(Platform::Uefi)
        .run(&[RuleId::S_L3_01, RuleId::B_PE_01]);

    assert_eq!(report.outcomes.iter().filter(|o| o.rule == RuleId::B_PE_01).count(), 1);
    assert_eq!(report.status_of(RuleId::B_PE_01), Some(RuleStatus::PalNotSupported));
    assert_eq!(report.status_of(RuleId::S_L3_01), Some(RuleStatus::Partial));
    assert_eq!(report.statistics.total_rules_run, 2);
    assert_eq!(report.statistics.pal_not_supported, 1);
    assert_eq!(report.statistics.passed, 1);
}

/// Skip lists reach into aliases.
#[test]
fn test_skip_list_applies_inside_alias() {
    let catalog = RuleCatalog::empty()
        .with_entry(alias(RuleId::S_L3_01, None))
        .with_entry(base(RuleId::B_PE_01, "T1", Platforms::UEFI))
        .with_entry(base(RuleId::B_PE_02, "T2", Platforms::UEFI))
        .with_alias(RuleId::S_L3_01, &[RuleId::B_PE_01, RuleId::B_PE_02]);
    let mut registry = TestRegistry::new().with_test("T1", pass);
    let skipped = counted_pass(&mut registry, "T2");
    let selection = SelectionConfig {
        skip_rule_list: vec![RuleId::B_PE_02],
        ..Default::default()
    };
    let gate = ModuleGate::with_build_list(&selection, None);

    let report = Orchestrator::new(catalog, selection)
        .with_gate(gate)
        .with_registry(registry)
        .run(&[RuleId::S_L3_01]);

    assert_eq!(skipped.load(Ordering::SeqCst), 0);
    assert_eq!(report.status_of(RuleId::S_L3_01), Some(RuleStatus::Pass));
    assert_eq!(report.status_of(RuleId::B_PE_02), None);
}

/// An alias whose bases are all filtered out reports SKIP and is counted.
#[test]
fn test_alias_with_nothing_reached() {
    let catalog = RuleCatalog::empty()
        .with_entry(alias(RuleId::S_L3_01, None))
        .with_entry(base(RuleId::B_PE_01, "T1", Platforms::UEFI))
        .with_alias(RuleId::S_L3_01, &[RuleId::B_PE_01]);
    let selection = SelectionConfig {
        skip_modules: vec![ModuleId::Pe],
        ..Default::default()
    };
    let gate = ModuleGate::with_build_list(&selection, None);
    let report = Orchestrator::new(catalog, selection).with_gate(gate).run(&[RuleId::S_L3_01]);

    assert_eq!(report.status_of(RuleId::S_L3_01), Some(RuleStatus::Skip));
    assert_eq!(report.statistics.total_rules_run, 1);
    assert_eq!(report.statistics.skipped, 1);
}

/// A failing precheck marks the alias not applicable without running bases.
#[test]
fn test_precheck_failure_skips_alias() {
    let catalog = RuleCatalog::empty()
        .with_entry(alias(RuleId::S_L3_01, Some("PRE")))
        .with_entry(base(RuleId::B_PE_01, "T1", Platforms::UEFI))
        .with_alias(RuleId::S_L3_01, &[RuleId::B_PE_01]);
    let mut registry = TestRegistry::new().with_test("PRE", |_: &RuleContext<'_>| RuleStatus::Fail);
    let calls = counted_pass(&mut registry, "T1");

    let report = orchestrator(catalog, registry).run(&[RuleId::S_L3_01]);
    assert_eq!(report.status_of(RuleId::S_L3_01), Some(RuleStatus::Skip));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(report.statistics.total_rules_run, 1);
}

#[test]
fn test_alias_without_map_entry() {
    let catalog = RuleCatalog::empty().with_entry(alias(RuleId::S_L3_01, None));
    let report = orchestrator(catalog, TestRegistry::new()).run(&[RuleId::S_L3_01]);
    assert_eq!(report.status_of(RuleId::S_L3_01), Some(RuleStatus::NotImplemented));
    assert_eq!(report.statistics.not_implemented, 1);
}

/// Missing rows and missing implementations report NOT IMPLEMENTED.
#[test]
fn test_not_implemented() {
    let report = orchestrator(RuleCatalog::standard(), TestRegistry::new())
        .run(&[RuleId::B_PE_01, RuleId::B_PE_05]);
    assert_eq!(report.status_of(RuleId::B_PE_01), Some(RuleStatus::NotImplemented));
    assert_eq!(report.status_of(RuleId::B_PE_05), Some(RuleStatus::NotImplemented));
    let missing = report.outcomes.iter().find(|o| o.rule == RuleId::B_PE_05).unwrap();
    assert_eq!(missing.module, None);
    assert_eq!(report.statistics.not_implemented, 2);
}

/// On Linux, rules without a Linux test are dropped silently.
#[test]
fn test_linux_drops_unsupported() {
    let registry = TestRegistry::new().with_test("M004", pass);
    let report = orchestrator(RuleCatalog::standard(), registry)
        .with_platform(Platform::Linux)
        .run(&[RuleId::B_PE_01, RuleId::V_L1MM_02]);

    assert_eq!(report.status_of(RuleId::B_PE_01), None);
    assert_eq!(report.status_of(RuleId::V_L1MM_02), Some(RuleStatus::Pass));
    assert_eq!(report.statistics.total_rules_run, 1);
}

/// Elsewhere they are reported as PAL not supported.
#[test]
fn test_uefi_reports_pal_not_supported() {
    let report = orchestrator(RuleCatalog::standard(), TestRegistry::new())
        .run(&[RuleId::V_L1MM_02]);
    assert_eq!(report.status_of(RuleId::V_L1MM_02), Some(RuleStatus::PalNotSupported));
    assert_eq!(report.statistics.pal_not_supported, 1);
}

#[test]
fn test_module_not_enabled_is_silent() {
    let selection = SelectionConfig {
        execute_modules: vec![ModuleId::Gic],
        ..Default::default()
    };
    let gate = ModuleGate::with_build_list(&selection, None);
    let registry = TestRegistry::new().with_test("PE001", pass).with_test("G001", pass);
    let report = Orchestrator::new(RuleCatalog::standard(), selection)
        .with_gate(gate)
        .with_registry(registry)
        .run(&[RuleId::B_PE_01, RuleId::B_GIC_01]);

    assert_eq!(report.outcomes.len(), 1);
    assert_eq!(report.status_of(RuleId::B_GIC_01), Some(RuleStatus::Pass));
}

#[test]
fn test_panicking_test_fails_rule() {
    let registry = TestRegistry::new()
        .with_test("PE001", |_: &RuleContext<'_>| -> RuleStatus { panic!("test bug") })
        .with_test("PE002", pass);
    let report = orchestrator(RuleCatalog::standard(), registry)
        .run(&[RuleId::B_PE_01, RuleId::B_PE_02]);
    assert_eq!(report.status_of(RuleId::B_PE_01), Some(RuleStatus::Fail));
    assert_eq!(report.status_of(RuleId::B_PE_02), Some(RuleStatus::Pass));
}

/// Cancellation stops dispatch before the next top-level rule.
#[test]
fn test_cancellation_between_rules() {
    let token = CancellationToken::new();
    let trigger = token.clone();
    let registry = TestRegistry::new()
        .with_test("PE001", move |_: &RuleContext<'_>| {
            trigger.cancel();
            RuleStatus::Pass
        })
        .with_test("PE002", pass);

    let report = orchestrator(RuleCatalog::standard(), registry)
        .with_cancellation(token)
        .run(&[RuleId::B_PE_01, RuleId::B_PE_02]);

    assert!(report.cancelled);
    assert_eq!(report.status_of(RuleId::B_PE_01), Some(RuleStatus::Pass));
    assert_eq!(report.status_of(RuleId::B_PE_02), None);
    assert_eq!(report.statistics.total_rules_run, 1);
}

/// Statistics are reset between runs.
#[test]
fn test_statistics_reset_per_run() {
    let registry = TestRegistry::new().with_test("PE001", pass);
    let mut orch = orchestrator(RuleCatalog::standard(), registry);
    let first = orch.run(&[RuleId::B_PE_01, RuleId::B_PE_01]);
    let second = orch.run(&[RuleId::B_PE_01]);
    assert_eq!(first.statistics.total_rules_run, 1);
    assert_eq!(second.statistics, first.statistics);
    assert_eq!(orch.status(RuleId::B_PE_01), Some(RuleStatus::Pass));
}

#[derive(Default)]
struct Recorder {
    headers: Mutex<Vec<(RuleId, usize)>>,
    failures: Mutex<Vec<(usize, u16)>>,
}

impl AcsEventHandler for Recorder {
    fn on_rule_started(&self, event: &RuleStartedEvent) {
        self.headers.lock().unwrap().push((event.rule, event.depth));
    }

    fn on_pe_failure(&self, event: &PeFailureEvent) {
        self.failures.lock().unwrap().push((event.pe_index, event.checkpoint));
    }
}

/// A payload failing on one secondary fails the rule and names the PE.
#[test]
fn test_multi_pe_failure() {
    let slots = Arc::new(PeSlots::new(4));
    let cluster = ThreadCluster::spawn(slots.clone()).unwrap();
    let rendezvous = PeRendezvous::new(slots, Box::new(cluster));

    let recorder = Arc::new(Recorder::default());
    let mut events = EventDispatcher::new();
    events.register(recorder.clone());

    let registry = TestRegistry::new()
        .with_test(
            "PE001",
            PayloadTest::new(|ctx: &PeContext<'_>| {
                if ctx.index() == 3 {
                    ctx.set_fail(7);
                } else {
                    ctx.set_pass();
                }
            }),
        )
        .with_test("PE002", PayloadTest::new(|ctx: &PeContext<'_>| {
            ctx.set_pass();
        }));

    let mut orch = orchestrator(RuleCatalog::standard(), registry)
        .with_rendezvous(rendezvous)
        .with_events(events);
    assert_eq!(orch.num_pe(), 4);
    let report = orch.run(&[RuleId::B_PE_01, RuleId::B_PE_02]);

    assert_eq!(report.num_pe, 4);
    assert_eq!(report.status_of(RuleId::B_PE_01), Some(RuleStatus::Fail));
    assert_eq!(report.status_of(RuleId::B_PE_02), Some(RuleStatus::Pass));
    assert_eq!(*recorder.failures.lock().unwrap(), vec![(3, 7)]);
    assert_eq!(
        *recorder.headers.lock().unwrap(),
        vec![(RuleId::B_PE_01, 0), (RuleId::B_PE_02, 0)]
    );
}
