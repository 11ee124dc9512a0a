//! Tests for the event dispatcher.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use acs_core::events::{
    AcsEventHandler, EventDispatcher, PeTimeoutEvent, RuleCompletedEvent, RuleStartedEvent,
    TokenRejectedEvent,
};
use acs_core::types::{ModuleId, RuleId, RuleStatus};

#[derive(Default)]
struct Recorder {
    started: Mutex<Vec<RuleId>>,
    completed: Mutex<Vec<(RuleId, RuleStatus)>>,
    timeouts: AtomicUsize,
}

impl AcsEventHandler for Recorder {
    fn on_rule_started(&self, event: &RuleStartedEvent) {
        self.started.lock().unwrap().push(event.rule);
    }

    fn on_rule_completed(&self, event: &RuleCompletedEvent) {
        self.completed.lock().unwrap().push((event.rule, event.status));
    }

    fn on_pe_timeout(&self, _event: &PeTimeoutEvent) {
        self.timeouts.fetch_add(1, Ordering::SeqCst);
    }
}

struct Panicker;

impl AcsEventHandler for Panicker {
    fn on_rule_started(&self, _event: &RuleStartedEvent) {
        panic!("handler bug");
    }
}

fn started(rule: RuleId) -> RuleStartedEvent {
    RuleStartedEvent {
        rule,
        module: Some(ModuleId::Pe),
        description: "",
        depth: 0,
    }
}

/// Every registered handler sees every event.
#[test]
fn test_fan_out_to_all_handlers() {
    let a = Arc::new(Recorder::default());
    let b = Arc::new(Recorder::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(a.clone());
    dispatcher.register(b.clone());
    assert_eq!(dispatcher.handler_count(), 2);

    dispatcher.emit_rule_started(&started(RuleId::B_PE_01));
    dispatcher.emit_rule_completed(&RuleCompletedEvent {
        rule: RuleId::B_PE_01,
        status: RuleStatus::Pass,
        depth: 0,
    });
    dispatcher.emit_pe_timeout(&PeTimeoutEvent { test_id: 2, pe_index: 3 });

    for recorder in [&a, &b] {
        assert_eq!(*recorder.started.lock().unwrap(), vec![RuleId::B_PE_01]);
        assert_eq!(*recorder.completed.lock().unwrap(), vec![(RuleId::B_PE_01, RuleStatus::Pass)]);
        assert_eq!(recorder.timeouts.load(Ordering::SeqCst), 1);
    }
}

/// A panicking handler does not stop the handlers after it.
#[test]
fn test_panicking_handler_is_isolated() {
    let recorder = Arc::new(Recorder::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(Panicker));
    dispatcher.register(recorder.clone());

    dispatcher.emit_rule_started(&started(RuleId::B_PE_02));
    dispatcher.emit_rule_started(&started(RuleId::B_PE_03));

    assert_eq!(*recorder.started.lock().unwrap(), vec![RuleId::B_PE_02, RuleId::B_PE_03]);
}

/// Events a handler does not override are no-ops.
#[test]
fn test_default_methods_are_noops() {
    let recorder = Arc::new(Recorder::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(recorder.clone());
    dispatcher.emit_token_rejected(&TokenRejectedEvent {
        kind: "rule",
        token: "B_XYZ_01".to_string(),
    });
    assert!(recorder.started.lock().unwrap().is_empty());
}

/// Clones share the same handler list.
#[test]
fn test_clone_shares_handlers() {
    let recorder = Arc::new(Recorder::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(recorder.clone());
    let copy = dispatcher.clone();
    copy.emit_rule_started(&started(RuleId::B_GIC_01));
    assert_eq!(*recorder.started.lock().unwrap(), vec![RuleId::B_GIC_01]);
    assert_eq!(EventDispatcher::new().handler_count(), 0);
}
