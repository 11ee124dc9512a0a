//! Test entries callable by the orchestrator.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use acs_core::events::{EventDispatcher, PeFailureEvent};
use acs_core::types::{RuleId, RuleStatus};

use crate::catalog::TestEntryId;
use crate::pe::{aggregate, Payload, PeContext, PeRendezvous, PeVerdict};

/// What a test entry gets to work with.
pub struct RuleContext<'a> {
    rule: RuleId,
    num_pe: usize,
    rendezvous: &'a PeRendezvous,
    events: &'a EventDispatcher,
}

impl<'a> RuleContext<'a> {
    pub fn new(
        rule: RuleId,
        num_pe: usize,
        rendezvous: &'a PeRendezvous,
        events: &'a EventDispatcher,
    ) -> Self {
        Self {
            rule,
            num_pe,
            rendezvous,
            events,
        }
    }

    pub fn rule(&self) -> RuleId {
        self.rule
    }

    pub fn num_pe(&self) -> usize {
        self.num_pe
    }

    /// Id written into every PE status word for this rule.
    pub fn test_id(&self) -> u16 {
        self.rule.index() as u16
    }

    /// Fan `payload` out to every PE and aggregate the result.
    pub fn run_on_pes(&self, payload: Payload, arg: u64) -> PeVerdict {
        let test_id = self.test_id();
        let fan_in = match self.rendezvous.run_on_pes(test_id, self.num_pe, payload, arg) {
            Ok(fan_in) => fan_in,
            Err(e) => {
                tracing::error!(target: "acs::orchestrator", rule = %self.rule, "{e}");
                return PeVerdict {
                    status: RuleStatus::Fail,
                    pe_index: None,
                    checkpoint: 0,
                };
            }
        };
        let verdict = aggregate(&fan_in.words);
        if let Some(pe_index) = verdict.pe_index {
            self.events.emit_pe_failure(&PeFailureEvent {
                test_id,
                pe_index,
                checkpoint: verdict.checkpoint,
                status: verdict.status,
            });
        }
        verdict
    }
}

/// A callable test entry.
pub trait RuleTest: Send + Sync {
    fn run(&self, ctx: &RuleContext<'_>) -> RuleStatus;
}

impl<F> RuleTest for F
where
    F: Fn(&RuleContext<'_>) -> RuleStatus + Send + Sync,
{
    fn run(&self, ctx: &RuleContext<'_>) -> RuleStatus {
        self(ctx)
    }
}

/// A test entry that runs one payload on every PE.
#[derive(Clone)]
pub struct PayloadTest {
    payload: Payload,
    arg: u64,
}

impl PayloadTest {
    pub fn new<F>(payload: F) -> Self
    where
        F: Fn(&PeContext<'_>) + Send + Sync + 'static,
    {
        Self {
            payload: Arc::new(payload),
            arg: 0,
        }
    }

    pub fn with_arg(mut self, arg: u64) -> Self {
        self.arg = arg;
        self
    }
}

impl RuleTest for PayloadTest {
    fn run(&self, ctx: &RuleContext<'_>) -> RuleStatus {
        ctx.run_on_pes(Arc::clone(&self.payload), self.arg).status
    }
}

/// Test entries by name.
#[derive(Clone, Default)]
pub struct TestRegistry {
    tests: FxHashMap<TestEntryId, Arc<dyn RuleTest>>,
}

impl TestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or replace the implementation of `entry`.
    pub fn register(&mut self, entry: &'static str, test: impl RuleTest + 'static) {
        self.tests.insert(TestEntryId::new(entry), Arc::new(test));
    }

    pub fn with_test(mut self, entry: &'static str, test: impl RuleTest + 'static) -> Self {
        self.register(entry, test);
        self
    }

    pub fn get(&self, entry: TestEntryId) -> Option<&Arc<dyn RuleTest>> {
        self.tests.get(&entry)
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

impl std::fmt::Debug for TestRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.tests.keys().map(TestEntryId::as_str).collect();
        names.sort_unstable();
        f.debug_struct("TestRegistry").field("tests", &names).finish()
    }
}
