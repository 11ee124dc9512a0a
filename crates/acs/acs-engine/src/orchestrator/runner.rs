//! Rule-by-rule execution on the primary PE.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use serde::Serialize;

use acs_core::events::{
    EventDispatcher, RuleCompletedEvent, RuleStartedEvent, RunCompletedEvent, RunStartedEvent,
};
use acs_core::traits::{Cancellable, CancellationToken};
use acs_core::types::{ModuleId, Platform, RuleId, RuleStatus, RunStatistics};
use acs_core::SelectionConfig;

use super::registry::{RuleContext, TestRegistry};
use crate::catalog::{RuleCatalog, TestEntryId};
use crate::gate::{ModuleDiscovery, ModuleGate, ModuleInitCache};
use crate::pe::PeRendezvous;

/// Verdict for one rule, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleOutcome {
    pub rule: RuleId,
    /// `None` for a rule with no catalog entry.
    pub module: Option<ModuleId>,
    pub status: RuleStatus,
    /// 0 for a top-level rule, 1 for a base rule run through an alias.
    pub depth: usize,
    /// The alias this rule ran under.
    pub parent: Option<RuleId>,
}

/// Everything one run produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub platform: Platform,
    pub num_pe: usize,
    pub outcomes: Vec<RuleOutcome>,
    pub statistics: RunStatistics,
    /// Stopped early by the cancellation token.
    pub cancelled: bool,
}

impl RunReport {
    /// The recorded verdict for `rule`, if it reached one.
    pub fn status_of(&self, rule: RuleId) -> Option<RuleStatus> {
        self.outcomes.iter().find(|o| o.rule == rule).map(|o| o.status)
    }
}

/// Walks a rule list and dispatches each rule's test entry.
pub struct Orchestrator {
    catalog: RuleCatalog,
    registry: TestRegistry,
    selection: SelectionConfig,
    gate: ModuleGate,
    module_init: ModuleInitCache,
    rendezvous: PeRendezvous,
    platform: Platform,
    events: EventDispatcher,
    cancel: CancellationToken,
    statistics: RunStatistics,
    status_map: FxHashMap<RuleId, RuleStatus>,
    outcomes: Vec<RuleOutcome>,
}

impl Orchestrator {
    /// An orchestrator on a single PE with no registered tests.
    pub fn new(catalog: RuleCatalog, selection: SelectionConfig) -> Self {
        let gate = ModuleGate::new(&selection);
        Self {
            catalog,
            registry: TestRegistry::new(),
            selection,
            gate,
            module_init: ModuleInitCache::default(),
            rendezvous: PeRendezvous::single(),
            platform: Platform::default(),
            events: EventDispatcher::new(),
            cancel: CancellationToken::new(),
            statistics: RunStatistics::default(),
            status_map: FxHashMap::default(),
            outcomes: Vec::new(),
        }
    }

    pub fn with_registry(mut self, registry: TestRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_gate(mut self, gate: ModuleGate) -> Self {
        self.gate = gate;
        self
    }

    pub fn with_module_discovery(mut self, discovery: Box<dyn ModuleDiscovery>) -> Self {
        self.module_init = ModuleInitCache::new(discovery);
        self
    }

    pub fn with_rendezvous(mut self, mut rendezvous: PeRendezvous) -> Self {
        rendezvous.set_events(self.events.clone());
        self.rendezvous = rendezvous;
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_events(mut self, events: EventDispatcher) -> Self {
        self.rendezvous.set_events(events.clone());
        self.events = events;
        self
    }

    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn num_pe(&self) -> usize {
        self.rendezvous.num_pe()
    }

    /// Verdict recorded for `rule` in the current or last run.
    pub fn status(&self, rule: RuleId) -> Option<RuleStatus> {
        self.status_map.get(&rule).copied()
    }

    /// Cached module discovery result.
    pub fn module_init_status(&self, module: ModuleId) -> Option<bool> {
        self.module_init.status(module)
    }

    /// Run every rule in `rules`, in canonical order.
    pub fn run(&mut self, rules: &[RuleId]) -> RunReport {
        self.status_map.clear();
        self.outcomes.clear();

        let mut rules = rules.to_vec();
        rules.sort_unstable();
        rules.dedup();

        let num_pe = self.num_pe();
        tracing::info!(
            target: "acs::orchestrator",
            rules = rules.len(),
            num_pe,
            platform = %self.platform,
            "run started"
        );
        self.events.emit_run_started(&RunStartedEvent {
            rule_count: rules.len(),
            num_pe,
            platform: self.platform,
        });

        let mut cancelled = false;
        for rule in rules {
            if self.cancel.is_cancelled() {
                tracing::warn!(target: "acs::orchestrator", next = %rule, "run cancelled");
                cancelled = true;
                break;
            }
            self.run_top_level(rule);
        }

        let statistics = self.statistics.take();
        self.events.emit_run_completed(&RunCompletedEvent { statistics });

        RunReport {
            platform: self.platform,
            num_pe,
            outcomes: std::mem::take(&mut self.outcomes),
            statistics,
            cancelled,
        }
    }

    fn run_top_level(&mut self, rule: RuleId) {
        // A base rule reached through an earlier alias keeps that verdict,
        // whether it ran or was reported unsupported.
        if !self.catalog.is_alias(rule) && self.status_map.contains_key(&rule) {
            tracing::debug!(
                target: "acs::orchestrator",
                rule = %rule,
                "already run through an alias"
            );
            return;
        }

        if let Some(status) = self.catalog.check_support(rule, self.platform).as_status() {
            if self.platform == Platform::Linux {
                tracing::debug!(
                    target: "acs::orchestrator",
                    rule = %rule,
                    "unsupported on linux, dropped"
                );
                return;
            }
            self.start(rule, 0);
            self.finish(rule, status, 0, None, true);
            return;
        }

        if self.catalog.is_alias(rule) {
            self.run_alias(rule);
            return;
        }

        if !self.gate.is_module_enabled(self.catalog.module_of(rule)) {
            tracing::debug!(target: "acs::orchestrator", rule = %rule, "module not enabled");
            return;
        }
        self.start(rule, 0);
        let status = self.execute_base(rule);
        self.finish(rule, status, 0, None, true);
    }

    fn run_alias(&mut self, alias: RuleId) {
        self.start(alias, 0);

        let Some(bases) = self.catalog.aliases(alias).map(<[RuleId]>::to_vec) else {
            tracing::error!(
                target: "acs::orchestrator",
                rule = %alias,
                "alias map entry not found"
            );
            self.finish(alias, RuleStatus::NotImplemented, 0, None, true);
            return;
        };

        if let Some(precheck) = self.catalog.entry(alias).and_then(|e| e.test_entry) {
            if self.invoke(alias, precheck) == RuleStatus::Fail {
                tracing::info!(
                    target: "acs::orchestrator",
                    rule = %alias,
                    "precheck failed, alias not applicable"
                );
                self.finish(alias, RuleStatus::Skip, 0, None, true);
                return;
            }
        }

        let mut merged: Option<RuleStatus> = None;
        let mut partial = false;
        let mut first_unsupported: Option<RuleStatus> = None;
        let mut reached = false;

        for base in bases {
            if self.is_rule_skipped(base)
                || !self.gate.is_module_enabled(self.catalog.module_of(base))
            {
                continue;
            }
            let support = self.catalog.check_support(base, self.platform).as_status();

            if let Some(&previous) = self.status_map.get(&base) {
                reached = true;
                match support {
                    Some(status) => {
                        partial = true;
                        first_unsupported.get_or_insert(status);
                    }
                    None => merged = Some(merged.map_or(previous, |m| m.max_severity(previous))),
                }
                continue;
            }

            reached = true;
            self.start(base, 1);
            if let Some(status) = support {
                partial = true;
                first_unsupported.get_or_insert(status);
                self.finish(base, status, 1, Some(alias), true);
                continue;
            }
            let status = self.execute_base(base);
            self.finish(base, status, 1, Some(alias), true);
            merged = Some(merged.map_or(status, |m| m.max_severity(status)));
        }

        let status = match merged {
            Some(RuleStatus::Pass) if partial => RuleStatus::Partial,
            Some(status) => status,
            None => first_unsupported.unwrap_or(RuleStatus::Skip),
        };
        self.finish(alias, status, 0, None, !reached);
    }

    /// Run a supported base rule's test entry.
    fn execute_base(&mut self, rule: RuleId) -> RuleStatus {
        let Some(entry) = self.catalog.entry(rule).copied() else {
            return RuleStatus::NotImplemented;
        };
        if entry.module != ModuleId::Base
            && !self.module_init.check_module_init(entry.module, self.num_pe())
        {
            return RuleStatus::Skip;
        }
        match entry.test_entry {
            Some(test_entry) => self.invoke(rule, test_entry),
            None => {
                tracing::warn!(target: "acs::orchestrator", rule = %rule, "no test entry");
                RuleStatus::NotImplemented
            }
        }
    }

    fn invoke(&self, rule: RuleId, entry: TestEntryId) -> RuleStatus {
        let Some(test) = self.registry.get(entry).map(Arc::clone) else {
            tracing::debug!(
                target: "acs::orchestrator",
                rule = %rule,
                entry = %entry,
                "no implementation registered"
            );
            return RuleStatus::NotImplemented;
        };
        let ctx = RuleContext::new(rule, self.num_pe(), &self.rendezvous, &self.events);
        match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| test.run(&ctx))) {
            Ok(status) => status,
            Err(_) => {
                tracing::error!(
                    target: "acs::orchestrator",
                    rule = %rule,
                    entry = %entry,
                    "test entry panicked"
                );
                RuleStatus::Fail
            }
        }
    }

    /// Rules removed by the skip lists are never run through an alias either.
    fn is_rule_skipped(&self, rule: RuleId) -> bool {
        self.selection.skip_rule_list.contains(&rule)
            || self.selection.skip_modules.contains(&self.catalog.module_of(rule))
    }

    fn start(&self, rule: RuleId, depth: usize) {
        let entry = self.catalog.entry(rule);
        self.events.emit_rule_started(&RuleStartedEvent {
            rule,
            module: entry.map(|e| e.module),
            description: entry.map(|e| e.description).unwrap_or(""),
            depth,
        });
    }

    fn finish(
        &mut self,
        rule: RuleId,
        status: RuleStatus,
        depth: usize,
        parent: Option<RuleId>,
        counted: bool,
    ) {
        self.status_map.insert(rule, status);
        if counted {
            self.statistics.record(status);
        }
        tracing::debug!(
            target: "acs::orchestrator",
            rule = %rule,
            status = %status,
            depth,
            "rule completed"
        );
        self.outcomes.push(RuleOutcome {
            rule,
            module: self.catalog.entry(rule).map(|e| e.module),
            status,
            depth,
            parent,
        });
        self.events.emit_rule_completed(&RuleCompletedEvent { rule, status, depth });
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("platform", &self.platform)
            .field("num_pe", &self.num_pe())
            .field("registry", &self.registry)
            .finish()
    }
}
