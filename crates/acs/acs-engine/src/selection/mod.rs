//! Selection engine: turns the resolved selection into the final, ordered
//! rule list.
//!
//! Filtering works on rule identities as written. Alias rules are kept as
//! aliases here and only expanded at dispatch.

use rustc_hash::FxHashSet;

use acs_core::errors::SelectionError;
use acs_core::types::{Arch, LevelFilterMode, RuleId};
use acs_core::SelectionConfig;

use crate::catalog::RuleCatalog;
use crate::gate::ModuleGate;

/// Everything filtering reads. Borrowed for the duration of one call.
#[derive(Debug, Clone, Copy)]
pub struct SelectionContext<'a> {
    pub catalog: &'a RuleCatalog,
    pub config: &'a SelectionConfig,
    pub gate: &'a ModuleGate,
}

impl<'a> SelectionContext<'a> {
    pub fn new(
        catalog: &'a RuleCatalog,
        config: &'a SelectionConfig,
        gate: &'a ModuleGate,
    ) -> Self {
        Self {
            catalog,
            config,
            gate,
        }
    }

    /// Level filter. Applies only with an arch selected, and only to rules
    /// in that arch's checklist.
    fn level_selected(&self, rule: RuleId) -> bool {
        let arch = self.config.arch;
        if arch == Arch::None {
            return true;
        }
        let Some(entry) = self.catalog.checklist_entry(arch, rule) else {
            return true;
        };
        match self.config.level_filter_mode {
            LevelFilterMode::None => true,
            LevelFilterMode::Max => entry.level <= self.config.level_value,
            LevelFilterMode::Only => entry.level == self.config.level_value,
            LevelFilterMode::Fr => Some(entry.level) == arch.fr_level(),
        }
    }

    /// Software-view filter, BSA only. Untagged rules always pass.
    fn sw_view_selected(&self, rule: RuleId) -> bool {
        if self.config.arch != Arch::Bsa || self.config.bsa_sw_view_mask == 0 {
            return true;
        }
        match self
            .catalog
            .checklist_entry(Arch::Bsa, rule)
            .and_then(|e| e.sw_view)
        {
            Some(view) => self.config.sw_view_selected(view),
            None => true,
        }
    }

    fn module_selected(&self, rule: RuleId) -> bool {
        let module = self.catalog.module_of(rule);
        self.gate.is_module_enabled(module) && !self.config.skip_modules.contains(&module)
    }

    /// Whether a rule is in the skip list.
    pub fn is_rule_skipped(&self, rule: RuleId) -> bool {
        self.config.skip_rule_list.contains(&rule)
    }
}

/// Build the final rule list from an explicit `list` plus the selected
/// arch's checklist.
///
/// Steps, in order: arch expansion, level filter, software-view filter,
/// skip-rule removal, module filter, sort and de-duplicate. An empty result
/// is `SelectionError::NothingToExecute`.
pub fn filter_rule_list(
    ctx: &SelectionContext<'_>,
    list: Vec<RuleId>,
) -> Result<Vec<RuleId>, SelectionError> {
    let mut rules = list;

    // 1. Arch expansion
    if ctx.config.arch != Arch::None {
        let mut present: FxHashSet<RuleId> = rules.iter().copied().collect();
        for entry in ctx.catalog.checklist(ctx.config.arch) {
            if present.insert(entry.rule) {
                rules.push(entry.rule);
            }
        }
    }

    // 2-5. Narrowing
    rules.retain(|&rule| {
        ctx.level_selected(rule)
            && ctx.sw_view_selected(rule)
            && !ctx.is_rule_skipped(rule)
            && ctx.module_selected(rule)
    });

    // 6. Canonical order, no repeats
    rules.sort_unstable();
    rules.dedup();

    tracing::debug!(
        target: "acs::selection",
        count = rules.len(),
        arch = %ctx.config.arch,
        "rule list filtered"
    );

    if rules.is_empty() {
        return Err(SelectionError::NothingToExecute);
    }
    Ok(rules)
}
