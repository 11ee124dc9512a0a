//! Rule catalog: per-architecture checklists, the module/test entry table,
//! and the alias map. Read-only for the life of a run.

mod aliases;
mod checklists;
mod entries;

use std::fmt;

use rustc_hash::FxHashMap;
use serde::Serialize;

use acs_core::types::{Arch, ModuleId, Platform, Platforms, RuleId, SoftwareView, Support};

/// Name of a callable test entry, e.g. `PE001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TestEntryId(&'static str);

impl TestEntryId {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TestEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleFlag {
    /// Runs its own test entry.
    Base,
    /// Stands for an ordered list of base rules.
    Alias,
}

/// One row of the module/test entry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleTestEntry {
    pub rule: RuleId,
    pub module: ModuleId,
    /// Test entry for a base rule. For an alias, an optional precheck.
    pub test_entry: Option<TestEntryId>,
    pub description: &'static str,
    pub platforms: Platforms,
    pub flag: RuleFlag,
}

/// One row of an architecture checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistEntry {
    pub rule: RuleId,
    pub level: u8,
    /// BSA only.
    pub sw_view: Option<SoftwareView>,
}

/// Lookup structure over the static rule tables.
#[derive(Debug, Clone, Default)]
pub struct RuleCatalog {
    entries: FxHashMap<RuleId, ModuleTestEntry>,
    aliases: FxHashMap<RuleId, Vec<RuleId>>,
    checklists: FxHashMap<Arch, Vec<ChecklistEntry>>,
}

impl RuleCatalog {
    /// The built-in BSA/SBSA/PC-BSA/VBSA tables.
    pub fn standard() -> Self {
        let mut catalog = Self::default();
        for entry in entries::STANDARD_ENTRIES {
            catalog = catalog.with_entry(*entry);
        }
        for (alias, bases) in aliases::STANDARD_ALIASES {
            catalog = catalog.with_alias(*alias, bases);
        }
        catalog
            .with_checklist(Arch::Bsa, checklists::bsa::CHECKLIST)
            .with_checklist(Arch::Sbsa, checklists::sbsa::CHECKLIST)
            .with_checklist(Arch::Pcbsa, checklists::pcbsa::CHECKLIST)
            .with_checklist(Arch::Vbsa, checklists::vbsa::CHECKLIST)
    }

    /// An empty catalog, for building custom tables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add or replace a module/test entry.
    pub fn with_entry(mut self, entry: ModuleTestEntry) -> Self {
        self.entries.insert(entry.rule, entry);
        self
    }

    /// Add or replace an alias mapping.
    pub fn with_alias(mut self, alias: RuleId, bases: &[RuleId]) -> Self {
        self.aliases.insert(alias, bases.to_vec());
        self
    }

    /// Add or replace an architecture checklist.
    pub fn with_checklist(mut self, arch: Arch, entries: &[ChecklistEntry]) -> Self {
        self.checklists.insert(arch, entries.to_vec());
        self
    }

    /// Full checklist for `arch`, in table order. Empty for `Arch::None`.
    pub fn checklist(&self, arch: Arch) -> &[ChecklistEntry] {
        self.checklists.get(&arch).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn checklist_entry(&self, arch: Arch, rule: RuleId) -> Option<&ChecklistEntry> {
        self.checklist(arch).iter().find(|e| e.rule == rule)
    }

    pub fn entry(&self, rule: RuleId) -> Option<&ModuleTestEntry> {
        self.entries.get(&rule)
    }

    /// Owning module. Rules without an entry belong to `Base`.
    pub fn module_of(&self, rule: RuleId) -> ModuleId {
        self.entry(rule).map(|e| e.module).unwrap_or(ModuleId::Base)
    }

    pub fn is_alias(&self, rule: RuleId) -> bool {
        self.entry(rule).is_some_and(|e| e.flag == RuleFlag::Alias)
    }

    /// Base rules an alias stands for.
    pub fn aliases(&self, rule: RuleId) -> Option<&[RuleId]> {
        self.aliases.get(&rule).map(Vec::as_slice)
    }

    /// Alias ids present in the alias map, in canonical order.
    pub fn alias_ids(&self) -> Vec<RuleId> {
        let mut ids: Vec<RuleId> = self.aliases.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Every rule with an entry, in canonical order.
    pub fn entry_ids(&self) -> Vec<RuleId> {
        let mut ids: Vec<RuleId> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Whether the rule has a test on `platform`. A rule with no entry
    /// has no test anywhere.
    pub fn check_support(&self, rule: RuleId, platform: Platform) -> Support {
        let platforms = self.entry(rule).map(|e| e.platforms).unwrap_or(Platforms::NONE);
        if platforms.contains(platform) {
            Support::Supported
        } else if platforms.is_empty() {
            Support::NotImplemented
        } else {
            Support::PalNotSupported
        }
    }
}
