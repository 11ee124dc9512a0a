//! Tests for rule list expansion and filtering.

use proptest::prelude::*;

use acs_core::errors::SelectionError;
use acs_core::types::{Arch, LevelFilterMode, ModuleId, RuleId, SoftwareView};
use acs_core::SelectionConfig;
use acs_engine::{filter_rule_list, ModuleGate, RuleCatalog, SelectionContext};

fn filter(catalog: &RuleCatalog, config: &SelectionConfig) -> Result<Vec<RuleId>, SelectionError> {
    let gate = ModuleGate::with_build_list(config, None);
    let ctx = SelectionContext::new(catalog, config, &gate);
    filter_rule_list(&ctx, config.rule_list.clone())
}

/// Explicit rules are sorted and de-duplicated.
#[test]
fn test_explicit_rules_sorted_and_unique() {
    let catalog = RuleCatalog::standard();
    let config = SelectionConfig {
        rule_list: vec![RuleId::B_PE_03, RuleId::B_PE_01, RuleId::B_PE_01],
        ..Default::default()
    };
    assert_eq!(filter(&catalog, &config).unwrap(), vec![RuleId::B_PE_01, RuleId::B_PE_03]);
}

/// ONLY 4 on SBSA yields exactly the level-4 checklist rows.
#[test]
fn test_sbsa_only_level_four() {
    let catalog = RuleCatalog::standard();
    let config = SelectionConfig {
        arch: Arch::Sbsa,
        level_filter_mode: LevelFilterMode::Only,
        level_value: 4,
        ..Default::default()
    };
    let mut expected: Vec<RuleId> = catalog
        .checklist(Arch::Sbsa)
        .iter()
        .filter(|e| e.level == 4)
        .map(|e| e.rule)
        .collect();
    expected.sort_unstable();
    assert!(!expected.is_empty());
    assert_eq!(filter(&catalog, &config).unwrap(), expected);
}

/// MAX keeps everything at or below the level.
#[test]
fn test_sbsa_max_level() {
    let catalog = RuleCatalog::standard();
    let config = SelectionConfig {
        arch: Arch::Sbsa,
        level_filter_mode: LevelFilterMode::Max,
        level_value: 5,
        ..Default::default()
    };
    let rules = filter(&catalog, &config).unwrap();
    for rule in &rules {
        assert!(catalog.checklist_entry(Arch::Sbsa, *rule).unwrap().level <= 5);
    }
    assert!(rules.contains(&RuleId::S_L5PE_01));
}

/// FR mode keeps only rows at the FR sentinel.
#[test]
fn test_fr_mode() {
    let catalog = RuleCatalog::standard();
    let config = SelectionConfig {
        arch: Arch::Sbsa,
        level_filter_mode: LevelFilterMode::Fr,
        ..Default::default()
    };
    let rules = filter(&catalog, &config).unwrap();
    assert!(rules.contains(&RuleId::S_L8PE_01));
    for rule in &rules {
        assert_eq!(catalog.checklist_entry(Arch::Sbsa, *rule).unwrap().level, 8);
    }
}

/// A module allow-list keeps only that module's rules, at any level.
#[test]
fn test_module_allow_list() {
    let catalog = RuleCatalog::standard();
    let config = SelectionConfig {
        arch: Arch::Sbsa,
        execute_modules: vec![ModuleId::Pcie],
        ..Default::default()
    };
    let rules = filter(&catalog, &config).unwrap();
    let expected = catalog
        .checklist(Arch::Sbsa)
        .iter()
        .filter(|e| catalog.module_of(e.rule) == ModuleId::Pcie)
        .count();
    assert_eq!(rules.len(), expected);
    assert!(rules.iter().all(|&r| catalog.module_of(r) == ModuleId::Pcie));
}

/// Skipped rules never survive, even when requested explicitly.
#[test]
fn test_skip_beats_explicit_request() {
    let catalog = RuleCatalog::standard();
    let config = SelectionConfig {
        rule_list: vec![RuleId::B_PE_01, RuleId::B_PE_02],
        skip_rule_list: vec![RuleId::B_PE_02],
        ..Default::default()
    };
    assert_eq!(filter(&catalog, &config).unwrap(), vec![RuleId::B_PE_01]);
}

#[test]
fn test_skip_modules() {
    let catalog = RuleCatalog::standard();
    let config = SelectionConfig {
        rule_list: vec![RuleId::B_PE_01, RuleId::B_GIC_01],
        skip_modules: vec![ModuleId::Gic],
        ..Default::default()
    };
    assert_eq!(filter(&catalog, &config).unwrap(), vec![RuleId::B_PE_01]);
}

/// The software-view mask narrows BSA rows by their tag.
#[test]
fn test_bsa_sw_view_filter() {
    let catalog = RuleCatalog::standard();
    let config = SelectionConfig {
        arch: Arch::Bsa,
        bsa_sw_view_mask: SoftwareView::Ps.bit(),
        ..Default::default()
    };
    let rules = filter(&catalog, &config).unwrap();
    assert!(rules.contains(&RuleId::B_PE_23));
    assert!(!rules.contains(&RuleId::B_PE_01));
    for rule in &rules {
        let view = catalog.checklist_entry(Arch::Bsa, *rule).and_then(|e| e.sw_view);
        assert!(matches!(view, None | Some(SoftwareView::Ps)));
    }
}

/// Rules outside the arch checklist bypass the level filter.
#[test]
fn test_level_filter_ignores_non_checklist_rules() {
    let catalog = RuleCatalog::standard();
    let config = SelectionConfig {
        rule_list: vec![RuleId::V_L1PE_02],
        arch: Arch::Sbsa,
        level_filter_mode: LevelFilterMode::Only,
        level_value: 3,
        ..Default::default()
    };
    assert!(filter(&catalog, &config).unwrap().contains(&RuleId::V_L1PE_02));
}

/// A build-time list applies only without a runtime list.
#[test]
fn test_build_list_gate() {
    let catalog = RuleCatalog::standard();
    let mut config = SelectionConfig {
        rule_list: vec![RuleId::B_PE_01, RuleId::B_GIC_01],
        ..Default::default()
    };
    let gate = ModuleGate::with_build_list(&config, Some(vec![ModuleId::Gic]));
    let ctx = SelectionContext::new(&catalog, &config, &gate);
    assert_eq!(filter_rule_list(&ctx, config.rule_list.clone()).unwrap(), vec![RuleId::B_GIC_01]);

    config.execute_modules = vec![ModuleId::Pe];
    let gate = ModuleGate::with_build_list(&config, Some(vec![ModuleId::Gic]));
    let ctx = SelectionContext::new(&catalog, &config, &gate);
    assert_eq!(filter_rule_list(&ctx, config.rule_list.clone()).unwrap(), vec![RuleId::B_PE_01]);
}

/// An empty result is an error, not an empty success.
#[test]
fn test_nothing_to_execute() {
    let catalog = RuleCatalog::standard();
    let config = SelectionConfig {
        rule_list: vec![RuleId::B_PE_01],
        skip_rule_list: vec![RuleId::B_PE_01],
        ..Default::default()
    };
    assert!(matches!(filter(&catalog, &config), Err(SelectionError::NothingToExecute)));
    assert!(matches!(
        filter(&catalog, &SelectionConfig::default()),
        Err(SelectionError::NothingToExecute)
    ));
}

fn arch_strategy() -> impl Strategy<Value = Arch> {
    prop::sample::select(vec![Arch::None, Arch::Bsa, Arch::Sbsa, Arch::Pcbsa, Arch::Vbsa])
}

fn mode_strategy() -> impl Strategy<Value = LevelFilterMode> {
    prop::sample::select(vec![
        LevelFilterMode::None,
        LevelFilterMode::Max,
        LevelFilterMode::Only,
        LevelFilterMode::Fr,
    ])
}

fn rules_strategy(max: usize) -> impl Strategy<Value = Vec<RuleId>> {
    prop::collection::vec(prop::sample::select(RuleId::ALL), 0..max)
}

proptest! {
    #[test]
    fn filtered_list_is_sorted_and_unique(
        rules in rules_strategy(40),
        skip in rules_strategy(10),
        arch in arch_strategy(),
        mode in mode_strategy(),
        level in 1u8..9,
    ) {
        let catalog = RuleCatalog::standard();
        let config = SelectionConfig {
            rule_list: rules,
            skip_rule_list: skip.clone(),
            arch,
            level_filter_mode: mode,
            level_value: level,
            ..Default::default()
        };
        if let Ok(out) = filter(&catalog, &config) {
            prop_assert!(out.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(out.iter().all(|r| !skip.contains(r)));
        }
    }

    #[test]
    fn filtering_is_idempotent(
        rules in rules_strategy(40),
        arch in arch_strategy(),
        mode in mode_strategy(),
        level in 1u8..9,
    ) {
        let catalog = RuleCatalog::standard();
        let config = SelectionConfig {
            rule_list: rules,
            arch,
            level_filter_mode: mode,
            level_value: level,
            ..Default::default()
        };
        if let Ok(first) = filter(&catalog, &config) {
            let again = SelectionConfig { rule_list: first.clone(), ..config.clone() };
            prop_assert_eq!(filter(&catalog, &again).unwrap(), first);
        }
    }

    #[test]
    fn only_mode_keeps_exact_level(level in 3u8..9) {
        let catalog = RuleCatalog::standard();
        let config = SelectionConfig {
            arch: Arch::Sbsa,
            level_filter_mode: LevelFilterMode::Only,
            level_value: level,
            ..Default::default()
        };
        if let Ok(out) = filter(&catalog, &config) {
            for rule in out {
                prop_assert_eq!(catalog.checklist_entry(Arch::Sbsa, rule).unwrap().level, level);
            }
        }
    }

    #[test]
    fn order_independent_of_input_permutation(rules in rules_strategy(30)) {
        let catalog = RuleCatalog::standard();
        let forward = SelectionConfig { rule_list: rules.clone(), ..Default::default() };
        let mut reversed_rules = rules;
        reversed_rules.reverse();
        let reversed = SelectionConfig { rule_list: reversed_rules, ..Default::default() };
        prop_assert_eq!(filter(&catalog, &forward).ok(), filter(&catalog, &reversed).ok());
    }
}
