//! Resolved rule selection.

use serde::{Deserialize, Serialize};

use super::{AcsConfig, RulesConfig};
use crate::errors::{ConfigError, SelectionError};
use crate::parse::{parse_module_tokens, parse_rule_tokens, resolve_rule_arg, ParsedTokens};
use crate::types::{Arch, LevelFilterMode, ModuleId, RuleId, SoftwareView};

/// Typed selection consumed by the selection engine and the module gate.
///
/// Built once per run. Precedence of sources, highest first: EL3 parameter
/// block, CLI, build-time module list, everything enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    pub rule_list: Vec<RuleId>,
    pub skip_rule_list: Vec<RuleId>,
    pub execute_modules: Vec<ModuleId>,
    pub skip_modules: Vec<ModuleId>,
    pub arch: Arch,
    pub level_filter_mode: LevelFilterMode,
    pub level_value: u8,
    pub bsa_sw_view_mask: u8,
}

/// A rule or module name that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedToken {
    /// "rule" or "module".
    pub kind: &'static str,
    pub token: String,
}

fn collect_rejected(kind: &'static str, tokens: &[String], out: &mut Vec<RejectedToken>) {
    out.extend(tokens.iter().map(|token| RejectedToken {
        kind,
        token: token.clone(),
    }));
}

impl SelectionConfig {
    /// Resolve the `[selection]` section of a loaded config.
    pub fn from_config(config: &AcsConfig) -> Result<(Self, Vec<RejectedToken>), ConfigError> {
        Self::resolve(&config.selection)
    }

    /// Resolve raw names into typed ids.
    ///
    /// A level given without a level mode selects MAX mode. Unknown rule and
    /// module names are returned as rejected tokens, not errors. An
    /// unreadable rules file, an unknown arch, level mode, or software view
    /// is a configuration error.
    pub fn resolve(rules: &RulesConfig) -> Result<(Self, Vec<RejectedToken>), ConfigError> {
        let mut rejected = Vec::new();

        let arch = match rules.arch.as_deref() {
            Some(name) => name.parse::<Arch>().map_err(|message| ConfigError::InvalidValue {
                field: "selection.arch".to_string(),
                message,
            })?,
            None => Arch::None,
        };

        let mut rule_tokens = ParsedTokens::default();
        for arg in &rules.rules {
            let parsed = resolve_rule_arg(arg).map_err(|e| ConfigError::InvalidValue {
                field: "selection.rules".to_string(),
                message: e.to_string(),
            })?;
            rule_tokens.extend(parsed);
        }
        collect_rejected("rule", &rule_tokens.rejected, &mut rejected);

        let mut skip_tokens = ParsedTokens::default();
        for arg in &rules.skip_rules {
            skip_tokens.extend(parse_rule_tokens(arg));
        }
        collect_rejected("rule", &skip_tokens.rejected, &mut rejected);

        let mut module_tokens = ParsedTokens::default();
        for arg in &rules.modules {
            module_tokens.extend(parse_module_tokens(arg));
        }
        collect_rejected("module", &module_tokens.rejected, &mut rejected);

        let mut skip_module_tokens = ParsedTokens::default();
        for arg in &rules.skip_modules {
            skip_module_tokens.extend(parse_module_tokens(arg));
        }
        collect_rejected("module", &skip_module_tokens.rejected, &mut rejected);

        let level_filter_mode = match rules.level_mode.as_deref() {
            Some(mode) => mode
                .parse::<LevelFilterMode>()
                .map_err(|message| ConfigError::InvalidValue {
                    field: "selection.level_mode".to_string(),
                    message,
                })?,
            // A bare level reads like `-l`: run up to and including it.
            None if rules.level.is_some() => LevelFilterMode::Max,
            None => LevelFilterMode::None,
        };

        let mut views = Vec::with_capacity(rules.sw_views.len());
        for view in &rules.sw_views {
            views.push(view.parse::<SoftwareView>().map_err(|message| {
                ConfigError::InvalidValue {
                    field: "selection.sw_views".to_string(),
                    message,
                }
            })?);
        }

        let config = Self {
            rule_list: rule_tokens.values,
            skip_rule_list: skip_tokens.values,
            execute_modules: module_tokens.values,
            skip_modules: skip_module_tokens.values,
            arch,
            level_filter_mode,
            level_value: rules.level.unwrap_or(0),
            bsa_sw_view_mask: SoftwareView::mask_of(&views),
        };
        Ok((config, rejected))
    }

    /// Fill in defaults the way the suite's front ends do, returning the
    /// notices printed for the user.
    ///
    /// - no rule list and no arch selects BSA
    /// - a software-view mask without BSA is dropped
    /// - an arch with no level mode runs in MAX mode at the arch default level
    pub fn apply_defaults(&mut self) -> Vec<String> {
        let mut notices = Vec::new();

        if self.arch == Arch::None && self.rule_list.is_empty() {
            notices.push("No -r or -a specified; defaulting to -a bsa".to_string());
            self.arch = Arch::Bsa;
        }

        if self.bsa_sw_view_mask != 0 && self.arch != Arch::Bsa {
            notices.push("-hyp/-os/-ps ignored: requires -a bsa.".to_string());
            self.bsa_sw_view_mask = 0;
        }

        if self.level_filter_mode == LevelFilterMode::None {
            if let Some(level) = self.arch.default_level() {
                self.level_filter_mode = LevelFilterMode::Max;
                self.level_value = level;
            }
        }

        for notice in &notices {
            tracing::info!(target: "acs::selection", "{notice}");
        }
        notices
    }

    /// Check the level value against the selected architecture.
    pub fn validate_level(&self) -> Result<(), SelectionError> {
        if self.arch == Arch::None {
            return Ok(());
        }
        match self.level_filter_mode {
            LevelFilterMode::Max | LevelFilterMode::Only => {
                if self.level_value == 0 {
                    return Err(SelectionError::MissingLevel {
                        mode: self.level_filter_mode.to_string(),
                    });
                }
                if !self.arch.accepts_level(self.level_value) {
                    return Err(SelectionError::LevelOutOfRange {
                        arch: self.arch.to_string(),
                        level: self.level_value,
                    });
                }
                Ok(())
            }
            LevelFilterMode::None | LevelFilterMode::Fr => Ok(()),
        }
    }

    /// Replace the rule list. Also drops the arch selection, so only the
    /// given rules are expanded.
    pub fn override_rules(&mut self, rules: Vec<RuleId>) {
        self.rule_list = rules;
        self.arch = Arch::None;
    }

    /// Replace the module allow-list.
    pub fn override_modules(&mut self, modules: Vec<ModuleId>) {
        self.execute_modules = modules;
    }

    /// Whether a rule tagged with `view` passes the software-view filter.
    pub fn sw_view_selected(&self, view: SoftwareView) -> bool {
        self.bsa_sw_view_mask == 0 || self.bsa_sw_view_mask & view.bit() != 0
    }
}
