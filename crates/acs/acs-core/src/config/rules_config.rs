//! Rule selection configuration, as written in TOML or on the command line.

use serde::{Deserialize, Serialize};

use crate::types::LevelFilterMode;

/// Raw rule selection inputs. Names are resolved into typed ids by
/// `SelectionConfig::resolve`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RulesConfig {
    /// Architecture: "bsa" | "sbsa" | "pcbsa" | "vbsa".
    pub arch: Option<String>,
    /// Rule lists. Each entry is an inline comma list or a rules file path.
    pub rules: Vec<String>,
    /// Rule ids never to run.
    pub skip_rules: Vec<String>,
    /// Module allow-list.
    pub modules: Vec<String>,
    /// Module deny-list.
    pub skip_modules: Vec<String>,
    /// Level mode: "max" | "only" | "fr".
    pub level_mode: Option<String>,
    /// Level value for "max" and "only".
    pub level: Option<u8>,
    /// BSA software views: "os" | "hyp" | "ps".
    pub sw_views: Vec<String>,
}

impl RulesConfig {
    /// Returns the effective level mode. Absent means no filtering until
    /// arch defaults are applied.
    pub fn effective_level_mode(&self) -> LevelFilterMode {
        self.level_mode
            .as_deref()
            .and_then(|m| m.parse().ok())
            .unwrap_or_default()
    }
}
