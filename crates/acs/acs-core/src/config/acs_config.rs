//! Top-level ACS configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{PeConfig, ReportFormat, RulesConfig, RunConfig};
use crate::constants::{MAX_PE_COUNT, PROJECT_CONFIG_FILE, USER_CONFIG_DIR};
use crate::errors::ConfigError;
use crate::types::{Arch, LevelFilterMode, Platform, SoftwareView};

/// Top-level configuration aggregating all sections.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ACS_*`)
/// 3. Project config (`acs.toml` in the run root)
/// 4. User config (`~/.acs/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AcsConfig {
    pub selection: RulesConfig,
    pub pe: PeConfig,
    pub run: RunConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub arch: Option<String>,
    pub rules: Vec<String>,
    pub skip_rules: Vec<String>,
    pub modules: Vec<String>,
    pub skip_modules: Vec<String>,
    pub level_mode: Option<String>,
    pub level: Option<u8>,
    pub sw_views: Vec<String>,
    pub pe_count: Option<usize>,
    pub timeout_iterations: Option<u64>,
    pub platform: Option<String>,
    pub report_format: Option<String>,
    pub color: Option<bool>,
}

impl AcsConfig {
    /// Load configuration with layered resolution; see the type docs for
    /// the order.
    pub fn load(
        root: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(target: "acs::config", "ignoring user config: {e}");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &AcsConfig) -> Result<(), ConfigError> {
        if let Some(ref arch) = config.selection.arch {
            arch.parse::<Arch>()
                .map_err(|message| ConfigError::ValidationFailed {
                    field: "selection.arch".to_string(),
                    message,
                })?;
        }
        if let Some(ref mode) = config.selection.level_mode {
            let mode = mode
                .parse::<LevelFilterMode>()
                .map_err(|message| ConfigError::ValidationFailed {
                    field: "selection.level_mode".to_string(),
                    message,
                })?;
            let needs_level = matches!(mode, LevelFilterMode::Max | LevelFilterMode::Only);
            if needs_level && config.selection.level.is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: "selection.level".to_string(),
                    message: format!("required when level_mode is {mode}"),
                });
            }
        }
        for view in &config.selection.sw_views {
            view.parse::<SoftwareView>()
                .map_err(|message| ConfigError::ValidationFailed {
                    field: "selection.sw_views".to_string(),
                    message,
                })?;
        }
        if let Some(count) = config.pe.count {
            if count == 0 || count > MAX_PE_COUNT {
                return Err(ConfigError::ValidationFailed {
                    field: "pe.count".to_string(),
                    message: format!("must be between 1 and {MAX_PE_COUNT}"),
                });
            }
        }
        if let Some(iterations) = config.pe.timeout_iterations {
            if iterations == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "pe.timeout_iterations".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(ref platform) = config.run.platform {
            platform
                .parse::<Platform>()
                .map_err(|message| ConfigError::ValidationFailed {
                    field: "run.platform".to_string(),
                    message,
                })?;
        }
        if let Some(ref format) = config.run.report_format {
            format
                .parse::<ReportFormat>()
                .map_err(|message| ConfigError::ValidationFailed {
                    field: "run.report_format".to_string(),
                    message,
                })?;
        }
        Ok(())
    }

    /// Returns the user config path: `~/.acs/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(USER_CONFIG_DIR).join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut AcsConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: AcsConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`. A value in `other` wins when it is `Some`
    /// or a non-empty list.
    pub fn merge(base: &mut AcsConfig, other: &AcsConfig) {
        // Selection
        if other.selection.arch.is_some() {
            base.selection.arch = other.selection.arch.clone();
        }
        if !other.selection.rules.is_empty() {
            base.selection.rules = other.selection.rules.clone();
        }
        if !other.selection.skip_rules.is_empty() {
            base.selection.skip_rules = other.selection.skip_rules.clone();
        }
        if !other.selection.modules.is_empty() {
            base.selection.modules = other.selection.modules.clone();
        }
        if !other.selection.skip_modules.is_empty() {
            base.selection.skip_modules = other.selection.skip_modules.clone();
        }
        if other.selection.level_mode.is_some() {
            base.selection.level_mode = other.selection.level_mode.clone();
        }
        if other.selection.level.is_some() {
            base.selection.level = other.selection.level;
        }
        if !other.selection.sw_views.is_empty() {
            base.selection.sw_views = other.selection.sw_views.clone();
        }

        // PE
        if other.pe.count.is_some() {
            base.pe.count = other.pe.count;
        }
        if other.pe.timeout_iterations.is_some() {
            base.pe.timeout_iterations = other.pe.timeout_iterations;
        }

        // Run
        if other.run.platform.is_some() {
            base.run.platform = other.run.platform.clone();
        }
        if other.run.report_format.is_some() {
            base.run.report_format = other.run.report_format.clone();
        }
        if other.run.color.is_some() {
            base.run.color = other.run.color;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `ACS_ARCH`, `ACS_RULES`, `ACS_PE_COUNT`, etc.
    fn apply_env_overrides(config: &mut AcsConfig) {
        if let Ok(val) = std::env::var("ACS_ARCH") {
            config.selection.arch = Some(val);
        }
        if let Ok(val) = std::env::var("ACS_RULES") {
            config.selection.rules = vec![val];
        }
        if let Ok(val) = std::env::var("ACS_SKIP_RULES") {
            config.selection.skip_rules = vec![val];
        }
        if let Ok(val) = std::env::var("ACS_MODULES") {
            config.selection.modules = vec![val];
        }
        if let Ok(val) = std::env::var("ACS_SKIP_MODULES") {
            config.selection.skip_modules = vec![val];
        }
        if let Ok(val) = std::env::var("ACS_LEVEL_MODE") {
            config.selection.level_mode = Some(val);
        }
        if let Ok(val) = std::env::var("ACS_LEVEL") {
            if let Ok(v) = val.parse::<u8>() {
                config.selection.level = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ACS_PE_COUNT") {
            if let Ok(v) = val.parse::<usize>() {
                config.pe.count = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ACS_PE_TIMEOUT_ITERATIONS") {
            if let Ok(v) = val.parse::<u64>() {
                config.pe.timeout_iterations = Some(v);
            }
        }
        if let Ok(val) = std::env::var("ACS_PLATFORM") {
            config.run.platform = Some(val);
        }
        if let Ok(val) = std::env::var("ACS_REPORT_FORMAT") {
            config.run.report_format = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut AcsConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.arch {
            config.selection.arch = Some(v.clone());
        }
        if !cli.rules.is_empty() {
            config.selection.rules = cli.rules.clone();
        }
        if !cli.skip_rules.is_empty() {
            config.selection.skip_rules = cli.skip_rules.clone();
        }
        if !cli.modules.is_empty() {
            config.selection.modules = cli.modules.clone();
        }
        if !cli.skip_modules.is_empty() {
            config.selection.skip_modules = cli.skip_modules.clone();
        }
        if let Some(ref v) = cli.level_mode {
            config.selection.level_mode = Some(v.clone());
            config.selection.level = cli.level;
        }
        if !cli.sw_views.is_empty() {
            config.selection.sw_views = cli.sw_views.clone();
        }
        if let Some(v) = cli.pe_count {
            config.pe.count = Some(v);
        }
        if let Some(v) = cli.timeout_iterations {
            config.pe.timeout_iterations = Some(v);
        }
        if let Some(ref v) = cli.platform {
            config.run.platform = Some(v.clone());
        }
        if let Some(ref v) = cli.report_format {
            config.run.report_format = Some(v.clone());
        }
        if let Some(v) = cli.color {
            config.run.color = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
