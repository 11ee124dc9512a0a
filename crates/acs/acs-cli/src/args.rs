//! Command-line flags.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use acs_core::config::CliOverrides;

/// ARM BSA/SBSA/PC-BSA architecture compliance rule runner
#[derive(Debug, Parser)]
#[command(name = "acs")]
#[command(about = "Select and run architecture compliance rules", long_about = None)]
#[command(version)]
#[command(group(ArgGroup::new("level_mode").args(["level", "only", "fr"]).multiple(false)))]
pub struct Args {
    /// Architecture checklist to expand: bsa, sbsa, pcbsa, vbsa
    #[arg(short = 'a', long)]
    pub arch: Option<String>,

    /// Rule ids (comma separated) or a rules file
    #[arg(short = 'r', long)]
    pub rules: Vec<String>,

    /// Rule ids to skip (comma separated)
    #[arg(long)]
    pub skip: Vec<String>,

    /// Only run rules from these modules (comma separated)
    #[arg(short = 'm', long)]
    pub modules: Vec<String>,

    /// Skip rules from these modules (comma separated)
    #[arg(long)]
    pub skip_modules: Vec<String>,

    /// Run rules up to and including this level
    #[arg(short = 'l', long)]
    pub level: Option<u8>,

    /// Run rules of exactly this level
    #[arg(long)]
    pub only: Option<u8>,

    /// Run future-requirement rules only
    #[arg(long)]
    pub fr: bool,

    /// BSA: OS view rules
    #[arg(long)]
    pub os: bool,

    /// BSA: hypervisor view rules
    #[arg(long)]
    pub hyp: bool,

    /// BSA: platform security view rules
    #[arg(long)]
    pub ps: bool,

    /// Number of PEs to run payloads on
    #[arg(long)]
    pub pe_count: Option<usize>,

    /// Fan-in poll bound, in iterations
    #[arg(long)]
    pub timeout_iterations: Option<u64>,

    /// Platform layer: baremetal, uefi, linux
    #[arg(long)]
    pub platform: Option<String>,

    /// Report format: console, json
    #[arg(long)]
    pub format: Option<String>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// EL3 hand-off magic (hex)
    #[arg(long, value_parser = parse_hex)]
    pub el3_magic: Option<u64>,

    /// EL3 parameter block address (hex)
    #[arg(long, value_parser = parse_hex)]
    pub el3_addr: Option<u64>,

    /// Memory image holding the EL3 parameter block and its arrays
    #[arg(long)]
    pub el3_image: Option<PathBuf>,

    /// Address the memory image is mapped at (hex)
    #[arg(long, value_parser = parse_hex)]
    pub el3_base: Option<u64>,

    /// Print the selected rules and exit
    #[arg(long)]
    pub dry_run: bool,

    /// Directory holding acs.toml
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

/// Parse a hex value with or without a `0x` prefix.
pub fn parse_hex(s: &str) -> Result<u64, String> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    u64::from_str_radix(digits, 16).map_err(|e| format!("invalid hex value '{s}': {e}"))
}

impl Args {
    /// Flags that feed the layered config.
    pub fn to_overrides(&self) -> CliOverrides {
        let (level_mode, level) = if let Some(level) = self.level {
            (Some("max".to_string()), Some(level))
        } else if let Some(level) = self.only {
            (Some("only".to_string()), Some(level))
        } else if self.fr {
            (Some("fr".to_string()), None)
        } else {
            (None, None)
        };

        let sw_views = [("os", self.os), ("hyp", self.hyp), ("ps", self.ps)]
            .into_iter()
            .filter(|(_, set)| *set)
            .map(|(name, _)| name.to_string())
            .collect();

        CliOverrides {
            arch: self.arch.clone(),
            rules: self.rules.clone(),
            skip_rules: self.skip.clone(),
            modules: self.modules.clone(),
            skip_modules: self.skip_modules.clone(),
            level_mode,
            level,
            sw_views,
            pe_count: self.pe_count,
            timeout_iterations: self.timeout_iterations,
            platform: self.platform.clone(),
            report_format: self.format.clone(),
            color: self.no_color.then_some(false),
        }
    }
}
