//! Rule verdicts and platform support.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Final verdict for one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleStatus {
    Pass,
    /// Passed, but some base rules of an alias could not be run.
    Partial,
    Warn,
    Skip,
    Fail,
    PalNotSupported,
    NotImplemented,
}

impl RuleStatus {
    /// Severity used when merging base-rule verdicts into an alias verdict.
    pub fn severity(&self) -> u8 {
        match self {
            Self::Pass => 0,
            Self::Partial => 1,
            Self::Warn => 2,
            Self::Skip => 3,
            Self::PalNotSupported => 4,
            Self::NotImplemented => 5,
            Self::Fail => 6,
        }
    }

    /// Result suffix printed after `END <RULE>`.
    pub fn report_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASSED",
            Self::Partial => "PASSED(*PARTIAL)",
            Self::Warn => "WARNING",
            Self::Skip => "SKIPPED",
            Self::Fail => "FAILED",
            Self::NotImplemented => "NOT TESTED (TEST NOT IMPLEMENTED)",
            Self::PalNotSupported => "NOT TESTED (PAL NOT SUPPORTED)",
        }
    }

    /// The more severe of two verdicts.
    pub fn max_severity(self, other: RuleStatus) -> RuleStatus {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }
}

impl fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.report_str())
    }
}

/// Platform abstraction layer the suite is running on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Baremetal,
    #[default]
    Uefi,
    Linux,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Baremetal => "baremetal",
            Self::Uefi => "uefi",
            Self::Linux => "linux",
        }
    }

    pub fn bit(self) -> Platforms {
        match self {
            Self::Baremetal => Platforms::BAREMETAL,
            Self::Uefi => Platforms::UEFI,
            Self::Linux => Platforms::LINUX,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "baremetal" | "bm" => Ok(Self::Baremetal),
            "uefi" => Ok(Self::Uefi),
            "linux" => Ok(Self::Linux),
            _ => Err(format!("Invalid platform: {s}")),
        }
    }
}

/// Set of platforms a rule's test exists for. Empty means no platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Platforms(u8);

impl Platforms {
    pub const NONE: Platforms = Platforms(0);
    pub const BAREMETAL: Platforms = Platforms(1);
    pub const UEFI: Platforms = Platforms(1 << 1);
    pub const LINUX: Platforms = Platforms(1 << 2);

    pub const fn union(self, other: Platforms) -> Platforms {
        Platforms(self.0 | other.0)
    }

    pub const fn contains(self, platform: Platform) -> bool {
        let bit = match platform {
            Platform::Baremetal => Self::BAREMETAL.0,
            Platform::Uefi => Self::UEFI.0,
            Platform::Linux => Self::LINUX.0,
        };
        self.0 & bit != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn bits(self) -> u8 {
        self.0
    }
}

/// Outcome of checking a rule against the running platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Support {
    Supported,
    /// No platform carries a test for the rule.
    NotImplemented,
    /// A test exists, but not for the current platform.
    PalNotSupported,
}

impl Support {
    /// Verdict to report when the rule cannot run.
    pub fn as_status(&self) -> Option<RuleStatus> {
        match self {
            Self::Supported => None,
            Self::NotImplemented => Some(RuleStatus::NotImplemented),
            Self::PalNotSupported => Some(RuleStatus::PalNotSupported),
        }
    }
}
