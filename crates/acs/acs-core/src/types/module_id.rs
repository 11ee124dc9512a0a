//! Module identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Subsystem grouping of rules. `Base` holds alias rules and rules with
/// no catalog entry.
///
/// The numeric value (`as_u32`) is what EL3 module arrays and the build-time
/// module list carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ModuleId {
    Base,
    Pe,
    Gic,
    Peripheral,
    MemMap,
    Pmu,
    Ras,
    Smmu,
    Timer,
    Watchdog,
    Nist,
    Pcie,
    Mpam,
    Ete,
    Tpm,
    PowerWakeup,
}

impl ModuleId {
    /// All modules in numeric order.
    pub const ALL: [ModuleId; 16] = [
        Self::Base,
        Self::Pe,
        Self::Gic,
        Self::Peripheral,
        Self::MemMap,
        Self::Pmu,
        Self::Ras,
        Self::Smmu,
        Self::Timer,
        Self::Watchdog,
        Self::Nist,
        Self::Pcie,
        Self::Mpam,
        Self::Ete,
        Self::Tpm,
        Self::PowerWakeup,
    ];

    /// Name as accepted on the command line and printed in rule headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "BASE",
            Self::Pe => "PE",
            Self::Gic => "GIC",
            Self::Peripheral => "PERIPHERAL",
            Self::MemMap => "MEM_MAP",
            Self::Pmu => "PMU",
            Self::Ras => "RAS",
            Self::Smmu => "SMMU",
            Self::Timer => "TIMER",
            Self::Watchdog => "WATCHDOG",
            Self::Nist => "NIST",
            Self::Pcie => "PCIE",
            Self::Mpam => "MPAM",
            Self::Ete => "ETE",
            Self::Tpm => "TPM",
            Self::PowerWakeup => "POWER_WAKEUP",
        }
    }

    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn from_u32(value: u32) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }

    /// Exact-name lookup against the fixed name table.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|m| m.as_str() == name)
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("Invalid module: {s}"))
    }
}
