//! Architecture selection, compliance levels, and BSA software views.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Architecture specification whose checklist drives rule expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    #[default]
    None,
    Bsa,
    Sbsa,
    Pcbsa,
    Vbsa,
}

impl Arch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Bsa => "bsa",
            Self::Sbsa => "sbsa",
            Self::Pcbsa => "pcbsa",
            Self::Vbsa => "vbsa",
        }
    }

    /// Lowest level defined by this architecture.
    pub fn min_level(&self) -> Option<u8> {
        match self {
            Self::None => None,
            Self::Bsa => Some(BSA_LEVEL_MIN),
            Self::Sbsa => Some(SBSA_LEVEL_MIN),
            Self::Pcbsa => Some(PCBSA_LEVEL_MIN),
            Self::Vbsa => Some(VBSA_LEVEL_MIN),
        }
    }

    /// Highest numbered (non-FR) level.
    pub fn max_level(&self) -> Option<u8> {
        match self {
            Self::None => None,
            Self::Bsa => Some(BSA_LEVEL_MAX),
            Self::Sbsa => Some(SBSA_LEVEL_MAX),
            Self::Pcbsa => Some(PCBSA_LEVEL_MAX),
            Self::Vbsa => Some(VBSA_LEVEL_MAX),
        }
    }

    /// The Future Requirement sentinel level.
    pub fn fr_level(&self) -> Option<u8> {
        match self {
            Self::None => None,
            Self::Bsa => Some(BSA_LEVEL_FR),
            Self::Sbsa => Some(SBSA_LEVEL_FR),
            Self::Pcbsa => Some(PCBSA_LEVEL_FR),
            Self::Vbsa => Some(VBSA_LEVEL_FR),
        }
    }

    /// Level used in MAX mode when no level was requested.
    pub fn default_level(&self) -> Option<u8> {
        match self {
            Self::Sbsa => Some(SBSA_LEVEL_DEFAULT),
            other => other.min_level(),
        }
    }

    /// Whether `level` is a MAX/ONLY value this architecture defines.
    /// The FR sentinel counts as valid.
    pub fn accepts_level(&self, level: u8) -> bool {
        match (self.min_level(), self.max_level(), self.fr_level()) {
            (Some(min), Some(max), Some(fr)) => (min..=max).contains(&level) || level == fr,
            _ => false,
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Arch {
    type Err = String;

    /// Case-insensitive. `none` is not accepted from user input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bsa" => Ok(Self::Bsa),
            "sbsa" => Ok(Self::Sbsa),
            "pcbsa" => Ok(Self::Pcbsa),
            "vbsa" => Ok(Self::Vbsa),
            _ => Err(format!(
                "Invalid value for arch: {s}. Use 'bsa', 'sbsa', 'pcbsa' or 'vbsa'"
            )),
        }
    }
}

/// How the level value narrows the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelFilterMode {
    #[default]
    None,
    /// Keep rules with level <= value.
    Max,
    /// Keep rules with level == value.
    Only,
    /// Keep rules at the Future Requirement sentinel only.
    Fr,
}

impl LevelFilterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Max => "max",
            Self::Only => "only",
            Self::Fr => "fr",
        }
    }
}

impl fmt::Display for LevelFilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LevelFilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "max" => Ok(Self::Max),
            "only" => Ok(Self::Only),
            "fr" => Ok(Self::Fr),
            _ => Err(format!("Invalid level mode: {s}")),
        }
    }
}

/// BSA software view a rule is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoftwareView {
    Os = 0,
    Hyp = 1,
    Ps = 2,
}

impl SoftwareView {
    pub const ALL: [SoftwareView; 3] = [Self::Os, Self::Hyp, Self::Ps];

    /// Bit of this view in `bsa_sw_view_mask`.
    pub fn bit(self) -> u8 {
        1 << (self as u8)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Os => "os",
            Self::Hyp => "hyp",
            Self::Ps => "ps",
        }
    }

    /// Fold a list of views into a mask.
    pub fn mask_of(views: &[SoftwareView]) -> u8 {
        views.iter().fold(0, |mask, v| mask | v.bit())
    }
}

impl fmt::Display for SoftwareView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SoftwareView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "os" => Ok(Self::Os),
            "hyp" => Ok(Self::Hyp),
            "ps" => Ok(Self::Ps),
            _ => Err(format!("Invalid software view: {s}")),
        }
    }
}
