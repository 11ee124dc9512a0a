//! Run/report configuration.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Platform;

/// Configuration for the run as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RunConfig {
    /// Platform layer: "baremetal" | "uefi" | "linux". Default: "uefi".
    pub platform: Option<String>,
    /// Report format: "console" | "json". Default: "console".
    pub report_format: Option<String>,
    /// Colorize console output. Default: true.
    pub color: Option<bool>,
}

/// Output format of the final report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Console,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid report format: {s}")),
        }
    }
}

impl RunConfig {
    /// Returns the effective platform, defaulting to UEFI. Unparseable
    /// values are rejected by `AcsConfig::validate`.
    pub fn effective_platform(&self) -> Platform {
        self.platform
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or_default()
    }

    /// Returns the effective report format, defaulting to console.
    pub fn effective_report_format(&self) -> ReportFormat {
        self.report_format
            .as_deref()
            .and_then(|f| f.parse().ok())
            .unwrap_or_default()
    }

    /// Returns whether console output is colorized, defaulting to true.
    pub fn effective_color(&self) -> bool {
        self.color.unwrap_or(true)
    }
}
