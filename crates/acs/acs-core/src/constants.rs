//! Shared constants for the ACS rule engine.

/// ACS engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- EL3 parameter block ----

/// Magic value firmware places alongside the parameter block address ("BSAEL3P1").
pub const EL3_PARAM_MAGIC: u64 = 0x4253_4145_4C33_5031;

/// The only parameter block layout version understood.
pub const EL3_PARAM_VERSION: u64 = 1;

/// Number of `u64` words in the parameter block.
pub const EL3_PARAM_WORDS: usize = 7;

/// Size of the parameter block in bytes.
pub const EL3_PARAM_SIZE: usize = EL3_PARAM_WORDS * 8;

// ---- PE rendezvous ----

/// Default fan-in poll bound, in iterations.
pub const DEFAULT_PE_TIMEOUT_ITERATIONS: u64 = 0x100_0000;

/// Default number of PEs when none is configured.
pub const DEFAULT_PE_COUNT: usize = 1;

/// Upper bound on configured PEs; the status word carries no PE index
/// but the host cluster spawns one thread per secondary.
pub const MAX_PE_COUNT: usize = 1024;

/// Checkpoint written by fan-in when a PE never left PENDING.
pub const TIMEOUT_CHECKPOINT: u16 = 0xFFF;

/// Highest checkpoint a payload may report.
pub const MAX_PAYLOAD_CHECKPOINT: u16 = TIMEOUT_CHECKPOINT - 1;

// ---- Compliance levels ----

/// BSA level 1 and the BSA Future Requirement sentinel.
pub const BSA_LEVEL_MIN: u8 = 1;
pub const BSA_LEVEL_MAX: u8 = 1;
pub const BSA_LEVEL_FR: u8 = 2;

/// SBSA levels 3 through 7 and the SBSA Future Requirement sentinel.
pub const SBSA_LEVEL_MIN: u8 = 3;
pub const SBSA_LEVEL_MAX: u8 = 7;
pub const SBSA_LEVEL_FR: u8 = 8;

/// Level applied by default in MAX mode for SBSA.
pub const SBSA_LEVEL_DEFAULT: u8 = 4;

/// PC-BSA level 1 and the PC-BSA Future Requirement sentinel.
pub const PCBSA_LEVEL_MIN: u8 = 1;
pub const PCBSA_LEVEL_MAX: u8 = 1;
pub const PCBSA_LEVEL_FR: u8 = 2;

/// VBSA level 1 and the VBSA Future Requirement sentinel.
pub const VBSA_LEVEL_MIN: u8 = 1;
pub const VBSA_LEVEL_MAX: u8 = 1;
pub const VBSA_LEVEL_FR: u8 = 2;

// ---- Config files ----

/// Project config file name, looked up in the run root.
pub const PROJECT_CONFIG_FILE: &str = "acs.toml";

/// User config directory under `$HOME`.
pub const USER_CONFIG_DIR: &str = ".acs";

/// Build-time module allow-list, a csv of module names or numeric ids.
pub const BUILD_MODULE_LIST: Option<&str> = option_env!("ACS_ENABLED_MODULE_LIST");
