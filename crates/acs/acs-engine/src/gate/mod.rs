//! Module gate: which modules may run, EL3 overrides, and one-shot module
//! discovery.

pub mod el3;
pub mod module_gate;
pub mod module_init;

pub use el3::{
    apply_el3_params, read_el3_overrides, El3Handoff, El3Memory, El3Overrides, El3Params,
    MemoryImage,
};
pub use module_gate::ModuleGate;
pub use module_init::{AlwaysPresent, ModuleDiscovery, ModuleInitCache};
