//! Module enablement with fixed precedence.

use acs_core::constants::BUILD_MODULE_LIST;
use acs_core::parse::parse_build_module_list;
use acs_core::types::ModuleId;
use acs_core::SelectionConfig;

/// Decides whether a module's rules may run at all.
///
/// 1. A non-empty runtime list (CLI or EL3) is authoritative.
/// 2. Otherwise a build-time list, when one was compiled in, is authoritative.
/// 3. Otherwise every module is enabled.
#[derive(Debug, Clone, Default)]
pub struct ModuleGate {
    runtime: Vec<ModuleId>,
    build: Option<Vec<ModuleId>>,
}

impl ModuleGate {
    /// Gate for `selection`, using the compiled-in build list if any.
    pub fn new(selection: &SelectionConfig) -> Self {
        let build = BUILD_MODULE_LIST.map(|csv| parse_build_module_list(csv).values);
        Self::with_build_list(selection, build)
    }

    /// Gate for `selection` with an explicit build list.
    pub fn with_build_list(selection: &SelectionConfig, build: Option<Vec<ModuleId>>) -> Self {
        Self {
            runtime: selection.execute_modules.clone(),
            build,
        }
    }

    pub fn is_module_enabled(&self, module: ModuleId) -> bool {
        if !self.runtime.is_empty() {
            return self.runtime.contains(&module);
        }
        match &self.build {
            Some(build) => build.contains(&module),
            None => true,
        }
    }
}
