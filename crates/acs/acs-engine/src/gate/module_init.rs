//! One-shot module hardware discovery with a cached result.

use rustc_hash::FxHashMap;

use acs_core::types::ModuleId;

/// Module-specific hardware discovery. Implemented by the platform layer.
pub trait ModuleDiscovery: Send + Sync {
    /// Discover the module's hardware. `false` means the module cannot be tested.
    fn discover(&self, module: ModuleId, num_pe: usize) -> bool;
}

/// Discovery that finds every module present.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysPresent;

impl ModuleDiscovery for AlwaysPresent {
    fn discover(&self, _module: ModuleId, _num_pe: usize) -> bool {
        true
    }
}

/// Caches discovery results for the rest of the run. A failed module is
/// never discovered again.
pub struct ModuleInitCache {
    discovery: Box<dyn ModuleDiscovery>,
    results: FxHashMap<ModuleId, bool>,
}

impl ModuleInitCache {
    pub fn new(discovery: Box<dyn ModuleDiscovery>) -> Self {
        Self {
            discovery,
            results: FxHashMap::default(),
        }
    }

    /// Run discovery for `module` on first use; afterwards return the cached result.
    pub fn check_module_init(&mut self, module: ModuleId, num_pe: usize) -> bool {
        if let Some(&ok) = self.results.get(&module) {
            return ok;
        }
        let ok = self.discovery.discover(module, num_pe);
        if !ok {
            tracing::warn!(
                target: "acs::gate",
                module = %module,
                "module init failed; its rules will be skipped"
            );
        }
        self.results.insert(module, ok);
        ok
    }

    /// Cached result, if discovery has run.
    pub fn status(&self, module: ModuleId) -> Option<bool> {
        self.results.get(&module).copied()
    }
}

impl Default for ModuleInitCache {
    fn default() -> Self {
        Self::new(Box::new(AlwaysPresent))
    }
}

impl std::fmt::Debug for ModuleInitCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModuleInitCache")
            .field("results", &self.results)
            .finish()
    }
}
