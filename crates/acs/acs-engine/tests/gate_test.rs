//! Tests for the module gate, the module init cache and the EL3 parameter block.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use acs_core::constants::{EL3_PARAM_MAGIC, EL3_PARAM_VERSION};
use acs_core::errors::El3Error;
use acs_core::types::{Arch, ModuleId, RuleId};
use acs_core::SelectionConfig;
use acs_engine::gate::{
    apply_el3_params, read_el3_overrides, El3Handoff, El3Memory, El3Params, MemoryImage,
    ModuleDiscovery, ModuleInitCache,
};
use acs_engine::ModuleGate;

const BASE: u64 = 0x8000_0000;
const BLOCK: u64 = BASE;
const TESTS: u64 = BASE + 0x100;
const MODULES: u64 = BASE + 0x200;

fn words(values: &[u32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

/// A block at `BLOCK` with optional rule and module arrays.
fn image(version: u64, rules: &[u32], modules: &[u32]) -> MemoryImage {
    let params = El3Params {
        version,
        test_array_addr: if rules.is_empty() { 0 } else { TESTS },
        test_array_count: rules.len() as u64,
        module_array_addr: if modules.is_empty() { 0 } else { MODULES },
        module_array_count: modules.len() as u64,
        ..Default::default()
    };
    let mut image = MemoryImage::new(BASE, Vec::new());
    image.write(BLOCK, &params.to_bytes());
    image.write(TESTS, &words(rules));
    image.write(MODULES, &words(modules));
    image
}

fn handoff() -> El3Handoff {
    El3Handoff {
        magic: EL3_PARAM_MAGIC,
        addr: BLOCK,
    }
}

fn cli_selection() -> SelectionConfig {
    SelectionConfig {
        rule_list: vec![RuleId::B_PE_01],
        execute_modules: vec![ModuleId::Pe],
        arch: Arch::Bsa,
        ..Default::default()
    }
}

/// A magic mismatch leaves the configuration untouched.
#[test]
fn test_magic_mismatch_is_noop() {
    let mem = image(EL3_PARAM_VERSION, &[RuleId::B_GIC_01.index() as u32], &[]);
    let mut selection = cli_selection();
    let before = selection.clone();

    let handoff = El3Handoff {
        magic: 0xdead_beef,
        addr: BLOCK,
    };
    let result = apply_el3_params(&mut selection, handoff, &mem);
    assert!(result.is_none());
    assert_eq!(selection, before);
}

/// Version is checked before any field is honored.
#[test]
fn test_version_mismatch_ignored() {
    let mem = image(EL3_PARAM_VERSION + 1, &[RuleId::B_GIC_01.index() as u32], &[]);
    let err = read_el3_overrides(handoff(), &mem).unwrap_err();
    assert!(matches!(err, El3Error::UnsupportedVersion { found: 2 }));

    let mut selection = cli_selection();
    assert!(apply_el3_params(&mut selection, handoff(), &mem).is_none());
    assert_eq!(selection, cli_selection());
}

#[test]
fn test_null_address_ignored() {
    let mem = image(EL3_PARAM_VERSION, &[], &[]);
    let handoff = El3Handoff {
        magic: EL3_PARAM_MAGIC,
        addr: 0,
    };
    assert!(matches!(read_el3_overrides(handoff, &mem), Err(El3Error::NullAddress)));
}

/// An unmapped block address is a read failure, not a panic.
#[test]
fn test_unbacked_block_ignored() {
    let mem = MemoryImage::new(BASE, vec![0; 16]);
    assert!(matches!(read_el3_overrides(handoff(), &mem), Err(El3Error::ReadFailed { .. })));
}

/// A valid block replaces rules and modules and clears the arch.
#[test]
fn test_valid_block_overrides() {
    let mem = image(
        EL3_PARAM_VERSION,
        &[RuleId::B_GIC_01.index() as u32, RuleId::B_GIC_02.index() as u32],
        &[ModuleId::Gic.as_u32()],
    );
    let mut selection = cli_selection();
    let overrides = apply_el3_params(&mut selection, handoff(), &mem).unwrap();

    assert!(overrides.dropped.is_empty());
    assert_eq!(selection.rule_list, vec![RuleId::B_GIC_01, RuleId::B_GIC_02]);
    assert_eq!(selection.execute_modules, vec![ModuleId::Gic]);
    assert_eq!(selection.arch, Arch::None);
}

/// Arrays with a zero count are not read and leave their field alone.
#[test]
fn test_modules_only_block() {
    let mem = image(EL3_PARAM_VERSION, &[], &[ModuleId::Timer.as_u32()]);
    let mut selection = cli_selection();
    let overrides = apply_el3_params(&mut selection, handoff(), &mem).unwrap();

    assert!(overrides.rules.is_none());
    assert_eq!(selection.rule_list, vec![RuleId::B_PE_01]);
    assert_eq!(selection.arch, Arch::Bsa);
    assert_eq!(selection.execute_modules, vec![ModuleId::Timer]);
}

/// Out-of-range array values are dropped, the rest still apply.
#[test]
fn test_out_of_range_values_dropped() {
    let mem = image(EL3_PARAM_VERSION, &[RuleId::B_PE_02.index() as u32, 0xFFFF], &[2, 99]);
    let overrides = read_el3_overrides(handoff(), &mem).unwrap();
    assert_eq!(overrides.rules, Some(vec![RuleId::B_PE_02]));
    assert_eq!(overrides.modules, Some(vec![ModuleId::Gic]));
    assert_eq!(overrides.dropped, vec![0xFFFF, 99]);
}

#[test]
fn test_params_layout() {
    let params = El3Params {
        version: 1,
        test_array_addr: 0x1122,
        test_array_count: 3,
        ..Default::default()
    };
    let bytes = params.to_bytes();
    assert_eq!(&bytes[0..8], &1u64.to_le_bytes());
    assert_eq!(&bytes[8..16], &0x1122u64.to_le_bytes());
    assert_eq!(El3Params::from_bytes(&bytes[..40]), None);

    let mem = MemoryImage::new(BASE, bytes.to_vec());
    assert_eq!(mem.read(BASE + 16, 8), Some(3u64.to_le_bytes().to_vec()));
    assert_eq!(mem.read(BASE - 8, 8), None);
}

/// Runtime list beats build list beats everything-enabled.
#[test]
fn test_module_gate_precedence() {
    let open = ModuleGate::with_build_list(&SelectionConfig::default(), None);
    assert!(open.is_module_enabled(ModuleId::Pcie));

    let built = ModuleGate::with_build_list(&SelectionConfig::default(), Some(vec![ModuleId::Pe]));
    assert!(built.is_module_enabled(ModuleId::Pe));
    assert!(!built.is_module_enabled(ModuleId::Pcie));

    let runtime = ModuleGate::with_build_list(&cli_selection(), Some(vec![ModuleId::Pcie]));
    assert!(runtime.is_module_enabled(ModuleId::Pe));
    assert!(!runtime.is_module_enabled(ModuleId::Pcie));
}

struct CountingDiscovery {
    calls: Arc<AtomicUsize>,
    failing: ModuleId,
}

impl ModuleDiscovery for CountingDiscovery {
    fn discover(&self, module: ModuleId, _num_pe: usize) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        module != self.failing
    }
}

/// Discovery runs once per module; failures are never retried.
#[test]
fn test_module_init_cached() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut cache = ModuleInitCache::new(Box::new(CountingDiscovery {
        calls: calls.clone(),
        failing: ModuleId::Gic,
    }));

    assert_eq!(cache.status(ModuleId::Gic), None);
    assert!(!cache.check_module_init(ModuleId::Gic, 4));
    assert!(!cache.check_module_init(ModuleId::Gic, 4));
    assert!(cache.check_module_init(ModuleId::Pe, 4));
    assert!(cache.check_module_init(ModuleId::Pe, 4));

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(cache.status(ModuleId::Gic), Some(false));
    assert_eq!(cache.status(ModuleId::Pe), Some(true));
}

/// An image file loaded at a base address serves the block like memory.
#[test]
fn test_image_file_block() {
    let mem = image(EL3_PARAM_VERSION, &[RuleId::B_PE_04.index() as u32], &[]);
    let mut bytes = mem.read(BASE, (TESTS - BASE) as usize + 4).unwrap();
    bytes.resize(0x300, 0);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("el3.bin");
    std::fs::write(&path, &bytes).unwrap();

    let loaded = MemoryImage::from_file(&path, BASE).unwrap();
    assert_eq!(loaded.base(), BASE);
    let overrides = read_el3_overrides(handoff(), &loaded).unwrap();
    assert_eq!(overrides.rules, Some(vec![RuleId::B_PE_04]));
    assert!(MemoryImage::from_file(&dir.path().join("missing.bin"), BASE).is_err());
}
