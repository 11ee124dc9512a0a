//! EL3 parameter block: the highest-priority rule/module override.
//!
//! Firmware hands over two registers: a magic value and the block address.
//! The block is seven little-endian u64 words:
//!
//! ```text
//! version | test_array_addr | test_array_count |
//! module_array_addr | module_array_count | reserved0 | reserved1
//! ```
//!
//! Both arrays hold little-endian u32 values: rule indices and module ids.

use std::path::Path;

use acs_core::constants::{EL3_PARAM_MAGIC, EL3_PARAM_SIZE, EL3_PARAM_VERSION, EL3_PARAM_WORDS};
use acs_core::errors::El3Error;
use acs_core::types::{ModuleId, RuleId};
use acs_core::SelectionConfig;

/// Read access to the memory the parameter block lives in.
pub trait El3Memory {
    /// Copy `len` bytes starting at physical address `addr`. `None` when
    /// the range is not backed.
    fn read(&self, addr: u64, len: usize) -> Option<Vec<u8>>;
}

/// A byte image mapped at a fixed base address.
#[derive(Debug, Clone, Default)]
pub struct MemoryImage {
    base: u64,
    bytes: Vec<u8>,
}

impl MemoryImage {
    pub fn new(base: u64, bytes: Vec<u8>) -> Self {
        Self { base, bytes }
    }

    /// Load an image file to be mapped at `base`.
    pub fn from_file(path: &Path, base: u64) -> std::io::Result<Self> {
        Ok(Self::new(base, std::fs::read(path)?))
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    /// Copy `data` into the image at `addr`, growing it as needed.
    pub fn write(&mut self, addr: u64, data: &[u8]) {
        let Some(offset) = addr.checked_sub(self.base) else {
            return;
        };
        let start = offset as usize;
        let end = start + data.len();
        if self.bytes.len() < end {
            self.bytes.resize(end, 0);
        }
        self.bytes[start..end].copy_from_slice(data);
    }
}

impl El3Memory for MemoryImage {
    fn read(&self, addr: u64, len: usize) -> Option<Vec<u8>> {
        let start = usize::try_from(addr.checked_sub(self.base)?).ok()?;
        let end = start.checked_add(len)?;
        self.bytes.get(start..end).map(<[u8]>::to_vec)
    }
}

/// Register hand-off from EL3 firmware.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct El3Handoff {
    pub magic: u64,
    pub addr: u64,
}

/// Decoded parameter block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct El3Params {
    pub version: u64,
    pub test_array_addr: u64,
    pub test_array_count: u64,
    pub module_array_addr: u64,
    pub module_array_count: u64,
    pub reserved0: u64,
    pub reserved1: u64,
}

impl El3Params {
    /// Decode a block. `None` if `bytes` is shorter than the block.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < EL3_PARAM_SIZE {
            return None;
        }
        let mut words = [0u64; EL3_PARAM_WORDS];
        for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(chunk);
            *word = u64::from_le_bytes(raw);
        }
        let [
            version,
            test_array_addr,
            test_array_count,
            module_array_addr,
            module_array_count,
            reserved0,
            reserved1,
        ] = words;
        Some(Self {
            version,
            test_array_addr,
            test_array_count,
            module_array_addr,
            module_array_count,
            reserved0,
            reserved1,
        })
    }

    pub fn to_bytes(&self) -> [u8; EL3_PARAM_SIZE] {
        let words = [
            self.version,
            self.test_array_addr,
            self.test_array_count,
            self.module_array_addr,
            self.module_array_count,
            self.reserved0,
            self.reserved1,
        ];
        let mut out = [0u8; EL3_PARAM_SIZE];
        for (chunk, word) in out.chunks_exact_mut(8).zip(words) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        out
    }
}

/// What a valid block asks to replace. `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct El3Overrides {
    pub rules: Option<Vec<RuleId>>,
    pub modules: Option<Vec<ModuleId>>,
    /// Array values that named no rule or module.
    pub dropped: Vec<u32>,
}

impl El3Overrides {
    pub fn is_empty(&self) -> bool {
        self.rules.is_none() && self.modules.is_none()
    }
}

fn read_u32_array(mem: &dyn El3Memory, addr: u64, count: u64) -> Result<Vec<u32>, El3Error> {
    let len = usize::try_from(count)
        .ok()
        .and_then(|c| c.checked_mul(4))
        .ok_or(El3Error::ReadFailed { addr, len: usize::MAX })?;
    let bytes = mem.read(addr, len).ok_or(El3Error::ReadFailed { addr, len })?;
    Ok(bytes
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

/// Validate the hand-off and decode the requested overrides.
///
/// Checks run in order: magic, address, version. A field is only read when
/// both its address and its count are non-zero.
pub fn read_el3_overrides(
    handoff: El3Handoff,
    mem: &dyn El3Memory,
) -> Result<El3Overrides, El3Error> {
    if handoff.magic != EL3_PARAM_MAGIC {
        return Err(El3Error::MagicMismatch { found: handoff.magic });
    }
    if handoff.addr == 0 {
        return Err(El3Error::NullAddress);
    }
    let raw = mem
        .read(handoff.addr, EL3_PARAM_SIZE)
        .ok_or(El3Error::ReadFailed {
            addr: handoff.addr,
            len: EL3_PARAM_SIZE,
        })?;
    let params = El3Params::from_bytes(&raw).ok_or(El3Error::ReadFailed {
        addr: handoff.addr,
        len: EL3_PARAM_SIZE,
    })?;
    if params.version != EL3_PARAM_VERSION {
        return Err(El3Error::UnsupportedVersion { found: params.version });
    }

    let mut overrides = El3Overrides::default();

    if params.test_array_addr != 0 && params.test_array_count != 0 {
        let raw = read_u32_array(mem, params.test_array_addr, params.test_array_count)?;
        let mut rules = Vec::with_capacity(raw.len());
        for value in raw {
            match RuleId::from_index(value as usize) {
                Some(rule) => rules.push(rule),
                None => overrides.dropped.push(value),
            }
        }
        overrides.rules = Some(rules);
    }

    if params.module_array_addr != 0 && params.module_array_count != 0 {
        let raw = read_u32_array(mem, params.module_array_addr, params.module_array_count)?;
        let mut modules = Vec::with_capacity(raw.len());
        for value in raw {
            match ModuleId::from_u32(value) {
                Some(module) => modules.push(module),
                None => overrides.dropped.push(value),
            }
        }
        overrides.modules = Some(modules);
    }

    Ok(overrides)
}

/// Apply the EL3 block to `selection`, if there is a valid one.
///
/// A magic mismatch is the normal "no firmware override" case and is silent.
/// Every other problem is logged and leaves `selection` untouched.
pub fn apply_el3_params(
    selection: &mut SelectionConfig,
    handoff: El3Handoff,
    mem: &dyn El3Memory,
) -> Option<El3Overrides> {
    let overrides = match read_el3_overrides(handoff, mem) {
        Ok(overrides) => overrides,
        Err(El3Error::MagicMismatch { .. }) => return None,
        Err(e) => {
            tracing::warn!(target: "acs::el3", "{e}");
            return None;
        }
    };

    for value in &overrides.dropped {
        tracing::warn!(
            target: "acs::el3",
            value,
            "EL3 array value out of range, dropped"
        );
    }
    if let Some(rules) = &overrides.rules {
        tracing::info!(
            target: "acs::el3",
            count = rules.len(),
            "rule list overridden by EL3 params"
        );
        selection.override_rules(rules.clone());
    }
    if let Some(modules) = &overrides.modules {
        tracing::info!(
            target: "acs::el3",
            count = modules.len(),
            "module list overridden by EL3 params"
        );
        selection.override_modules(modules.clone());
    }
    Some(overrides)
}
