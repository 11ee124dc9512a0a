//! Module/test entry table: owning module, test entry, description,
//! platform support, and base/alias flag for every catalogued rule.
//!
//! Rules with no row here are invalid entries and report as not implemented.

use acs_core::types::ModuleId::*;
use acs_core::types::RuleId::*;
use acs_core::types::{ModuleId, Platforms, RuleId};

use super::{ModuleTestEntry, RuleFlag, TestEntryId};

const NONE: Platforms = Platforms::NONE;
const BM: Platforms = Platforms::BAREMETAL;
const UEFI: Platforms = Platforms::UEFI;
const LINUX: Platforms = Platforms::LINUX;
const BM_UEFI: Platforms = BM.union(UEFI);
const BM_LINUX: Platforms = BM.union(LINUX);
const ALL: Platforms = BM_UEFI.union(LINUX);

const fn base(
    rule: RuleId,
    module: ModuleId,
    entry: &'static str,
    description: &'static str,
    platforms: Platforms,
) -> ModuleTestEntry {
    ModuleTestEntry {
        rule,
        module,
        test_entry: Some(TestEntryId::new(entry)),
        description,
        platforms,
        flag: RuleFlag::Base,
    }
}

const fn alias(
    rule: RuleId,
    module: ModuleId,
    description: &'static str,
    platforms: Platforms,
) -> ModuleTestEntry {
    ModuleTestEntry {
        rule,
        module,
        test_entry: None,
        description,
        platforms,
        flag: RuleFlag::Alias,
    }
}

pub(crate) static STANDARD_ENTRIES: &[ModuleTestEntry] = &[
    alias(S_L3_01, Base, "BSA Level 1 requirements", ALL),
    alias(P_L1_01, Base, "BSA Level 1 requirements", ALL),
    base(B_PE_01, Pe, "PE001", "Check Arch symmetry across PE", BM_UEFI),
    base(B_PE_02, Pe, "PE002", "Check for number of PE", BM_UEFI),
    base(B_PE_03, Pe, "PE003", "Check for AdvSIMD and FP support", BM_UEFI),
    base(B_PE_04, Pe, "PE004", "Check PE 4KB Granule Support", BM_UEFI),
    base(B_PE_06, Pe, "PE006", "Check Cryptographic extensions", BM_UEFI),
    base(B_PE_07, Pe, "PE007", "Check Little Endian support", BM_UEFI),
    base(B_PE_08, Pe, "PE008", "Check EL1 and EL0 implementation", BM_UEFI),
    base(B_PE_09, Pe, "PE009", "Check for PMU and PMU counters", BM_UEFI),
    base(B_PE_10, Pe, "PE010", "Check PMU Overflow signal", BM_UEFI),
    base(B_PE_11, Pe, "PE011", "Check num of Breakpoints and type", BM_UEFI),
    base(B_PE_12, Pe, "PE012", "Check Synchronous Watchpoints", BM_UEFI),
    base(B_PE_13, Pe, "PE013", "Check CRC32 instruction support", BM_UEFI),
    base(B_PE_14, Pe, "PE016", "Check SVE2 for v9 PE", BM_UEFI),
    base(B_PE_17, Pe, "PE037", "Check SPE if implemented", BM_UEFI),
    base(B_PE_18, Pe, "PE017", "Check EL2 implementation", BM_UEFI),
    base(B_PE_19, Pe, "PE018", "Check Stage 2 4KB Granule Support", BM_UEFI),
    base(B_PE_20, Pe, "PE019", "Check Stage2 and Stage1 Granule match", BM_UEFI),
    base(B_PE_21, Pe, "PE020", "Check for PMU counters", BM_UEFI),
    base(B_PE_22, Pe, "PE021", "Check VMID breakpoint number", BM_UEFI),
    base(B_PE_23, Pe, "PE022", "Check for EL3 AArch64 support", BM_UEFI),
    base(B_PE_24, Pe, "PE063", "Check for Secure state implementation", BM_UEFI),
    base(B_PE_25, Pe, "PE015", "Check for FEAT_LSE support", BM_UEFI),
    base(B_SEC_01, Pe, "PE043", "Check Speculation Restriction", BM_UEFI),
    base(B_SEC_02, Pe, "PE044", "Check Speculative Str Bypass Safe", BM_UEFI),
    base(B_SEC_03, Pe, "PE045", "Check PEs Impl CSDB,SSBB,PSSBB", BM_UEFI),
    base(B_SEC_04, Pe, "PE046", "Check PEs Implement SB Barrier", BM_UEFI),
    base(B_SEC_05, Pe, "PE047", "Check PE Impl CFP,DVP,CPP RCTX", BM_UEFI),
    base(S_L3PE_01, Pe, "PE023", "Check PE Granule Support", BM_UEFI),
    base(S_L3PE_02, Pe, "PE024", "Check for 16-bit ASID support", BM_UEFI),
    base(S_L3PE_03, Pe, "PE025", "Check AARCH64 implementation", BM_UEFI),
    base(S_L3PE_04, Pe, "PE026", "Check FEAT_LPA Requirements", BM_UEFI),
    base(S_L4PE_01, Pe, "PE027", "Check for RAS extension", BM_UEFI),
    base(S_L4PE_02, Pe, "PE028", "Check DC CVAP support", BM_UEFI),
    base(S_L4PE_03, Pe, "PE029", "Check for 16-Bit VMID", BM_UEFI),
    base(S_L4PE_04, Pe, "PE030", "Check for Virtual host extensions", BM_UEFI),
    base(S_L5PE_01, Pe, "PE031", "Support Page table map size change", BM_UEFI),
    base(S_L5PE_02, Pe, "PE032", "Check for addr and generic auth", BM_UEFI),
    base(S_L5PE_04, Pe, "PE033", "Check Activity monitors extension", BM_UEFI),
    base(S_L5PE_05, Pe, "PE034", "Check for SHA3 and SHA512 support", BM_UEFI),
    base(S_L5PE_06, Pe, "PE035", "Stage 2 control of mem and cache", BM_UEFI),
    base(S_L5PE_07, Pe, "PE036", "Check for nested virtualization", BM_UEFI),
    alias(S_L6PE_01, Pe, "Check PE security features", BM_UEFI),
    base(S_L6PE_02, Pe, "PE038", "Check Branch Target Support", BM_UEFI),
    base(S_L6PE_03, Pe, "PE039", "Check Protect Against Timing Fault", BM_UEFI),
    base(S_L6PE_04, Pe, "PE040", "Check PMU Version v3.5 or higher", BM_UEFI),
    base(S_L6PE_05, Pe, "PE041", "Check AccessFlag DirtyState Update", BM_UEFI),
    base(S_L6PE_06, Pe, "PE042", "Check Enhanced Virtualization Trap", BM_UEFI),
    base(S_L7PE_01, Pe, "PE048", "Check Fine Grain Trap Support", BM_UEFI),
    base(S_L7PE_02, Pe, "PE049", "Check for ECV support", BM_UEFI),
    base(S_L7PE_04, Pe, "PE051", "Checks ASIMD Int8 matrix multiplc", BM_UEFI),
    base(S_L7PE_05, Pe, "PE052", "Check for BFLOAT16 extension", BM_UEFI),
    base(S_L7PE_06, Pe, "PE053", "Check PAuth2, FPAC & FPACCOMBINE", BM_UEFI),
    base(S_L7PE_07, Pe, "PE054", "Check for SVE Int8 matrix multiple", BM_UEFI),
    base(S_L8PE_01, Pe, "PE058", "Check XS attribute functionality", BM_UEFI),
    base(S_L8PE_02, Pe, "PE059", "Check WFET and WFIT functionality", BM_UEFI),
    base(S_L8PE_03, Pe, "PE060", "Check atomic 64 byte store support", BM_UEFI),
    base(S_L8PE_04, Pe, "PE057", "Check for enhanced PAN feature", BM_UEFI),
    base(S_L8PE_05, Pe, "PE064", "Check PMU Version v3.7 or higher", BM_UEFI),
    base(S_L8PE_06, Pe, "PE061", "Check for FEAT_BRBE support", BM_UEFI),
    base(S_L8PE_07, Pe, "PE062", "Check for unsupported PBHA bits", BM_UEFI),
    base(P_L1PE_01, Pe, "P_L1PE_01", "Check PE 4KB Granule Support", BM_UEFI),
    base(P_L1PE_02, Pe, "PE024", "Check for 16-bit ASID support", BM_UEFI),
    base(P_L1PE_03, Pe, "PE025", "Check AARCH64 implementation", BM_UEFI),
    base(P_L1PE_04, Pe, "PE015", "Check for FEAT_LSE support", BM_UEFI),
    base(P_L1PE_05, Pe, "PE026", "Check FEAT_LPA Requirements", BM_UEFI),
    base(P_L1PE_06, Pe, "PE028", "Check DC CVAP support", BM_UEFI),
    base(P_L1PE_07, Pe, "PE029", "Check for 16-Bit VMID", BM_UEFI),
    base(P_L1PE_08, Pe, "PE030", "Check for Virtual host extensions", BM_UEFI),
    base(B_GIC_01, Gic, "G001", "Check GIC version", BM_UEFI),
    base(B_GIC_02, Gic, "G002", "Check GICv2 Valid Configuration", BM_UEFI),
    base(B_GIC_03, Gic, "G003", "If PCIe, GICv3 then ITS, LPI", BM_UEFI),
    base(B_GIC_04, Gic, "G004", "Check GICv3 Security States", BM_UEFI),
    base(B_GIC_05, Gic, "G005", "Non-secure SGIs are implemented", BM_UEFI),
    base(ITS_01, Gic, "ITS001", "Check number of ITS blocks in a group", BM_UEFI),
    base(ITS_02, Gic, "ITS002", "Check ITS block association with group", BM_UEFI),
    base(ITS_DEV_2, Gic, "ITS003", "Check uniqueness of StreamID", BM_UEFI),
    base(ITS_DEV_7, Gic, "ITS004", "Check Device's SID/RID/DID behind SMMU", BM_UEFI),
    base(ITS_DEV_8, Gic, "ITS005", "Check Device IDs not behind SMMU", BM_UEFI),
    base(S_L3GI_01, Gic, "G012", "Check GIC version", BM_UEFI),
    base(B_PPI_00, Gic, "B_PPI_00", "PPI Assignments check", BM_UEFI),
    base(S_L3PP_01, Gic, "G014", "Check All PPI Interrupt IDs", BM_UEFI),
    base(S_L5GI_01, Gic, "G016", "Check Non GIC Interrupts", BM_UEFI),
    base(S_L5PP_01, Gic, "G013", "Check Reserved PPI Assignments", BM_UEFI),
    base(S_L8GI_01, Gic, "G015", "Check GICv4.1 or higher compliant", BM_UEFI),
    base(Appendix_I_5, Gic, "V2M004", "Check GICv2m SPI allocated to MSI Ctrl", BM_UEFI),
    base(Appendix_I_6, Gic, "APPENDIX_I_6", "", BM_UEFI),
    base(Appendix_I_9, Gic, "V2M002", "Check GICv2m MSI Frame Register", BM_UEFI),
    base(P_L1GI_01, Gic, "G012", "Check GIC version", BM_UEFI),
    base(P_L1GI_02, Pcie, "P046", "Check all MSI(X) vectors are LPIs", ALL),
    base(P_L1GI_03, Gic, "INTERFACE010", "Check GIC supports disabling LPIs", BM_UEFI),
    base(P_L1GI_04, Gic, "INTERFACE011", "Check GICR_PENDBASER when LPIs enabled", BM_UEFI),
    base(P_L1PP_01, Gic, "G014", "Check All PPI Interrupt IDs", BM_UEFI),
    alias(V_L1GI_01, Gic, "Check vGIC architectural compliance", UEFI),
    base(V_L1PP_00, Gic, "V_L1PP_00", "Check VE PPI assignment mapping", UEFI),
    base(B_PER_01, Peripheral, "D001", "USB CTRL Interface EHCI check", BM_UEFI),
    base(B_PER_02, Peripheral, "D008", "USB CTRL Interface XHCI check", BM_UEFI),
    base(B_PER_03, Peripheral, "D002", "Check SATA CTRL Interface", BM_UEFI),
    base(B_PER_05, Peripheral, "D003", "Check UART type Arm Generic or 16550", BM_UEFI),
    alias(S_L3PR_01, Peripheral, "Check UART Arm Generic or 16550 presence", BM_UEFI),
    base(B_PER_06, Peripheral, "D006", "Check ARM Generic UART Interrupt", BM_UEFI),
    alias(B_PER_08, Pcie, "Check PCI Express root complex", ALL),
    base(B_PER_09, Peripheral, "D004", "Check Memory Attributes of DMA", BM_LINUX),
    base(B_PER_10, Peripheral, "D007", "Check DMA for I/O coherency", BM_LINUX),
    alias(V_L1PR_01, Peripheral, "Check Peripheral arch compliance", UEFI),
    alias(V_L1PR_02, Peripheral, "Check Virt PCIe arch compliance", UEFI),
    base(B_MEM_01, MemMap, "M002", "Mem Access Response in finite time", BM_UEFI),
    base(B_MEM_02, MemMap, "M001", "Memory Access to Un-Populated addr", BM),
    base(B_MEM_03, MemMap, "M004", "Check Addressability", BM_LINUX),
    base(B_MEM_04, MemMap, "M006", "Check dev DMA behind SMMU", BM_LINUX),
    base(B_MEM_05, MemMap, "M003", "PE must access all NS addr space", BM_UEFI),
    base(B_MEM_06, MemMap, "M007", "Check non-DMA dev behind SMMU", BM_LINUX),
    base(S_L3MM_01, MemMap, "M005", "NS-EL2 Stage-2 64KB Mapping Check", BM_UEFI),
    base(S_L3MM_02, MemMap, "M008", "Check peripherals addr 64Kb apart", BM_UEFI),
    alias(P_L1MM_01, MemMap, "NS-EL2 Stage-2 64KB Mapping Check", BM_UEFI),
    alias(V_L1MM_01, MemMap, "Check VE Mem architectural compliance", UEFI),
    base(V_L1MM_02, MemMap, "M004", "DMA requestors access to NS addr space", LINUX),
    base(PMU_PE_02, Pmu, "PMU001", "Check PMU Overflow signal", BM_UEFI),
    base(PMU_PE_03, Pmu, "PMU002", "Check number of PMU counters", BM_UEFI),
    base(PMU_SYS_1, Pmu, "PMU004", "Test Simultaneous 4 traffic measures", BM_UEFI),
    base(PMU_SYS_2, Pmu, "PMU005", "Test Simultaneous 6 traffic measures", BM_UEFI),
    base(PMU_SYS_6, Pmu, "PMU009", "Check multiple type traffic measurement", BM_UEFI),
    base(PMU_BM_1, Pmu, "PMU007", "Check for memory bandwidth monitors", BM_UEFI),
    base(PMU_MEM_1, Pmu, "PMU010", "Check for memory latency monitors", BM_UEFI),
    base(PMU_BM_2, Pmu, "PMU011", "Check for PCIe bandwidth monitors", BM_UEFI),
    base(PMU_EV_11, Pmu, "PMU003", "Check for multi-threaded PMU ext", BM_UEFI),
    base(PMU_SPE, Pmu, "PMU006", "Check for PMU SPE Requirements", BM_UEFI),
    base(RAS_01, Ras, "RAS001", "Check Error Counter", BM_UEFI),
    base(RAS_02, Ras, "RAS002", "Check CFI, DUI, UI Controls", BM_UEFI),
    base(RAS_03, Ras, "RAS003", "Check FHI in Error Record Group", BM_UEFI),
    base(RAS_04, Ras, "RAS004", "Check ERI in Error Record Group", BM_UEFI),
    base(RAS_06, Ras, "RAS005", "Check ERI/FHI Connected to GIC", BM_UEFI),
    base(RAS_07, Ras, "RAS006", "RAS ERR<n>ADDR.AI bit status check", BM_UEFI),
    base(RAS_08, Ras, "RAS007", "Check Error Group Status", BM_UEFI),
    base(RAS_11, Ras, "RAS008", "Software Fault Error Check", BM_UEFI),
    base(S_L7RAS_1, Ras, "RAS009", "Data abort on Containable err", BM_UEFI),
    base(S_RAS_01, Ras, "RAS014", "Check RAS SR Interface ERI/FHI are PPI", BM_UEFI),
    alias(SYS_RAS, Ras, "Check Server RAS requirements", BM_UEFI),
    base(SYS_RAS_1, Ras, "RAS010", "Check for patrol scrubbing support", BM_UEFI),
    base(SYS_RAS_2, Ras, "SYS_RAS_2", "Check Pseudo Fault Injection", BM_UEFI),
    base(SYS_RAS_3, Ras, "RAS015", "Check Error when Poison unsupported", BM_UEFI),
    base(SYS_RAS_4, Ras, "RAS013", "Check RAS memory mapped view supp", BM_UEFI),
    base(B_SMMU_01, Smmu, "I001", "All SMMUs have same Arch Revision", BM_UEFI),
    base(B_SMMU_02, Smmu, "I002", "Check SMMU Granule Support", BM_UEFI),
    base(B_SMMU_03, Smmu, "I016", "Check SMMU Large VA Support", BM_UEFI),
    base(B_SMMU_04, Smmu, "I017", "Check TLB Range Invalidation", BM_UEFI),
    base(B_SMMU_05, Smmu, "I030", "Check DVM capabilities", BM_UEFI),
    base(B_SMMU_06, Smmu, "I003", "Check SMMU Large Physical Addr Support", BM_UEFI),
    base(B_SMMU_08, Smmu, "I004", "Check SMMU S-EL2 & stage1 support", BM_UEFI),
    base(B_SMMU_09, Smmu, "I010", "Check S-EL2 & SMMU Stage1 support", BM_UEFI),
    base(B_SMMU_11, Smmu, "I012", "Check SMMU for MPAM support", BM_UEFI),
    base(B_SMMU_13, Smmu, "I018", "Check SMMU 16 Bit ASID Support", BM_UEFI),
    base(B_SMMU_14, Smmu, "I019", "Check SMMU Endianess Support", BM_UEFI),
    base(B_SMMU_16, Smmu, "I005", "Check SMMUs stage2 support", BM_UEFI),
    base(B_SMMU_18, Smmu, "I029", "Check SMMU S-EL2 & stage2 support", BM_UEFI),
    base(B_SMMU_19, Smmu, "I006", "SMMUv2 unique intr per ctxt bank", BM_UEFI),
    base(B_SMMU_20, Smmu, "I011", "Check S-EL2 & SMMU Stage2 Support", BM_UEFI),
    alias(B_SMMU_21, Smmu, "SMMUv3 Integration compliance", BM_UEFI),
    base(B_SMMU_23, Smmu, "I015", "Check SMMU 16 Bit VMID Support", BM_UEFI),
    base(GPU_04, Pcie, "GPU_04", "Check ATS support for RC and SMMU", BM_UEFI),
    base(SMMU_01, Smmu, "I007", "SMMUv3 Integration compliance", BM_UEFI),
    base(S_L4SM_01, Smmu, "I008", "Check Stage 1 SMMUv3 functionality", BM_UEFI),
    base(S_L4SM_02, Smmu, "I025", "Check Stage 2 SMMUv3 functionality", BM_UEFI),
    base(S_L4SM_03, Smmu, "I020", "Check SMMU Coherent Access Support", BM_UEFI),
    base(S_L5SM_01, Smmu, "I009", "Check SMMUv3.2 or higher", BM_UEFI),
    base(S_L5SM_02, Smmu, "I026", "Check SMMU L1 and L2 table resizing", BM_UEFI),
    base(S_L5SM_03, Smmu, "I012", "Check SMMU for MPAM support", BM_UEFI),
    base(S_L6SM_02, Smmu, "I013", "Check SMMU HTTU Support", BM_UEFI),
    base(S_L6SM_03, Smmu, "I014", "Check SMMU MSI Support", BM_UEFI),
    base(S_L7SM_01, Smmu, "I022", "Check if all DMA reqs behind SMMU", BM_UEFI),
    base(S_L7SM_02, Smmu, "I023", "Check for SMMU/CATU in ETR Path", BM_LINUX),
    base(S_L7SM_03, Smmu, "I021", "Check SMMU PMU Extension presence", BM_UEFI),
    base(S_L7SM_04, Smmu, "I027", "Check SMMU PMCG has >= 4 counters", BM_UEFI),
    base(S_L8SM_01, Smmu, "I028", "Check SMMUv3.3 or higher", BM_UEFI),
    base(P_L1SM_02, Smmu, "I008", "Check Stage 1 SMMUv3 functionality", BM_UEFI),
    base(P_L1SM_03, Smmu, "I025", "Check Stage 2 SMMUv3 functionality", BM_UEFI),
    base(P_L1SM_04, Smmu, "I020", "Check SMMU Coherent Access Support", BM_UEFI),
    base(P_L1SM_05, Smmu, "I022", "Check if all DMA reqs behind SMMU", BM_UEFI),
    alias(V_L1SM_01, Smmu, "Check vSMMU architectural compliance", UEFI),
    base(V_L1SM_02, Smmu, "I031", "Check SMMU stage 1 support for VE", UEFI),
    base(B_TIME_01, Timer, "T001", "Check for Generic System Counter", BM_UEFI),
    base(B_TIME_02, Timer, "T007", "Check System Counter Frequency", BM_UEFI),
    base(B_TIME_06, Timer, "T002", "SYS Timer if PE Timer not ON", BM_UEFI),
    base(B_TIME_07, Timer, "T003", "Memory mapped timer check", BM_UEFI),
    base(B_TIME_08, Timer, "T004", "Generate Mem Mapped SYS Timer Intr", BM_UEFI),
    base(B_TIME_09, Timer, "T005", "Restore PE timer on PE wake up", BM_UEFI),
    base(S_L8TI_01, Timer, "T006", "Check Minimum Counter Frequency 50MHz", BM_UEFI),
    base(V_L1TM_01, Timer, "T001", "Check Virt and Phy counter presence", UEFI),
    base(V_L1TM_02, Timer, "T007", "Check Virt and Phy counter min freq", UEFI),
    base(V_L1TM_04, Timer, "T008", "Check uniform passage of time in VE", UEFI),
    alias(B_WD_00, Watchdog, "Generic watchdog check", BM_UEFI),
    base(B_WD_01, Watchdog, "W001", "Non Secure Watchdog Access ", BM_UEFI),
    base(B_WD_03, Watchdog, "W002", "Check Watchdog WS0 interrupt ", BM_UEFI),
    alias(S_L3WD_01, Watchdog, "Non-secure Generic watchdog check", BM_UEFI),
    base(S_L6WD_01, Watchdog, "W003", "Check NS Watchdog Revision", BM_UEFI),
    alias(P_L2WD_01, Watchdog, "Non-secure Generic watchdog check", BM_UEFI),
    base(S_L7ENT_1, Nist, "N001", "NIST Statistical Test Suite", NONE),
    base(S_L7MP_01, Mpam, "MPAM001", "Check for MPAM extension", BM_UEFI),
    base(S_L7MP_02, Mpam, "MPAM008", "Check for MPAM partition IDs ", BM_UEFI),
    base(S_L7MP_03, Mpam, "S_L7MP_03", "Check MPAM LLC Requirements", BM_UEFI),
    base(S_L7MP_04, Mpam, "MPAM009", "Check for MPAM LLC CSU Monitor count", BM_UEFI),
    base(S_L7MP_05, Mpam, "MPAM003", "Check for MPAM MBWUs Monitor func", BM_UEFI),
    base(S_L7MP_08, Mpam, "MPAM005", "Check for MPAM MSC address overlap", BM_UEFI),
    base(ETE_02, Ete, "ETE001", "Check for FEAT_ETE", BM_UEFI),
    base(ETE_03, Ete, "ETE002", "Check trace unit ETE supports", BM_UEFI),
    base(ETE_04, Ete, "ETE003", "Check ETE Same Trace Timestamp Source", BM_UEFI),
    base(ETE_05, Ete, "ETE004", "Check Trace Same Timestamp Source", BM_UEFI),
    base(ETE_06, Ete, "ETE009", "Check Concurrent Trace Generation", BM_UEFI),
    base(ETE_07, Ete, "ETE005", "Check for FEAT_TRBE", BM_UEFI),
    base(ETE_08, Ete, "ETE006", "Check trace buffers flag updates", BM_UEFI),
    base(ETE_09, Ete, "ETE007", "Check TRBE trace buffers alignment", BM_UEFI),
    base(ETE_10, Ete, "ETE008", "Check GICC TRBE Interrupt field", BM_UEFI),
    base(B_WAK_03, PowerWakeup, "B_WAK_03_07", "Check power wakeup interrupts", BM_UEFI),
    base(B_WAK_07, PowerWakeup, "B_WAK_03_07", "Check power wakeup interrupts", BM_UEFI),
    base(V_L1WK_02, PowerWakeup, "V_L1WK_02_05", "Check power wakeup interrupts", UEFI),
    base(V_L1WK_05, PowerWakeup, "V_L1WK_02_05", "Check vPE power state semantics", UEFI),
    base(P_L1TP_01, Tpm, "TPM001", "Check TPM Version", BM_UEFI),
    base(P_L1TP_03, Tpm, "TPM002", "Check TPM interface locality support", BM_UEFI),
    base(B_PER_12, Pcie, "P021", "Type 0 config header rules", BM_UEFI),
    base(B_PCIe_10, Pcie, "E030", "Enable and disable STE.DCP bit", BM_UEFI),
    base(B_PCIe_11, Pcie, "P091", "Steering Tag value properties", BM_LINUX),
    base(GPU_03, Pcie, "P093", "Switches must support ACS if P2P", BM_UEFI),
    alias(B_REP_1, Pcie, "Check RCiEP Devices", ALL),
    alias(B_IEP_1, Pcie, "Check i-EP Devices", ALL),
    base(BJLPB, Pcie, "P100", "Check MSI/MSI-X if FRS is supported", BM_UEFI),
    base(XRPZG, Pe, "PE066", "Check num of Breakpoints and type", BM_UEFI),
    alias(V_L1PE_01, Pe, "Check vPE architectural compliance", UEFI),
    base(V_L1PE_02, Pe, "V_L1PE_02", "Check PMUv3 support in vPE", UEFI),
    base(V_L2PE_01, Pe, "PE068", "Check num PMU counters for vPEs", UEFI),
    base(V_L2PE_02, Pe, "PE010", "Check vPE PMU overflow signal", UEFI),
    base(WNPXD, Pe, "PE065", "Check for FEAT_PFAR support", BM_UEFI),
    base(IE_ACS_1, Pcie, "P082", "Check ACS Cap on p2p support: iEP EP", BM_UEFI),
    base(IE_ACS_2, Pcie, "P081", "Check iEP-RootPort P2P Support", BM_UEFI),
    base(IE_ORD_4, Pcie, "E038", "Tx pending bit clear correctness: iEP", BM_UEFI),
    base(IE_PWR_1, Pcie, "P034", "Check Power Management rules: iEP/RP", BM_UEFI),
    base(IE_REG_1, Pcie, "IE_REG_1", "Check config header rule: iEP_EP", BM_UEFI),
    base(IE_REG_2, Pcie, "IE_REG_2", "Check Dev Cap & Ctrl Reg rule - iEP_EP", BM_UEFI),
    base(IE_REG_3, Pcie, "IE_REG_3", "Check config header rule: iEP_RP", BM_UEFI),
    base(IE_REG_4, Pcie, "IE_REG_4", "Check PCIe capability rules: iEP_RP", BM_UEFI),
    base(IE_REG_5, Pcie, "P057", "Check Power Mgmt Cap/Ctrl/Status - iEP", BM_UEFI),
    base(IE_REG_6, Pcie, "P092", "Secondary PCIe ECap Check: iEP Pair", BM_UEFI),
    base(IE_REG_7, Pcie, "P012", "Datalink feature ECap Check: iEP Pair", BM_UEFI),
    base(IE_REG_8, Pcie, "P013", "Phy Layer 16GT/s ECap Check: iEP Pair", BM_UEFI),
    base(IE_REG_9, Pcie, "P014", "Lane Margining at Rec ECap Check: iEP", BM_UEFI),
    base(IE_RST_2, Pcie, "P079", "Check Sec Bus Reset For iEP_RP", BM_UEFI),
    base(ITS_03, Pcie, "E011", "MSI-capable device linked to ITS group", BM_UEFI),
    base(ITS_04, Pcie, "E035", "MSI-cap device can target any ITS blk", BM_UEFI),
    base(ITS_05, Pcie, "E012", "MSI to ITS Blk outside assigned group", BM_UEFI),
    base(ITS_DEV_4, Pcie, "E013", "MSI originating from different master", BM_UEFI),
    base(ITS_DEV_6, Pcie, "E004", "Write to ITS GITS_TRANSLATER", BM_UEFI),
    base(PCI_ER_01, Pcie, "P010", "Check RP AER feature", BM_UEFI),
    base(PCI_ER_04, Pcie, "E023", "Check AER functionality for RPs", BM_UEFI),
    base(PCI_ER_05, Pcie, "P007", "Check RP DPC feature", BM_UEFI),
    base(PCI_ER_06, Pcie, "E024", "Check DPC funcionality for RPs", BM_UEFI),
    base(PCI_ER_07, Pcie, "E029", "RAS ERR record for external abort", BM_UEFI),
    base(PCI_ER_08, Pcie, "E028", "RAS ERR record for poisoned data", BM_UEFI),
    base(PCI_ER_09, Pcie, "P090", "Check RP Extensions for DPC", BM_UEFI),
    base(PCI_ER_10, Pcie, "E027", "DPC trig when RP-PIO unimplemented", BM_UEFI),
    base(PCI_IC_11, Pcie, "PCI_IC_11", "PCIe RC,PE - Same Inr Shareable Domain", BM_UEFI),
    base(PCI_IC_15, Pcie, "E003", "Arrival order Check", BM_UEFI),
    base(PCI_IN_01, Pcie, "P001", "Check ECAM Presence", ALL),
    base(PCI_IN_02, Pcie, "P002", "Check ECAM Memory accessibility", BM_UEFI),
    base(PCI_IN_03, Pcie, "P038", "Check all RP in HB is in same ECAM", BM_UEFI),
    base(PCI_IN_04, Pcie, "PCI_IN_04", "All EP/Sw under RP in same ECAM Region", BM_UEFI),
    base(PCI_IN_05, Pcie, "PCI_IN_05", "Type 0/1 common config rule", BM_UEFI),
    base(PCI_IN_11, Pcie, "E010", "Check RP Sec Bus transaction are TYPE0", BM_UEFI),
    base(PCI_IN_12, Pcie, "P037", "Check Config Txn for RP in HB", BM_UEFI),
    base(PCI_IN_13, Pcie, "PCI_IN_13", "Check RootPort NP Memory Access", BM),
    base(PCI_IN_16, Pcie, "P008", "Check all 1's for out of range", BM_UEFI),
    base(PCI_IN_17, Pcie, "PCI_IN_17", "Check ARI forwarding enable rule", BM_UEFI),
    base(PCI_IN_18, Pcie, "P011", "Check RP Byte Enable Rules", BM_UEFI),
    base(PCI_IN_19, Pcie, "PCI_IN_19", "Check Cmd Reg memory space enable", BM_UEFI),
    base(PCI_IN_20, Pcie, "P009", "Vendor specific data is PCIe compliant", BM_UEFI),
    base(PCI_LI_01, Pcie, "PCI_LI_01", "Check Legacy Interrupt is SPI", BM_UEFI),
    base(PCI_LI_02, Pcie, "PCI_LI_02", "PCI legacy intr SPI ID unique", ALL),
    base(PCI_LI_03, Pcie, "PCI_LI_03", "Check Legacy Intr SPI level sensitive", BM_UEFI),
    base(PCI_MM_01, Pcie, "PCI_MM_01", "PCIe Device Memory mapping support", ALL),
    base(PCI_MM_03, Pcie, "PCI_MM_03", "PCIe Normal Memory mapping support", ALL),
    base(PCI_MM_04, Pcie, "P047", "NP type-1 pcie only support 32-bit", BM_UEFI),
    base(PCI_MM_05, Pcie, "P095", "PCIe & PE common physical memory view", BM_LINUX),
    base(PCI_MM_07, Pcie, "P105", "No extra address translation", BM_LINUX),
    base(PCI_MSI_2, Pcie, "PCI_MSI_2", "Check MSI(X) vectors uniqueness", ALL),
    base(PCI_MSI_1, Pcie, "P039", "Check MSI support for PCIe dev", BM_UEFI),
    base(PCI_PAS_1, Pcie, "P042", "PASID support atleast 16 bits", BM_UEFI),
    base(PCI_PP_02, Pcie, "E014", "P2P transactions must not deadlock", BM_UEFI),
    base(PCI_PP_03, Pcie, "P019", "RP must suprt ACS if P2P Txn are allow", BM_UEFI),
    base(PCI_PP_04, Pcie, "PCI_PP_04", "Check P2P ACS Functionality", BM_UEFI),
    base(PCI_PP_05, Pcie, "PCI_PP_05", "Check Direct Transl P2P Support", BM_UEFI),
    base(PCI_SM_02, Pcie, "P035", "Check Function level reset", BM_UEFI),
    base(RE_ACS_1, Pcie, "P015", "Check ACS Cap on p2p support: RCiEP", BM_UEFI),
    base(RE_ACS_2, Pcie, "P016", "Check AER Cap on ACS Cap support", BM_UEFI),
    base(RE_ORD_4, Pcie, "E008", "Tx pending bit clear correctness: RCiEP", BM_UEFI),
    base(RE_PCI_1, Pcie, "P085", "Check RCiEP Hdr type & link Cap", BM_UEFI),
    base(RE_PCI_2, Pcie, "P084", "Check RCEC Class code and Ext Cap", BM_UEFI),
    base(RE_PWR_1, Pcie, "P070", "Check Power Management rules: RCiEP", BM_UEFI),
    base(RE_REC_1, Pcie, "RE_REC_1", "Check Dev Cap & Ctrl Reg rule - RCEC", BM_UEFI),
    base(RE_REG_1, Pcie, "RE_REG_1", "Check config header rule: RCEC/RCiEP", BM_UEFI),
    base(RE_REG_2, Pcie, "P056", "Check Power Mgmt Cap/Ctrl/Status - RC", BM_UEFI),
    base(RE_REG_3, Pcie, "P052", "Check Dev Cap & Ctrl Reg rule - RCiEP", BM_UEFI),
    base(S_L4PCI_2, Pcie, "P087", "Check EA Capability", BM_UEFI),
    alias(S_L6PCI_1, Pcie, "Check PCIe On-chip Peripherals", ALL),
    base(S_PCIe_02, Pcie, "P086", "Check RootPort P&NP Memory Access", BM_UEFI),
    base(S_PCIe_03, Pcie, "E022", "PE 2/4/8B writes to PCIe as 2/4/8B", BM_UEFI),
    base(S_PCIe_04, Pcie, "E025", "Check 2/4/8 Bytes targeted writes", BM_UEFI),
    base(S_PCIe_07, Pcie, "E026", "Check Inbound writes seen in order", BM_UEFI),
    base(S_PCIe_08, Pcie, "E032", "Check ordered writes flush prev writes", BM_UEFI),
    base(S_L3GI_02, Pcie, "P046", "Check all MSI(X) vectors are LPIs", ALL),
    base(P_L1PCI_2, Pcie, "P087", "Check EA Capability", BM_UEFI),
    base(RI_BAR_1, Pcie, "P083", "Read and write to BAR reg", BM_UEFI),
    base(RI_BAR_3, Pcie, "P062", "Check BAR memory space & type", BM_UEFI),
    base(RI_INT_1, Pcie, "P069", "Check MSI and MSI-X support", BM_UEFI),
    base(RI_ORD_1, Pcie, "E021", "Arrival order & Gathering Check", BM_UEFI),
    base(RI_RST_1, Pcie, "P063", "Check Function level reset", BM_UEFI),
    base(RI_SMU_1, Pcie, "E019", "Check ATS Support Rule", BM_UEFI),
    base(RI_SMU_3, Pcie, "E036", "Generate PASID transactions", BM_UEFI),
];
