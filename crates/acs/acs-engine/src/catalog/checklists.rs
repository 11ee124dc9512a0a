//! Per-architecture checklists: every rule of the architecture with its
//! compliance level and, for BSA, its software view.

use acs_core::types::RuleId::*;
use acs_core::types::SoftwareView::*;
use acs_core::types::{RuleId, SoftwareView};

use super::ChecklistEntry;

const fn tagged(rule: RuleId, level: u8, view: SoftwareView) -> ChecklistEntry {
    ChecklistEntry {
        rule,
        level,
        sw_view: Some(view),
    }
}

const fn untagged(rule: RuleId, level: u8) -> ChecklistEntry {
    ChecklistEntry {
        rule,
        level,
        sw_view: None,
    }
}

pub(crate) mod bsa {
    use super::*;
    use acs_core::constants::{BSA_LEVEL_FR as FR, BSA_LEVEL_MIN as L1};

    pub(crate) static CHECKLIST: &[ChecklistEntry] = &[
        tagged(B_PE_01, L1, Os),
        tagged(B_PE_02, L1, Os),
        tagged(B_PE_03, L1, Os),
        tagged(B_PE_04, L1, Os),
        tagged(B_PE_05, L1, Os),
        tagged(B_PE_06, L1, Os),
        tagged(B_PE_07, L1, Os),
        tagged(B_PE_08, L1, Os),
        tagged(B_PE_09, L1, Os),
        tagged(B_PE_10, L1, Os),
        tagged(B_PE_11, L1, Os),
        tagged(B_PE_12, L1, Os),
        tagged(B_PE_13, L1, Os),
        tagged(B_PE_14, L1, Os),
        tagged(B_PE_18, L1, Hyp),
        tagged(B_PE_19, L1, Hyp),
        tagged(B_PE_20, L1, Hyp),
        tagged(B_PE_21, L1, Hyp),
        tagged(B_PE_22, L1, Hyp),
        tagged(B_PE_23, L1, Ps),
        tagged(B_PE_24, L1, Ps),
        tagged(B_MEM_01, L1, Os),
        tagged(B_MEM_02, L1, Os),
        tagged(B_MEM_03, L1, Os),
        tagged(B_MEM_05, L1, Os),
        tagged(B_MEM_06, L1, Os),
        tagged(B_MEM_07, L1, Os),
        tagged(B_MEM_08, L1, Ps),
        tagged(B_MEM_09, L1, Ps),
        tagged(B_GIC_01, L1, Os),
        tagged(B_GIC_02, L1, Os),
        tagged(B_GIC_03, L1, Os),
        tagged(B_GIC_04, L1, Os),
        tagged(B_GIC_05, L1, Os),
        tagged(B_PPI_00, L1, Os),
        tagged(B_SMMU_01, L1, Os),
        tagged(B_SMMU_02, L1, Os),
        tagged(B_SMMU_06, L1, Os),
        tagged(B_SMMU_07, L1, Os),
        tagged(B_SMMU_08, L1, Os),
        tagged(B_SMMU_12, L1, Os),
        tagged(B_SMMU_16, L1, Hyp),
        tagged(B_SMMU_17, L1, Hyp),
        tagged(B_SMMU_18, L1, Hyp),
        tagged(B_SMMU_19, L1, Hyp),
        tagged(B_SMMU_21, L1, Hyp),
        tagged(B_TIME_01, L1, Os),
        tagged(B_TIME_02, L1, Os),
        tagged(B_TIME_03, L1, Os),
        tagged(B_TIME_04, L1, Os),
        tagged(B_TIME_05, L1, Os),
        tagged(B_TIME_06, L1, Os),
        tagged(B_TIME_07, L1, Os),
        tagged(B_TIME_08, L1, Os),
        tagged(B_TIME_09, L1, Os),
        tagged(B_TIME_10, L1, Os),
        tagged(B_WAK_01, L1, Os),
        tagged(B_WAK_02, L1, Os),
        tagged(B_WAK_03, L1, Os),
        tagged(B_WAK_04, L1, Os),
        tagged(B_WAK_05, L1, Os),
        tagged(B_WAK_06, L1, Os),
        tagged(B_WAK_07, L1, Os),
        tagged(B_WAK_08, L1, Os),
        tagged(B_WAK_10, L1, Os),
        tagged(B_WAK_11, L1, Os),
        tagged(B_WD_00, L1, Os),
        tagged(B_PER_01, L1, Os),
        tagged(B_PER_02, L1, Os),
        tagged(B_PER_03, L1, Os),
        tagged(B_PER_04, L1, Os),
        tagged(B_PER_05, L1, Os),
        tagged(B_PER_06, L1, Os),
        tagged(B_PER_07, L1, Os),
        tagged(B_PER_08, L1, Os),
        tagged(B_PER_09, L1, Os),
        tagged(B_PER_10, L1, Os),
        tagged(B_PER_12, L1, Os),
        tagged(B_PER_11, L1, Ps),
        tagged(B_PE_16, FR, Os),
        tagged(B_PE_17, FR, Os),
        tagged(B_PE_25, FR, Os),
        tagged(XRPZG, FR, Os),
        tagged(B_SEC_01, FR, Os),
        tagged(B_SEC_02, FR, Os),
        tagged(B_SEC_03, FR, Os),
        tagged(B_SEC_04, FR, Os),
        tagged(B_SEC_05, FR, Os),
        tagged(B_SMMU_03, FR, Os),
        tagged(B_SMMU_04, FR, Os),
        tagged(B_SMMU_05, FR, Os),
        tagged(B_SMMU_09, FR, Os),
        tagged(B_SMMU_11, FR, Os),
        tagged(B_SMMU_13, FR, Os),
        tagged(B_SMMU_14, FR, Os),
        tagged(B_SMMU_20, FR, Os),
        tagged(B_SMMU_23, FR, Os),
        tagged(B_SMMU_24, FR, Os),
        tagged(B_SMMU_25, FR, Os),
        tagged(B_REP_1, FR, Os),
        tagged(B_IEP_1, FR, Os),
        tagged(BJLPB, FR, Os),
        tagged(B_PCIe_10, FR, Os),
        tagged(B_PCIe_11, FR, Os),
    ];
}

pub(crate) mod sbsa {
    use super::*;
    use acs_core::constants::SBSA_LEVEL_FR as FR;

    const L3: u8 = 3;
    const L4: u8 = 4;
    const L5: u8 = 5;
    const L6: u8 = 6;
    const L7: u8 = 7;

    pub(crate) static CHECKLIST: &[ChecklistEntry] = &[
        untagged(S_L3PE_01, L3),
        untagged(S_L3PE_02, L3),
        untagged(S_L3PE_03, L3),
        untagged(S_L3PE_04, L3),
        untagged(S_L3MM_01, L3),
        untagged(S_L3MM_02, L3),
        untagged(S_L3GI_01, L3),
        untagged(S_L3GI_02, L3),
        untagged(S_L3PP_01, L3),
        untagged(S_L3SM_01, L3),
        untagged(S_L3WD_01, L3),
        untagged(S_L3PR_01, L3),
        untagged(S_PCIe_09, L3),
        untagged(S_L4PE_01, L4),
        untagged(S_L4PE_02, L4),
        untagged(S_L4PE_03, L4),
        untagged(S_L4PE_04, L4),
        untagged(S_L4SM_01, L4),
        untagged(S_L4SM_02, L4),
        untagged(S_L4SM_03, L4),
        untagged(S_L4PCI_1, L4),
        untagged(S_L4PCI_2, L4),
        untagged(S_L5PE_01, L5),
        untagged(S_L5PE_02, L5),
        untagged(S_L5PE_03, L5),
        untagged(S_L5PE_04, L5),
        untagged(S_L5PE_05, L5),
        untagged(S_L5PE_06, L5),
        untagged(S_L5PE_07, L5),
        untagged(S_L5GI_01, L5),
        untagged(S_L5SM_01, L5),
        untagged(S_L5SM_02, L5),
        untagged(S_L5SM_03, L5),
        untagged(S_L5SM_04, L5),
        untagged(S_L5TI_01, L5),
        untagged(S_L5PP_01, L5),
        untagged(S_L6PE_01, L6),
        untagged(S_L6PE_02, L6),
        untagged(S_L6PE_03, L6),
        untagged(S_L6PE_04, L6),
        untagged(S_L6PE_05, L6),
        untagged(S_L6PE_06, L6),
        untagged(S_L6PE_07, L6),
        untagged(S_L6PE_08, L6),
        untagged(S_L6SM_02, L6),
        untagged(S_L6SM_03, L6),
        untagged(S_L6SM_04, L6),
        untagged(S_L6WD_01, L6),
        untagged(S_RAS_01, L6),
        untagged(S_RAS_03, L6),
        untagged(S_L6PCI_1, L6),
        untagged(S_L7PE_01, L7),
        untagged(S_L7PE_02, L7),
        untagged(S_L7PE_04, L7),
        untagged(S_L7PE_05, L7),
        untagged(S_L7PE_06, L7),
        untagged(S_L7PE_07, L7),
        untagged(S_L7RAS_1, L7),
        untagged(S_L7RAS_2, L7),
        untagged(S_L7TME_1, L7),
        untagged(S_L7TME_2, L7),
        untagged(S_L7TME_3, L7),
        untagged(S_L7TME_4, L7),
        untagged(S_L7TME_5, L7),
        untagged(S_L7MP_01, L7),
        untagged(S_L7MP_02, L7),
        untagged(S_L7MP_03, L7),
        untagged(S_L7MP_04, L7),
        untagged(S_L7MP_05, L7),
        untagged(S_L7MP_08, L7),
        untagged(S_L7ENT_1, L7),
        untagged(S_L7SM_01, L7),
        untagged(S_L7SM_02, L7),
        untagged(S_L7SM_03, L7),
        untagged(S_L7SM_04, L7),
        untagged(S_L7PMU, L7),
        untagged(SYS_RAS, L7),
        untagged(SYS_RAS_1, L7),
        untagged(SYS_RAS_2, L7),
        untagged(SYS_RAS_3, L7),
        untagged(S_PCIe_01, L7),
        untagged(S_PCIe_02, L7),
        untagged(S_PCIe_03, L7),
        untagged(S_PCIe_04, L7),
        untagged(S_PCIe_05, L7),
        untagged(PCI_ER_01, L7),
        untagged(PCI_ER_04, L7),
        untagged(PCI_ER_05, L7),
        untagged(PCI_ER_06, L7),
        untagged(S_L8PE_01, FR),
        untagged(S_L8PE_02, FR),
        untagged(S_L8PE_03, FR),
        untagged(S_L8PE_04, FR),
        untagged(S_L8PE_05, FR),
        untagged(S_L8PE_07, FR),
        untagged(S_L8PE_08, FR),
        untagged(S_L8RME_1, FR),
        untagged(S_L8SM_01, FR),
        untagged(SYS_RAS_4, FR),
        untagged(S_L8TI_01, FR),
        untagged(S_L8GI_01, FR),
        untagged(S_PCIe_06, FR),
        untagged(S_PCIe_07, FR),
        untagged(S_PCIe_08, FR),
        untagged(S_PCIe_10, FR),
        untagged(S_PCIe_11, FR),
        untagged(PCI_ER_07, FR),
        untagged(PCI_ER_08, FR),
        untagged(PCI_ER_09, FR),
        untagged(PCI_ER_10, FR),
        untagged(GPU_01, FR),
        untagged(GPU_02, FR),
        untagged(GPU_03, FR),
        untagged(GPU_04, FR),
        untagged(S_L8CXL_1, FR),
        untagged(S_L8PE_06, FR),
        untagged(S_L8SHD_1, FR),
    ];
}

pub(crate) mod pcbsa {
    use super::*;
    use acs_core::constants::{PCBSA_LEVEL_FR as FR, PCBSA_LEVEL_MIN as L1};

    pub(crate) static CHECKLIST: &[ChecklistEntry] = &[
        untagged(P_L1_01, L1),
        untagged(P_L1PE_01, L1),
        untagged(P_L1PE_02, L1),
        untagged(P_L1PE_03, L1),
        untagged(P_L1PE_04, L1),
        untagged(P_L1PE_05, L1),
        untagged(P_L1PE_06, L1),
        untagged(P_L1PE_07, L1),
        untagged(P_L1PE_08, L1),
        untagged(P_L1MM_01, L1),
        untagged(P_L1GI_01, L1),
        untagged(P_L1GI_02, L1),
        untagged(P_L1GI_03, L1),
        untagged(P_L1GI_04, L1),
        untagged(P_L1PP_01, L1),
        untagged(P_L1SM_01, L1),
        untagged(P_L1SM_02, L1),
        untagged(P_L1SM_03, L1),
        untagged(P_L1SM_04, L1),
        untagged(P_L1SM_05, L1),
        untagged(P_L1PCI_1, L1),
        untagged(P_L1PCI_2, L1),
        untagged(P_L1NV_01, L1),
        untagged(P_L1SE_01, L1),
        untagged(P_L1SE_02, L1),
        untagged(P_L1SE_03, L1),
        untagged(P_L1SE_04, L1),
        untagged(P_L1SE_05, L1),
        untagged(P_L1TP_01, L1),
        untagged(P_L1TP_02, L1),
        untagged(P_L1TP_03, L1),
        untagged(P_L1TP_04, L1),
        untagged(P_L2WD_01, FR),
    ];
}

/// VBSA is covered by its alias rules, all at level 1.
pub(crate) mod vbsa {
    use super::*;
    use acs_core::constants::VBSA_LEVEL_MIN as L1;

    pub(crate) static CHECKLIST: &[ChecklistEntry] = &[
        untagged(V_L1PE_01, L1),
        untagged(V_L1MM_01, L1),
        untagged(V_L1GI_01, L1),
        untagged(V_L1SM_01, L1),
        untagged(V_L1PR_01, L1),
        untagged(V_L1PR_02, L1),
    ];
}
