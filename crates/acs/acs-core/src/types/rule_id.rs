//! Rule identifiers.
//!
//! `RuleId` is a closed enum. Declaration order is the canonical execution
//! order: rules are grouped by module, so sorting a rule list by `RuleId`
//! yields module-wise output.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! rule_ids {
    ($($id:ident),+ $(,)?) => {
        /// Identifier of one compliance rule.
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(u16)]
        pub enum RuleId {
            $($id),+
        }

        impl RuleId {
            /// Every rule id, in canonical order.
            pub const ALL: &'static [RuleId] = &[$(RuleId::$id),+];

            /// The rule name as written in rule lists and reports.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(RuleId::$id => stringify!($id)),+
                }
            }
        }
    };
}

rule_ids! {
    S_L3_01, P_L1_01, B_PE_01, B_PE_02, B_PE_03, B_PE_04, B_PE_05, B_PE_06, B_PE_07, B_PE_08,
    B_PE_09, B_PE_10, B_PE_11, B_PE_12, B_PE_13, B_PE_14, B_PE_15, B_PE_16, B_PE_17, B_PE_18,
    B_PE_19, B_PE_20, B_PE_21, B_PE_22, B_PE_23, B_PE_24, B_PE_25, B_SEC_01, B_SEC_02,
    B_SEC_03, B_SEC_04, B_SEC_05, S_L3PE_01, S_L3PE_02, S_L3PE_03, S_L3PE_04, S_L4PE_01,
    S_L4PE_02, S_L4PE_03, S_L4PE_04, S_L5PE_01, S_L5PE_02, S_L5PE_03, S_L5PE_04, S_L5PE_05,
    S_L5PE_06, S_L5PE_07, S_L6PE_01, S_L6PE_02, S_L6PE_03, S_L6PE_04, S_L6PE_05, S_L6PE_06,
    S_L6PE_07, S_L6PE_08, S_L7PE_01, S_L7PE_02, S_L7PE_04, S_L7PE_05, S_L7PE_06, S_L7PE_07,
    S_L7PE_08, S_L7PE_09, S_L7TME_1, S_L7TME_2, S_L7TME_3, S_L7TME_4, S_L7TME_5, S_L8PE_01,
    S_L8PE_02, S_L8PE_03, S_L8PE_04, S_L8PE_05, S_L8PE_06, S_L8PE_07, S_L8PE_08, S_L8RME_1,
    S_L8SHD_1, P_L1PE_01, P_L1PE_02, P_L1PE_03, P_L1PE_04, P_L1PE_05, P_L1PE_06, P_L1PE_07,
    P_L1PE_08, B_GIC_01, B_GIC_02, B_GIC_03, B_GIC_04, B_GIC_05, ITS_01, ITS_02, ITS_DEV_2,
    ITS_DEV_7, ITS_DEV_8, S_L3GI_01, B_PPI_00, S_L3PP_01, S_L5GI_01, S_L5PP_01, S_L8GI_01,
    Appendix_I_5, Appendix_I_6, Appendix_I_9, P_L1GI_01, P_L1GI_02, P_L1GI_03, P_L1GI_04,
    P_L1PP_01, V_L1GI_01, V_L1PP_00, B_PER_01, B_PER_02, B_PER_03, B_PER_04, B_PER_05,
    S_L3PR_01, B_PER_06, B_PER_07, B_PER_08, B_PER_09, B_PER_10, V_L1PR_01, V_L1PR_02,
    B_PER_11, B_MEM_01, B_MEM_02, B_MEM_03, B_MEM_04, B_MEM_05, B_MEM_06, B_MEM_07, B_MEM_08,
    B_MEM_09, S_L3MM_01, S_L3MM_02, P_L1MM_01, V_L1MM_01, V_L1MM_02, PMU_PE_02, PMU_PE_03,
    PMU_SYS_1, PMU_SYS_2, PMU_SYS_5, PMU_SYS_6, PMU_BM_1, PMU_MEM_1, PMU_BM_2, PMU_EV_11,
    PMU_SPE, S_L7PMU, RAS_01, RAS_02, RAS_03, RAS_04, RAS_06, RAS_07, RAS_08, RAS_11, RAS_05,
    RAS_10, RAS_12, S_L7RAS_1, S_L7RAS_2, S_RAS_01, S_RAS_03, SYS_RAS, SYS_RAS_1, SYS_RAS_2,
    SYS_RAS_3, SYS_RAS_4, B_SMMU_01, B_SMMU_02, B_SMMU_03, B_SMMU_04, B_SMMU_05, B_SMMU_06,
    B_SMMU_07, B_SMMU_08, B_SMMU_09, B_SMMU_11, B_SMMU_12, B_SMMU_13, B_SMMU_14, B_SMMU_16,
    B_SMMU_17, B_SMMU_18, B_SMMU_19, B_SMMU_20, B_SMMU_21, B_SMMU_23, B_SMMU_24, B_SMMU_25,
    GPU_04, SMMU_01, SMMU_02, S_L3SM_01, S_L4SM_01, S_L4SM_02, S_L4SM_03, S_L5SM_01, S_L5SM_02,
    S_L5SM_03, S_L5SM_04, S_L6SM_02, S_L6SM_03, S_L6SM_04, S_L7SM_01, S_L7SM_02, S_L7SM_03,
    S_L7SM_04, S_L8SM_01, P_L1SM_01, P_L1SM_02, P_L1SM_03, P_L1SM_04, P_L1SM_05, V_L1SM_01,
    V_L1SM_02, B_TIME_01, B_TIME_02, B_TIME_03, B_TIME_04, B_TIME_05, B_TIME_06, B_TIME_07,
    B_TIME_08, B_TIME_09, B_TIME_10, S_L5TI_01, S_L8TI_01, V_L1TM_01, V_L1TM_02, V_L1TM_04,
    B_WD_00, B_WD_01, B_WD_02, B_WD_03, B_WD_04, B_WD_05, S_L3WD_01, S_L6WD_01, P_L2WD_01,
    S_L7ENT_1, S_L7MP_01, S_L7MP_02, S_L7MP_03, S_L7MP_04, S_L7MP_05, S_L7MP_07, S_L7MP_08,
    ETE_02, ETE_03, ETE_04, ETE_05, ETE_06, ETE_07, ETE_08, ETE_09, ETE_10, B_WAK_01, B_WAK_02,
    B_WAK_03, B_WAK_04, B_WAK_05, B_WAK_06, B_WAK_07, V_L1WK_02, V_L1WK_05, B_WAK_08, B_WAK_10,
    B_WAK_11, P_L1NV_01, P_L1SE_01, P_L1SE_02, P_L1SE_03, P_L1SE_04, P_L1SE_05, P_L1TP_01,
    P_L1TP_02, P_L1TP_03, P_L1TP_04, B_PER_12, B_PCIe_10, B_PCIe_11, GPU_01, GPU_02, GPU_03,
    B_REP_1, B_IEP_1, BJLPB, XRPZG, V_L1PE_01, V_L1PE_02, V_L2PE_01, V_L2PE_02, WNPXD,
    IE_ACS_1, IE_ACS_2, IE_BAR_1, IE_BAR_3, IE_INT_1, IE_ORD_1, IE_ORD_4, IE_PWR_1, IE_PWR_2,
    IE_PWR_3, IE_REG_1, IE_REG_2, IE_REG_3, IE_REG_4, IE_REG_5, IE_REG_6, IE_REG_7, IE_REG_8,
    IE_REG_9, IE_RST_1, IE_RST_2, IE_RST_3, IE_SMU_1, IE_SMU_3, ITS_03, ITS_04, ITS_05, ITS_06,
    ITS_07, ITS_08, ITS_DEV_4, ITS_DEV_6, ITS_DEV_1, ITS_DEV_3, ITS_DEV_5, ITS_DEV_9,
    PCI_ER_01, PCI_ER_04, PCI_ER_05, PCI_ER_06, PCI_ER_07, PCI_ER_08, PCI_ER_09, PCI_ER_10,
    PCI_IC_11, PCI_IC_15, PCI_IC_12, PCI_IC_13, PCI_IC_14, PCI_IC_16, PCI_IC_17, PCI_IC_18,
    PCI_IN_01, PCI_IN_02, PCI_IN_03, PCI_IN_04, PCI_IN_05, PCI_IN_11, PCI_IN_12, PCI_IN_13,
    PCI_IN_16, PCI_IN_17, PCI_IN_18, PCI_IN_19, PCI_IN_20, PCI_IN_06, PCI_IN_07, PCI_IN_08,
    PCI_IN_09, PCI_IN_10, PCI_IN_14, PCI_IN_15, PCI_LI_01, PCI_LI_02, PCI_LI_03, PCI_LI_04,
    PCI_MM_01, PCI_MM_03, PCI_MM_04, PCI_MM_05, PCI_MM_07, PCI_MM_02, PCI_MM_06, PCI_MSI_01,
    PCI_MSI_2, PCI_MSI_1, PCI_PAS_1, PCI_PP_02, PCI_PP_03, PCI_PP_04, PCI_PP_05, PCI_PP_01,
    PCI_PP_06, PCI_SM_02, PCI_SM_01, RE_ACS_1, RE_ACS_2, RE_ACS_3, RE_BAR_1, RE_BAR_3,
    RE_INT_1, RE_ORD_1, RE_ORD_4, RE_PCI_1, RE_PCI_2, RE_PWR_1, RE_PWR_2, RE_PWR_3, RE_REC_1,
    RE_REC_2, RE_REG_1, RE_REG_2, RE_REG_3, RE_RST_1, RE_SMU_2, RE_SMU_4, S_L4PCI_1, S_L4PCI_2,
    S_L6PCI_1, S_PCIe_01, S_PCIe_02, S_PCIe_03, S_PCIe_04, S_PCIe_05, S_PCIe_06, S_PCIe_09,
    S_PCIe_07, S_PCIe_08, S_PCIe_10, S_PCIe_11, S_L8CXL_1, S_L3GI_02, P_L1PCI_1, P_L1PCI_2,
    RI_BAR_1, RI_BAR_2, RI_BAR_3, RI_INT_1, RI_ORD_1, RI_RST_1, RI_SMU_1, RI_SMU_2, RI_SMU_3,
    RI_ORD_2, RI_ORD_3, IE_CFG_1, IE_CFG_2, IE_CFG_4, LVQBC, PCI_IEP_1, PCI_IO_01, PCI_PTM_1,
    RE_CFG_1, RE_CFG_2, RE_CFG_3, RI_CRS_1, RI_PWR_1, RKLPK, ZVDJG,
}

impl RuleId {
    /// Number of rule ids.
    pub const COUNT: usize = Self::ALL.len();

    /// Position in canonical order. Also the value carried in EL3 rule arrays.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`RuleId::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Exact, case-sensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == name)
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRuleId(pub String);

impl fmt::Display for UnknownRuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid rule id: {}", self.0)
    }
}

impl std::error::Error for UnknownRuleId {}

impl FromStr for RuleId {
    type Err = UnknownRuleId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownRuleId(s.to_string()))
    }
}

impl Serialize for RuleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RuleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
