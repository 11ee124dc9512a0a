//! Alias rules and the base rules each one stands for, in run order.

use acs_core::types::RuleId;
use acs_core::types::RuleId::*;

pub(crate) static STANDARD_ALIASES: &[(RuleId, &[RuleId])] = &[
    (
        B_WD_00,
        &[
            B_WD_01, B_WD_02, B_WD_03, B_WD_04, B_WD_05,
        ],
    ),
    (
        B_PER_08,
        &[
            PCI_IN_01, PCI_IN_02, PCI_IN_03, PCI_IN_04, PCI_IN_05, PCI_IN_06, PCI_IN_07,
            PCI_IN_08, PCI_IN_09, PCI_IN_10, PCI_IN_11, PCI_IN_12, PCI_IN_13, PCI_IN_14,
            PCI_IN_15, PCI_IN_16, PCI_IN_17, PCI_IN_18, PCI_IN_19, PCI_IN_20, PCI_MM_01,
            PCI_MM_02, PCI_MM_03, PCI_MM_04, PCI_MM_05, PCI_MM_06, PCI_MM_07, PCI_MSI_1,
            PCI_MSI_2, PCI_LI_01, PCI_LI_02, PCI_LI_03, PCI_LI_04, PCI_SM_01, PCI_SM_02,
            PCI_IC_11, PCI_IC_12, PCI_IC_13, PCI_IC_14, PCI_IC_15, PCI_IC_16, PCI_IC_17,
            PCI_IC_18, PCI_IO_01, PCI_IEP_1, PCI_PP_01, PCI_PP_02, PCI_PP_03, PCI_PP_04,
            PCI_PP_05, PCI_PP_06, PCI_PAS_1, PCI_PTM_1,
        ],
    ),
    (
        B_REP_1,
        &[
            RI_CRS_1, RI_BAR_1, RI_BAR_2, RI_BAR_3, RI_INT_1, RI_ORD_1, RI_ORD_2, RI_ORD_3,
            RI_SMU_1, RI_SMU_2, RI_SMU_3, ITS_01, ITS_02, ITS_03, ITS_04, ITS_05, ITS_06,
            ITS_07, ITS_08, ITS_DEV_1, ITS_DEV_2, ITS_DEV_3, ITS_DEV_4, ITS_DEV_5, ITS_DEV_6,
            ITS_DEV_7, ITS_DEV_8, ITS_DEV_9, RI_RST_1, RI_PWR_1, PCI_IN_01, PCI_IN_02,
            PCI_IN_03, PCI_IN_04, PCI_IN_05, PCI_IN_06, PCI_IN_07, PCI_IN_08, PCI_IN_09,
            PCI_IN_10, PCI_IN_11, PCI_IN_12, PCI_IN_13, PCI_IN_14, PCI_IN_15, PCI_IN_16,
            PCI_IN_17, PCI_IN_18, PCI_IN_19, PCI_IN_20, PCI_MM_01, PCI_MM_02, PCI_MM_03,
            PCI_MM_04, PCI_MM_05, PCI_MM_06, PCI_MM_07, PCI_MSI_1, PCI_MSI_2, PCI_LI_01,
            PCI_LI_02, PCI_LI_03, PCI_LI_04, PCI_SM_01, PCI_SM_02, PCI_IC_11, PCI_IC_12,
            PCI_IC_13, PCI_IC_14, PCI_IC_15, PCI_IC_16, PCI_IC_17, PCI_IC_18, PCI_IO_01,
            PCI_IEP_1, PCI_PP_01, PCI_PP_02, PCI_PP_03, PCI_PP_04, PCI_PP_05, PCI_PP_06,
            PCI_PAS_1, PCI_PTM_1, RE_PCI_1, RE_PCI_2, RE_CFG_1, RE_CFG_2, RE_CFG_3, RE_ORD_4,
            RE_PWR_2, RE_PWR_3, RE_ACS_1, RE_ACS_2, RE_ACS_3, RE_REG_1, RE_REG_2, RE_REG_3,
            RE_REC_1, RE_REC_2,
        ],
    ),
    (
        B_IEP_1,
        &[
            RI_CRS_1, RI_BAR_1, RI_BAR_2, RI_BAR_3, RI_INT_1, RI_ORD_1, RI_ORD_2, RI_ORD_3,
            RI_SMU_1, RI_SMU_2, RI_SMU_3, ITS_01, ITS_02, ITS_03, ITS_04, ITS_05, ITS_06,
            ITS_07, ITS_08, ITS_DEV_1, ITS_DEV_2, ITS_DEV_3, ITS_DEV_4, ITS_DEV_5, ITS_DEV_6,
            ITS_DEV_7, ITS_DEV_8, ITS_DEV_9, RI_RST_1, RI_PWR_1, PCI_IN_01, PCI_IN_02,
            PCI_IN_03, PCI_IN_04, PCI_IN_05, PCI_IN_06, PCI_IN_07, PCI_IN_08, PCI_IN_09,
            PCI_IN_10, PCI_IN_11, PCI_IN_12, PCI_IN_13, PCI_IN_14, PCI_IN_15, PCI_IN_16,
            PCI_IN_17, PCI_IN_18, PCI_IN_19, PCI_IN_20, PCI_MM_01, PCI_MM_02, PCI_MM_03,
            PCI_MM_04, PCI_MM_05, PCI_MM_06, PCI_MM_07, PCI_MSI_1, PCI_MSI_2, PCI_LI_01,
            PCI_LI_02, PCI_LI_03, PCI_LI_04, PCI_SM_01, PCI_SM_02, PCI_IC_11, PCI_IC_12,
            PCI_IC_13, PCI_IC_14, PCI_IC_15, PCI_IC_16, PCI_IC_17, PCI_IC_18, PCI_IO_01,
            PCI_IEP_1, PCI_PP_01, PCI_PP_02, PCI_PP_03, PCI_PP_04, PCI_PP_05, PCI_PP_06,
            PCI_PAS_1, PCI_PTM_1, IE_CFG_1, IE_CFG_2, IE_CFG_4, IE_ORD_4, IE_RST_2, IE_RST_3,
            IE_PWR_2, IE_PWR_3, IE_ACS_1, IE_ACS_2, IE_REG_1, IE_REG_2, IE_REG_3, IE_REG_4,
            IE_REG_5, IE_REG_6, IE_REG_7, IE_REG_8, IE_REG_9,
        ],
    ),
    (
        B_SMMU_21,
        &[
            SMMU_01, SMMU_02,
        ],
    ),
    (
        S_L3_01,
        &[
            B_PE_01, B_PE_02, B_PE_03, B_PE_04, B_PE_05, B_PE_06, B_PE_07, B_PE_08, B_PE_09,
            B_PE_10, B_PE_11, B_PE_12, B_PE_13, B_PE_14, B_PE_18, B_PE_19, B_PE_20, B_PE_21,
            B_PE_22, B_PE_23, B_PE_24, B_MEM_01, B_MEM_02, B_MEM_03, B_MEM_05, B_MEM_06,
            B_MEM_07, B_MEM_08, B_MEM_09, B_GIC_01, B_GIC_02, B_GIC_03, B_GIC_04, B_GIC_05,
            B_PPI_00, B_SMMU_01, B_SMMU_02, B_SMMU_06, B_SMMU_07, B_SMMU_08, B_SMMU_12,
            B_SMMU_16, B_SMMU_17, B_SMMU_18, B_SMMU_19, SMMU_01, SMMU_02, B_TIME_01, B_TIME_02,
            B_TIME_03, B_TIME_04, B_TIME_05, B_TIME_06, B_TIME_07, B_TIME_08, B_TIME_09,
            B_TIME_10, B_WAK_01, B_WAK_02, B_WAK_03, B_WAK_04, B_WAK_05, B_WAK_06, B_WAK_07,
            B_WAK_08, B_WAK_10, B_WAK_11, B_WD_01, B_WD_02, B_WD_03, B_WD_04, B_WD_05,
            B_PER_01, B_PER_02, B_PER_03, B_PER_04, B_PER_05, B_PER_06, B_PER_07, B_PER_09,
            B_PER_10, B_PER_11, B_PER_12, PCI_IN_01, PCI_IN_02, PCI_IN_03, PCI_IN_04,
            PCI_IN_05, PCI_IN_06, PCI_IN_07, PCI_IN_08, PCI_IN_09, PCI_IN_10, PCI_IN_11,
            PCI_IN_12, PCI_IN_13, PCI_IN_14, PCI_IN_15, PCI_IN_16, PCI_IN_17, PCI_IN_18,
            PCI_IN_19, PCI_IN_20, PCI_MM_01, PCI_MM_02, PCI_MM_03, PCI_MM_04, PCI_MM_05,
            PCI_MM_06, PCI_MM_07, PCI_MSI_1, PCI_MSI_2, PCI_LI_01, PCI_LI_02, PCI_LI_03,
            PCI_LI_04, PCI_SM_01, PCI_SM_02, PCI_IC_11, PCI_IC_12, PCI_IC_13, PCI_IC_14,
            PCI_IC_15, PCI_IC_16, PCI_IC_17, PCI_IC_18, PCI_IO_01, PCI_IEP_1, PCI_PP_01,
            PCI_PP_02, PCI_PP_03, PCI_PP_04, PCI_PP_05, PCI_PP_06, PCI_PAS_1, PCI_PTM_1,
        ],
    ),
    (
        S_L3PR_01,
        &[
            B_PER_05,
        ],
    ),
    (
        S_L3WD_01,
        &[
            B_WD_01, B_WD_02, B_WD_03, B_WD_04, B_WD_05,
        ],
    ),
    (
        S_L6PCI_1,
        &[
            RI_CRS_1, RI_BAR_1, RI_BAR_2, RI_BAR_3, RI_INT_1, RI_ORD_1, RI_ORD_2, RI_ORD_3,
            RI_SMU_1, RI_SMU_2, RI_SMU_3, ITS_01, ITS_02, ITS_03, ITS_04, ITS_05, ITS_06,
            ITS_07, ITS_08, ITS_DEV_1, ITS_DEV_2, ITS_DEV_3, ITS_DEV_4, ITS_DEV_5, ITS_DEV_6,
            ITS_DEV_7, ITS_DEV_8, ITS_DEV_9, RI_RST_1, RI_PWR_1, PCI_IN_01, PCI_IN_02,
            PCI_IN_03, PCI_IN_04, PCI_IN_05, PCI_IN_06, PCI_IN_07, PCI_IN_08, PCI_IN_09,
            PCI_IN_10, PCI_IN_11, PCI_IN_12, PCI_IN_13, PCI_IN_14, PCI_IN_15, PCI_IN_16,
            PCI_IN_17, PCI_IN_18, PCI_IN_19, PCI_IN_20, PCI_MM_01, PCI_MM_02, PCI_MM_03,
            PCI_MM_04, PCI_MM_05, PCI_MM_06, PCI_MM_07, PCI_MSI_1, PCI_MSI_2, PCI_LI_01,
            PCI_LI_02, PCI_LI_03, PCI_LI_04, PCI_SM_01, PCI_SM_02, PCI_IC_11, PCI_IC_12,
            PCI_IC_13, PCI_IC_14, PCI_IC_15, PCI_IC_16, PCI_IC_17, PCI_IC_18, PCI_IO_01,
            PCI_IEP_1, PCI_PP_01, PCI_PP_02, PCI_PP_03, PCI_PP_04, PCI_PP_05, PCI_PP_06,
            PCI_PAS_1, PCI_PTM_1, RE_PCI_1, RE_PCI_2, RE_CFG_1, RE_CFG_2, RE_CFG_3, RE_ORD_4,
            RE_PWR_2, RE_PWR_3, RE_ACS_1, RE_ACS_2, RE_ACS_3, RE_REG_1, RE_REG_2, RE_REG_3,
            RE_REC_1, RE_REC_2, IE_CFG_1, IE_CFG_2, IE_CFG_4, IE_ORD_4, IE_RST_2, IE_RST_3,
            IE_PWR_2, IE_PWR_3, IE_ACS_1, IE_ACS_2, IE_REG_1, IE_REG_2, IE_REG_3, IE_REG_4,
            IE_REG_5, IE_REG_6, IE_REG_7, IE_REG_8, IE_REG_9,
        ],
    ),
    (
        S_L6PE_01,
        &[
            B_SEC_01, B_SEC_02, B_SEC_03, B_SEC_04, B_SEC_05,
        ],
    ),
    (
        SYS_RAS,
        &[
            RAS_01, RAS_02, RAS_03, RAS_04, RAS_05, RAS_06, RAS_07, RAS_08, RAS_10, RAS_11,
            RAS_12,
        ],
    ),
    (
        LVQBC,
        &[
            ZVDJG, RKLPK,
        ],
    ),
    (
        P_L1_01,
        &[
            B_PE_01, B_PE_02, B_PE_03, B_PE_04, B_PE_05, B_PE_06, B_PE_07, B_PE_08, B_PE_09,
            B_PE_10, B_PE_11, B_PE_12, B_PE_13, B_PE_14, B_PE_18, B_PE_19, B_PE_20, B_PE_21,
            B_PE_22, B_PE_23, B_PE_24, B_MEM_01, B_MEM_02, B_MEM_03, B_MEM_05, B_MEM_06,
            B_MEM_07, B_MEM_08, B_MEM_09, B_GIC_01, B_GIC_02, B_GIC_03, B_GIC_04, B_GIC_05,
            B_PPI_00, B_SMMU_01, B_SMMU_02, B_SMMU_06, B_SMMU_07, B_SMMU_08, B_SMMU_12,
            B_SMMU_16, B_SMMU_17, B_SMMU_18, B_SMMU_19, SMMU_01, SMMU_02, B_TIME_01, B_TIME_02,
            B_TIME_03, B_TIME_04, B_TIME_05, B_TIME_06, B_TIME_07, B_TIME_08, B_TIME_09,
            B_TIME_10, B_WAK_01, B_WAK_02, B_WAK_03, B_WAK_04, B_WAK_05, B_WAK_06, B_WAK_07,
            B_WAK_08, B_WAK_10, B_WAK_11, B_WD_01, B_WD_02, B_WD_03, B_WD_04, B_WD_05,
            B_PER_01, B_PER_02, B_PER_03, B_PER_04, B_PER_05, B_PER_06, B_PER_07, B_PER_09,
            B_PER_10, B_PER_11, B_PER_12, PCI_IN_01, PCI_IN_02, PCI_IN_03, PCI_IN_04,
            PCI_IN_05, PCI_IN_06, PCI_IN_07, PCI_IN_08, PCI_IN_09, PCI_IN_10, PCI_IN_11,
            PCI_IN_12, PCI_IN_13, PCI_IN_14, PCI_IN_15, PCI_IN_16, PCI_IN_17, PCI_IN_18,
            PCI_IN_19, PCI_IN_20, PCI_MM_01, PCI_MM_02, PCI_MM_03, PCI_MM_04, PCI_MM_05,
            PCI_MM_06, PCI_MM_07, PCI_MSI_1, PCI_MSI_2, PCI_LI_01, PCI_LI_02, PCI_LI_03,
            PCI_LI_04, PCI_SM_01, PCI_SM_02, PCI_IC_11, PCI_IC_12, PCI_IC_13, PCI_IC_14,
            PCI_IC_15, PCI_IC_16, PCI_IC_17, PCI_IC_18, PCI_IO_01, PCI_IEP_1, PCI_PP_01,
            PCI_PP_02, PCI_PP_03, PCI_PP_04, PCI_PP_05, PCI_PP_06, PCI_PAS_1, PCI_PTM_1,
        ],
    ),
    (
        P_L2WD_01,
        &[
            B_WD_01, B_WD_02, B_WD_03, B_WD_04, B_WD_05,
        ],
    ),
    (
        P_L1MM_01,
        &[
            S_L3MM_01, S_L3MM_02,
        ],
    ),
    (
        V_L1PE_01,
        &[
            B_PE_01, B_PE_02, B_PE_03, B_PE_04, B_PE_05, B_PE_06, B_PE_07, B_PE_08, B_PE_10,
            B_PE_13, B_PE_14,
        ],
    ),
    (
        V_L1MM_01,
        &[
            B_MEM_01, B_MEM_02, B_MEM_04, B_MEM_05, B_MEM_07,
        ],
    ),
    (
        V_L1GI_01,
        &[
            B_GIC_01, B_GIC_02, B_GIC_03, B_GIC_05,
        ],
    ),
    (
        V_L1SM_01,
        &[
            B_SMMU_01, B_SMMU_02, B_SMMU_06, B_SMMU_07, B_SMMU_12,
        ],
    ),
    (
        V_L1PR_01,
        &[
            B_PER_01, B_PER_02, B_PER_03, B_PER_04, B_PER_05, B_PER_06, B_PER_09, B_PER_10,
            B_PER_11, B_PER_12,
        ],
    ),
    (
        V_L1PR_02,
        &[
            PCI_IN_01, PCI_IN_02, PCI_IN_03, PCI_IN_04, PCI_IN_05, PCI_IN_06, PCI_IN_07,
            PCI_IN_08, PCI_IN_09, PCI_IN_10, PCI_IN_11, PCI_IN_12, PCI_IN_13, PCI_IN_14,
            PCI_IN_15, PCI_IN_16, PCI_IN_17, PCI_IN_18, PCI_IN_19, PCI_IN_20, PCI_MM_01,
            PCI_MM_03, PCI_MM_04, PCI_MM_05, PCI_MM_06, PCI_MM_07, PCI_MSI_1, PCI_MSI_2,
            PCI_LI_01, PCI_LI_02, PCI_LI_03, PCI_LI_04, PCI_SM_01, PCI_SM_02, PCI_IC_11,
            PCI_IC_12, PCI_IC_13, PCI_IC_14, PCI_IC_15, PCI_IC_16, PCI_IC_17, PCI_IC_18,
            PCI_IO_01, PCI_IEP_1, PCI_PP_01, PCI_PP_02, PCI_PP_03, PCI_PP_04, PCI_PP_05,
            PCI_PP_06, PCI_PAS_1, PCI_PTM_1,
        ],
    ),
];
