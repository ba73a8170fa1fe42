// ==========================================
// 表面处理工艺规则引擎 - 领域类型定义
// ==========================================
// 职责: 工艺类型/阳极化等级/化学镀镍类型等枚举
// 序列化格式: snake_case (与规则数据表一致)
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 工艺类型 (Process Type)
// ==========================================
// 主工序: 客户直接选择的处理工艺
// 辅助工序: 可查询但不进入选项枚举
// 结构工序: 由系统自动插入, 不参与匹配查询
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessType {
    // ===== 主工序 =====
    HardAnodising,            // 硬质阳极氧化
    ChromicAnodising,         // 铬酸阳极氧化
    ElectrolessNickelPlating, // 化学镀镍 (ENP)
    ChemicalConversion,       // 化学转化膜
    Sealing,                  // 封孔
    DichromateSealing,        // 重铬酸盐封孔

    // ===== 辅助工序 (可查询, 不进选项枚举) =====
    Stripping,                  // 退除旧膜层
    Masking,                    // 保护遮蔽
    MaskingCheck,               // 遮蔽检查
    LocalTreatment,             // 局部处理
    Dye,                        // 染色
    Ptfe,                       // PTFE 浸渍
    WaterBreakTest,             // 水膜破裂试验
    Verification,               // 膜厚验证
    Ocv,                        // 开路电位测试
    EnpHeatTreatment,           // ENP 热处理 (硬化)
    EnpHydrogenDeEmbrittlement, // ENP 除氢处理

    // ===== 结构工序 (自动插入) =====
    ContractReview,  // 合同评审
    Pack,            // 包装
    Rinse,           // 水洗
    Degrease,        // 除油
    Pretreatment,    // 前处理 (除氧化皮)
    Etch,            // 碱蚀
    Inspection,      // 过程检验
    FinalInspection, // 终检
    Jig,             // 装挂
    Unjig,           // 下挂
}

impl ProcessType {
    /// 自动插入工序集合 (固定集)
    ///
    /// 面向最终用户的选项枚举接口 (可选工艺/合金/等级/膜厚/ENP类型)
    /// 必须排除该集合; 工序编排必须包含该集合。
    pub fn is_auto_inserted(&self) -> bool {
        use ProcessType::*;
        matches!(
            self,
            Rinse
                | Degrease
                | ContractReview
                | Pack
                | Inspection
                | FinalInspection
                | Masking
                | MaskingCheck
                | Pretreatment
                | Etch
                | WaterBreakTest
                | Verification
                | Ocv
                | Dye
                | Ptfe
                | EnpHeatTreatment
                | EnpHydrogenDeEmbrittlement
                | Stripping
                | LocalTreatment
                | Jig
                | Unjig
        )
    }

    /// 结构工序集合
    ///
    /// 结构工序只由编排器插入, 不参与工序匹配查询;
    /// 辅助工序 (退膜/遮蔽/热处理/试验等) 仍可被匹配查询命中,
    /// 否则等级豁免规则 (铬酸阳极氧化/退膜) 无法生效。
    pub fn is_structural(&self) -> bool {
        use ProcessType::*;
        matches!(
            self,
            ContractReview
                | Pack
                | Rinse
                | Degrease
                | Pretreatment
                | Etch
                | Inspection
                | FinalInspection
                | Jig
                | Unjig
        )
    }

    /// 阳极化等级豁免工艺 (匹配时不做等级过滤)
    pub fn is_class_exempt(&self) -> bool {
        matches!(self, ProcessType::ChromicAnodising | ProcessType::Stripping)
    }

    /// 膜厚豁免工艺 (工序匹配时不做膜厚过滤)
    pub fn is_thickness_exempt(&self) -> bool {
        use ProcessType::*;
        matches!(
            self,
            ChemicalConversion
                | ElectrolessNickelPlating
                | ChromicAnodising
                | Stripping
                | Masking
                | MaskingCheck
                | Sealing
                | DichromateSealing
                | WaterBreakTest
                | Verification
                | Ocv
                | Dye
                | Ptfe
                | EnpHeatTreatment
                | EnpHydrogenDeEmbrittlement
                | LocalTreatment
        )
    }

    /// 湿法工艺分类 (供辅助工序插入器消费)
    pub fn category(&self) -> ProcessCategory {
        use ProcessType::*;
        match self {
            HardAnodising | ChromicAnodising | Ocv => ProcessCategory::Electrochemical,
            Pretreatment | Etch | Degrease | Stripping => ProcessCategory::ChemicalPretreatment,
            ChemicalConversion | LocalTreatment => ProcessCategory::ChemicalConversion,
            Rinse | WaterBreakTest => ProcessCategory::Cleaning,
            Sealing | DichromateSealing | Dye | Ptfe => ProcessCategory::Sealing,
            ElectrolessNickelPlating => ProcessCategory::RateDeposition,
            EnpHeatTreatment | EnpHydrogenDeEmbrittlement => ProcessCategory::HeatTreatment,
            ContractReview | Pack | Inspection | FinalInspection | Masking | MaskingCheck | Jig
            | Unjig | Verification => ProcessCategory::Structural,
        }
    }

    /// snake_case 标记 (与数据表/i18n 键一致)
    pub fn as_str(&self) -> &'static str {
        use ProcessType::*;
        match self {
            HardAnodising => "hard_anodising",
            ChromicAnodising => "chromic_anodising",
            ElectrolessNickelPlating => "electroless_nickel_plating",
            ChemicalConversion => "chemical_conversion",
            Sealing => "sealing",
            DichromateSealing => "dichromate_sealing",
            Stripping => "stripping",
            Masking => "masking",
            MaskingCheck => "masking_check",
            LocalTreatment => "local_treatment",
            Dye => "dye",
            Ptfe => "ptfe",
            WaterBreakTest => "water_break_test",
            Verification => "verification",
            Ocv => "ocv",
            EnpHeatTreatment => "enp_heat_treatment",
            EnpHydrogenDeEmbrittlement => "enp_hydrogen_de_embrittlement",
            ContractReview => "contract_review",
            Pack => "pack",
            Rinse => "rinse",
            Degrease => "degrease",
            Pretreatment => "pretreatment",
            Etch => "etch",
            Inspection => "inspection",
            FinalInspection => "final_inspection",
            Jig => "jig",
            Unjig => "unjig",
        }
    }
}

impl fmt::Display for ProcessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 湿法工艺分类 (Process Category)
// ==========================================
// 辅助工序插入器 (独立协作组件) 的分类输入
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessCategory {
    Electrochemical,      // 电化学处理
    ChemicalPretreatment, // 化学前处理
    ChemicalConversion,   // 化学转化
    Cleaning,             // 清洗
    Sealing,              // 封孔/后处理
    RateDeposition,       // 速率沉积 (化学镀)
    HeatTreatment,        // 热处理
    Structural,           // 结构工序 (非湿法)
}

// ==========================================
// 阳极化等级 (Anodic Class)
// ==========================================
// class_1: 本色 (不染色); class_2: 染色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnodicClass {
    #[serde(rename = "class_1")]
    Class1,
    #[serde(rename = "class_2")]
    Class2,
}

impl AnodicClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnodicClass::Class1 => "class_1",
            AnodicClass::Class2 => "class_2",
        }
    }
}

impl fmt::Display for AnodicClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 化学镀镍类型 (ENP Type)
// ==========================================
// 按磷含量区分, 决定镀层硬度/耐蚀性与沉积速率区间
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnpType {
    HighPhosphorus,
    MediumPhosphorus,
    LowPhosphorus,
}

impl EnpType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnpType::HighPhosphorus => "high_phosphorus",
            EnpType::MediumPhosphorus => "medium_phosphorus",
            EnpType::LowPhosphorus => "low_phosphorus",
        }
    }
}

impl fmt::Display for EnpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// 子类标记 (Sub Kind)
// ==========================================
// 数据编制期给出的结构化子类字段, 替代运行期对 id 的正则分派;
// 命中该集合的工序规则不参与膜厚过滤
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubKind {
    Mask,
    MaskingCheck,
    Strip,
    StripMasking,
}

impl fmt::Display for SubKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubKind::Mask => write!(f, "mask"),
            SubKind::MaskingCheck => write!(f, "masking_check"),
            SubKind::Strip => write!(f, "strip"),
            SubKind::StripMasking => write!(f, "strip_masking"),
        }
    }
}

// ==========================================
// 合金通配哨兵 (Alloy Sentinels)
// ==========================================
// 规则的 alloys 含任一哨兵值时对所有合金适用
pub const ALLOY_SENTINEL_GENERAL: &str = "general";
pub const ALLOY_SENTINEL_ALL: &str = "all_alloys";

/// 判断合金标识是否为通配哨兵
pub fn is_alloy_sentinel(alloy: &str) -> bool {
    alloy.eq_ignore_ascii_case(ALLOY_SENTINEL_GENERAL)
        || alloy.eq_ignore_ascii_case(ALLOY_SENTINEL_ALL)
}
