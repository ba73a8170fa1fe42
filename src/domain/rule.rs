// ==========================================
// 表面处理工艺规则引擎 - 规则记录定义
// ==========================================
// 规则记录 = 物理上有效的一种 (合金 × 工艺 × 目标膜厚 × 等级 × 槽位) 组合
// 两种形态共享语义: Process = 精简形态 (膜厚/合金建议用),
//                  Operation = 扩展形态 (完整工序编排用)
// 规则记录构造后不可变; 目录装载后只读
// ==========================================

use crate::domain::types::{is_alloy_sentinel, AnodicClass, EnpType, ProcessType, SubKind};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 沉积速率区间 (Deposition Rate Range)
// ==========================================
// 化学镀镍专用: 镀液在受控温度/pH 下的标定沉积速率, µm/h
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepositionRateRange {
    pub min_um_per_hour: f64,
    pub max_um_per_hour: f64,
}

impl DepositionRateRange {
    /// 按目标膜厚插值镀覆时间
    ///
    /// 最乐观 = 膜厚/最大速率, 最保守 = 膜厚/最小速率。
    /// 膜厚或速率非正时返回 None (不适用, 非错误)。
    pub fn time_for(&self, target_thickness_um: f64) -> Option<PlatingTime> {
        if target_thickness_um <= 0.0 || self.min_um_per_hour <= 0.0 || self.max_um_per_hour <= 0.0
        {
            return None;
        }
        Some(PlatingTime {
            min_hours: target_thickness_um / self.max_um_per_hour,
            max_hours: target_thickness_um / self.min_um_per_hour,
        })
    }
}

// ==========================================
// 镀覆时间估计 (Plating Time)
// ==========================================
// 最乐观/最保守一对估计值; 由插值器按请求膜厚计算,
// 或在规则数据中显式标定
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatingTime {
    pub min_hours: f64,
    pub max_hours: f64,
}

impl PlatingTime {
    /// 最乐观时长 (最大速率)
    pub fn min_duration(&self) -> Duration {
        Duration::seconds((self.min_hours * 3600.0).round() as i64)
    }

    /// 最保守时长 (最小速率)
    pub fn max_duration(&self) -> Duration {
        Duration::seconds((self.max_hours * 3600.0).round() as i64)
    }

    /// 代表值 (区间中点), 供只能展示单值的界面使用
    pub fn representative_hours(&self) -> f64 {
        (self.min_hours + self.max_hours) / 2.0
    }
}

impl fmt::Display for PlatingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}-{:.1} h", self.min_hours, self.max_hours)
    }
}

// ==========================================
// 工艺规则 - 精简形态 (Process Rule)
// ==========================================
/// 精简规则记录, 供膜厚/合金建议查询使用 (±5µm 宽容差)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRule {
    /// 稳定唯一标识, 无专用标签时兼作展示名的回退来源
    pub id: String,
    /// 适用合金集合; 含哨兵值 general/all_alloys 时对所有合金适用
    pub alloys: Vec<String>,
    /// 工艺类型
    pub process_type: ProcessType,
    /// 支持的阳极化等级; 空集表示任意等级均可
    #[serde(default)]
    pub anodic_classes: Vec<AnodicClass>,
    /// 标定目标膜厚 (µm); None 表示与膜厚无关
    #[serde(default)]
    pub target_thickness_um: Option<f64>,
    /// 可执行该规则的槽位编号 (仅用于指令文本, 不参与匹配)
    #[serde(default)]
    pub vat_numbers: Vec<String>,
    /// 工艺指令原文 (电压/时长/槽号), 权威制造文本, 引擎不得改写
    pub operation_text: String,
}

impl ProcessRule {
    /// 规则是否对所有合金适用
    pub fn is_alloy_agnostic(&self) -> bool {
        self.alloys.iter().any(|a| is_alloy_sentinel(a))
    }
}

// ==========================================
// 工艺规则 - 扩展形态 (Operation Rule)
// ==========================================
/// 扩展规则记录, 驱动工序编排与制造文档文本 (±2.5µm 严容差)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRule {
    pub id: String,
    pub alloys: Vec<String>,
    pub process_type: ProcessType,
    /// 结构化子类标记 (遮蔽/退膜类), 数据编制期给定
    #[serde(default)]
    pub sub_kind: Option<SubKind>,
    #[serde(default)]
    pub anodic_classes: Vec<AnodicClass>,
    #[serde(default)]
    pub target_thickness_um: Option<f64>,
    #[serde(default)]
    pub vat_numbers: Vec<String>,
    pub operation_text: String,
    /// 补充技术规范 (标准号等)
    #[serde(default)]
    pub specifications: Option<String>,
    /// 编制期给定的展示名; 缺省时由 DisplayNameResolver 推导
    #[serde(default)]
    pub display_name: Option<String>,
    /// 化学镀镍类型 (仅 ENP 规则)
    #[serde(default)]
    pub enp_type: Option<EnpType>,
    /// 标定沉积速率区间 (仅 ENP 规则)
    #[serde(default)]
    pub deposition_rate_range: Option<DepositionRateRange>,
    /// 镀覆时间: 数据显式标定值, 或按请求膜厚的插值结果
    #[serde(default)]
    pub time: Option<PlatingTime>,
}

impl OperationRule {
    /// 规则是否对所有合金适用
    pub fn is_alloy_agnostic(&self) -> bool {
        self.alloys.iter().any(|a| is_alloy_sentinel(a))
    }

    /// 是否为化学镀镍规则 (走专用选择路径, 不参与常规膜厚过滤)
    pub fn is_enp(&self) -> bool {
        self.process_type == ProcessType::ElectrolessNickelPlating
    }
}

// ==========================================
// 匹配需求 (Requirement)
// ==========================================
/// 调用方提交的查询条件; 字段缺省即"该维度不约束"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    #[serde(default)]
    pub alloy: Option<String>,
    #[serde(default)]
    pub process_type: Option<ProcessType>,
    #[serde(default)]
    pub anodic_class: Option<AnodicClass>,
    #[serde(default)]
    pub target_thickness_um: Option<f64>,
    #[serde(default)]
    pub enp_type: Option<EnpType>,
}

impl Requirement {
    /// 常用构造: 合金 + 工艺类型
    pub fn of(alloy: impl Into<String>, process_type: ProcessType) -> Self {
        Self {
            alloy: Some(alloy.into()),
            process_type: Some(process_type),
            ..Self::default()
        }
    }

    pub fn with_anodic_class(mut self, class: AnodicClass) -> Self {
        self.anodic_class = Some(class);
        self
    }

    pub fn with_thickness(mut self, thickness_um: f64) -> Self {
        self.target_thickness_um = Some(thickness_um);
        self
    }

    pub fn with_enp_type(mut self, enp_type: EnpType) -> Self {
        self.enp_type = Some(enp_type);
        self
    }
}

// ==========================================
// 工序序列步骤 (Sequence Step)
// ==========================================
/// 编排器输出的单个制造步骤
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceStep {
    /// 展示标题 (DisplayNameResolver 产出)
    pub title: String,
    /// 工艺指令原文 (operation_text 原样)
    pub description: String,
    /// 所引用的规则记录
    pub rule: OperationRule,
}
