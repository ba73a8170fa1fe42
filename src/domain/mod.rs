// ==========================================
// 表面处理工艺规则引擎 - 领域层
// ==========================================
// 职责: 实体与类型定义, 不含业务规则
// ==========================================

pub mod rule;
pub mod types;

// 重导出核心类型
pub use rule::{
    DepositionRateRange, OperationRule, PlatingTime, ProcessRule, Requirement, SequenceStep,
};
pub use types::{
    is_alloy_sentinel, AnodicClass, EnpType, ProcessCategory, ProcessType, SubKind,
    ALLOY_SENTINEL_ALL, ALLOY_SENTINEL_GENERAL,
};
