// ==========================================
// 表面处理工艺规则引擎 - 引擎层
// ==========================================
// 职责: 纯同步业务规则 (匹配/插值/编排/标签),
//       不做网络与磁盘 I/O, 不持有可变状态
// ==========================================

pub mod display_name;
pub mod matcher;
pub mod plating_time;
pub mod sequence;

// 重导出核心引擎
pub use display_name::DisplayNameResolver;
pub use matcher::{MatcherConfig, RuleMatcher};
pub use plating_time::PlatingTimeInterpolator;
pub use sequence::SequenceAssembler;
