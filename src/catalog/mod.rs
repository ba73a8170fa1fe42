// ==========================================
// 表面处理工艺规则引擎 - 规则目录层
// ==========================================
// 职责: 静态规则表装载/校验/聚合, 提供只读查询
// 红线: 目录装载后不可变; 带病数据装载期即失败
// ==========================================

pub mod data;
pub mod error;
pub mod operation_catalog;
pub mod process_catalog;

// 重导出核心类型
pub use error::{CatalogError, CatalogResult};
pub use operation_catalog::OperationCatalog;
pub use process_catalog::ProcessCatalog;
