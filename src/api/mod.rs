// ==========================================
// 表面处理工艺规则引擎 - API 层
// ==========================================
// 职责: 提供业务 API 接口, 供 HTTP 控制器/文档生成器调用
// ==========================================

pub mod error;
pub mod treatment_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use treatment_api::TreatmentApi;
