// ==========================================
// 表面处理工艺规则引擎 - API 层错误类型
// ==========================================
// 查询路径不产生错误 (零命中/未知 id 都是正常状态);
// 错误仅来自目录装载与调用方输入形态问题
// 工具: thiserror 派生宏
// ==========================================

use crate::catalog::CatalogError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("目录装载失败: {0}")]
    Catalog(#[from] CatalogError),

    #[error("无效输入: {0}")]
    InvalidInput(String),
}

/// API 层统一返回类型
pub type ApiResult<T> = Result<T, ApiError>;
