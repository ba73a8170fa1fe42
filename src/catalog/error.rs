// ==========================================
// 表面处理工艺规则引擎 - 目录装载错误类型
// ==========================================
// 静态规则表的数据完整性问题属于编程错误:
// 目录装载期校验, 快速失败 (进程不得带病启动), 不在查询期暴露
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 目录装载/校验错误
#[derive(Error, Debug)]
pub enum CatalogError {
    // ===== 数据解析错误 =====
    #[error("规则组 {group} 解析失败: {source}")]
    ParseFailure {
        group: String,
        #[source]
        source: serde_json::Error,
    },

    // ===== 数据完整性错误 =====
    #[error("规则 ID 重复: {id}")]
    DuplicateId { id: String },

    #[error("规则 {id} 的工艺指令文本为空")]
    EmptyOperationText { id: String },

    #[error("ENP 规则 {id} 缺少 enp_type 或沉积速率区间")]
    IncompleteEnpRule { id: String },

    #[error("ENP 规则 {id} 的沉积速率区间非法: min={min}, max={max}")]
    InvalidRateRange { id: String, min: f64, max: f64 },

    // ===== 编排锚点缺失 =====
    #[error("工序目录必须恰好包含一条 {process_type} 标准工序, 实际 {count} 条")]
    BookendCardinality { process_type: String, count: usize },
}

/// 目录层统一返回类型
pub type CatalogResult<T> = Result<T, CatalogError>;
