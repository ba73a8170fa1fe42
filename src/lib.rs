// ==========================================
// 表面处理工艺规则引擎 - 核心库
// ==========================================
// 系统定位: 业务管理系统 (订单/发货/对账为外部协作方) 的
//           工艺规则匹配与工序编排核心
// 职责: 规则目录装载/匹配/镀覆时间插值/工序序列编排/展示名解析
// 形态: 纯同步只读查询层, 目录装载后不可变, 无内部锁
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 目录层 - 静态规则表装载与只读查询
pub mod catalog;

// 引擎层 - 业务规则
pub mod engine;

// API 层 - 业务接口
pub mod api;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
