// ==========================================
// 表面处理工艺规则引擎 - 静态规则数据装载
// ==========================================
// 规则表为声明式数据 (data/ 下的 JSON), 编译期嵌入;
// 规则组提供者为固定显式清单, 不做运行期存在性探测。
// 规则记录运行期零增删改: 目录装载后只读
// ==========================================

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::domain::rule::{OperationRule, ProcessRule};
use serde::de::DeserializeOwned;

// ==========================================
// 规则组清单 (固定显式列表)
// ==========================================

/// 精简工艺规则组 (建议查询用)
const PROCESS_RULE_GROUPS: &[(&str, &str)] = &[
    (
        "processes/anodising",
        include_str!("../../data/processes/anodising.json"),
    ),
    (
        "processes/conversion_sealing",
        include_str!("../../data/processes/conversion_sealing.json"),
    ),
];

/// 扩展工序规则组 (工序编排用)
const OPERATION_RULE_GROUPS: &[(&str, &str)] = &[
    (
        "operations/anodising",
        include_str!("../../data/operations/anodising.json"),
    ),
    (
        "operations/enp",
        include_str!("../../data/operations/enp.json"),
    ),
    (
        "operations/conversion_sealing",
        include_str!("../../data/operations/conversion_sealing.json"),
    ),
    (
        "operations/auxiliary",
        include_str!("../../data/operations/auxiliary.json"),
    ),
    (
        "operations/support",
        include_str!("../../data/operations/support.json"),
    ),
];

// ==========================================
// 装载入口
// ==========================================

/// 装载全部精简工艺规则 (按组清单顺序拼接)
pub fn load_process_rules() -> CatalogResult<Vec<ProcessRule>> {
    concat_groups(PROCESS_RULE_GROUPS)
}

/// 装载全部扩展工序规则 (按组清单顺序拼接)
pub fn load_operation_rules() -> CatalogResult<Vec<OperationRule>> {
    concat_groups(OPERATION_RULE_GROUPS)
}

/// 解析并拼接规则组; 任一组解析失败即整体失败
fn concat_groups<T: DeserializeOwned>(groups: &[(&str, &str)]) -> CatalogResult<Vec<T>> {
    let mut rules = Vec::new();
    for (group, raw) in groups {
        let mut parsed: Vec<T> =
            serde_json::from_str(raw).map_err(|source| CatalogError::ParseFailure {
                group: (*group).to_string(),
                source,
            })?;
        tracing::debug!(group, count = parsed.len(), "规则组解析完成");
        rules.append(&mut parsed);
    }
    Ok(rules)
}
