// ==========================================
// 表面处理工艺规则引擎 - 精简工艺目录
// ==========================================
// 职责: 聚合全部精简规则记录, 供膜厚/合金建议查询
// 生命周期: 显式构造一次, 装载后只读, Arc 共享发布
// ==========================================

use crate::catalog::data;
use crate::catalog::error::{CatalogError, CatalogResult};
use crate::domain::rule::ProcessRule;
use std::collections::HashSet;

/// 精简工艺目录 (建议层, ±5µm 宽容差的数据源)
#[derive(Debug)]
pub struct ProcessCatalog {
    rules: Vec<ProcessRule>,
}

impl ProcessCatalog {
    /// 从嵌入的静态规则表构造目录
    pub fn build() -> CatalogResult<Self> {
        let catalog = Self::from_rules(data::load_process_rules()?)?;
        tracing::info!(count = catalog.len(), "精简工艺目录装载完成");
        Ok(catalog)
    }

    /// 从给定规则集构造目录 (测试/外部注入)
    ///
    /// 装载期校验: id 唯一, 指令文本非空。违例即失败, 不得带病启动。
    /// 归一化: 目标膜厚 0 与缺省同义 (膜厚无关规则), 统一归一为缺省,
    /// 下游匹配器只处理缺省一种形态。
    pub fn from_rules(mut rules: Vec<ProcessRule>) -> CatalogResult<Self> {
        let mut seen: HashSet<&str> = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: rule.id.clone(),
                });
            }
            if rule.operation_text.trim().is_empty() {
                return Err(CatalogError::EmptyOperationText {
                    id: rule.id.clone(),
                });
            }
        }
        for rule in &mut rules {
            rule.target_thickness_um = rule.target_thickness_um.filter(|t| *t > 0.0);
        }
        Ok(Self { rules })
    }

    /// 全部规则记录
    pub fn all(&self) -> &[ProcessRule] {
        &self.rules
    }

    /// 按 id 精确查找; 未命中返回 None, 不视为错误
    pub fn find(&self, id: &str) -> Option<&ProcessRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
