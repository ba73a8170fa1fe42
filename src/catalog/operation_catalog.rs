// ==========================================
// 表面处理工艺规则引擎 - 扩展工序目录
// ==========================================
// 职责: 聚合全部扩展规则记录, 驱动完整工序编排
// 缓存纪律: 无膜厚参数的全量目录装载一次后只读复用;
//           带膜厚的 ENP 插值视图每次请求新鲜装配, 永不缓存
//           (并发请求携带不同膜厚时不得互相观察到对方的插值结果)
// ==========================================

use crate::catalog::data;
use crate::catalog::error::{CatalogError, CatalogResult};
use crate::domain::rule::OperationRule;
use crate::domain::types::ProcessType;
use std::collections::HashSet;

/// 扩展工序目录 (编排层, ±2.5µm 严容差的数据源)
#[derive(Debug)]
pub struct OperationCatalog {
    rules: Vec<OperationRule>,
    /// 编排锚点下标 (装载期校验唯一性)
    contract_review_idx: usize,
    pack_idx: usize,
}

impl OperationCatalog {
    /// 从嵌入的静态规则表构造目录
    pub fn build() -> CatalogResult<Self> {
        let catalog = Self::from_rules(data::load_operation_rules()?)?;
        tracing::info!(count = catalog.len(), "扩展工序目录装载完成");
        Ok(catalog)
    }

    /// 从给定规则集构造目录 (测试/外部注入)
    ///
    /// 装载期校验 (快速失败):
    /// - id 唯一
    /// - 指令文本非空
    /// - ENP 规则必须携带 enp_type 与合法沉积速率区间 (0 < min ≤ max)
    /// - 恰好各一条 contract_review / pack 标准工序 (编排锚点)
    ///
    /// 归一化: 目标膜厚 0 与缺省同义 (膜厚无关规则), 统一归一为缺省。
    pub fn from_rules(mut rules: Vec<OperationRule>) -> CatalogResult<Self> {
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
            if rule.is_enp() {
                let range = match (rule.enp_type, rule.deposition_rate_range) {
                    (Some(_), Some(range)) => range,
                    _ => {
                        return Err(CatalogError::IncompleteEnpRule {
                            id: rule.id.clone(),
                        })
                    }
                };
                if range.min_um_per_hour <= 0.0 || range.max_um_per_hour < range.min_um_per_hour {
                    return Err(CatalogError::InvalidRateRange {
                        id: rule.id.clone(),
                        min: range.min_um_per_hour,
                        max: range.max_um_per_hour,
                    });
                }
            }
        }

        for rule in &mut rules {
            rule.target_thickness_um = rule.target_thickness_um.filter(|t| *t > 0.0);
        }

        let contract_review_idx = Self::sole_index(&rules, ProcessType::ContractReview)?;
        let pack_idx = Self::sole_index(&rules, ProcessType::Pack)?;

        Ok(Self {
            rules,
            contract_review_idx,
            pack_idx,
        })
    }

    /// 定位唯一的编排锚点规则
    fn sole_index(rules: &[OperationRule], process_type: ProcessType) -> CatalogResult<usize> {
        let mut found: Vec<usize> = Vec::new();
        for (idx, rule) in rules.iter().enumerate() {
            if rule.process_type == process_type {
                found.push(idx);
            }
        }
        if found.len() != 1 {
            return Err(CatalogError::BookendCardinality {
                process_type: process_type.to_string(),
                count: found.len(),
            });
        }
        Ok(found[0])
    }

    /// 全部规则记录 (无膜厚参数, 可安全复用的缓存视图)
    pub fn all(&self) -> &[OperationRule] {
        &self.rules
    }

    /// 按目标膜厚装配的全量视图
    ///
    /// ENP 规则携带按该膜厚新鲜插值的镀覆时间; 每次请求独立分配,
    /// 不回写目录本体, 因此并发请求互不干扰。
    pub fn all_with_thickness(&self, target_thickness_um: f64) -> Vec<OperationRule> {
        self.rules
            .iter()
            .map(|rule| {
                let mut rule = rule.clone();
                if rule.is_enp() {
                    if let Some(range) = rule.deposition_rate_range {
                        rule.time = range.time_for(target_thickness_um);
                    }
                }
                rule
            })
            .collect()
    }

    /// 按 id 精确查找; 未命中返回 None, 不视为错误
    pub fn find(&self, id: &str) -> Option<&OperationRule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// 合同评审标准工序 (序列头锚点)
    pub fn contract_review(&self) -> &OperationRule {
        &self.rules[self.contract_review_idx]
    }

    /// 包装标准工序 (序列尾锚点)
    pub fn pack(&self) -> &OperationRule {
        &self.rules[self.pack_idx]
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    // ==========================================
    // 选项枚举查询 (UI 选项填充)
    // ==========================================
    // 全部排除自动插入工序; 等级/膜厚枚举额外排除豁免工艺

    /// 可选工艺类型 (排除自动插入集)
    pub fn available_process_types(&self) -> Vec<ProcessType> {
        let mut types: Vec<ProcessType> = self
            .rules
            .iter()
            .map(|r| r.process_type)
            .filter(|t| !t.is_auto_inserted())
            .collect();
        types.sort_by_key(|t| t.as_str());
        types.dedup();
        types
    }

    /// 可选合金 (排除通配哨兵)
    pub fn available_alloys(&self) -> Vec<String> {
        let mut alloys: Vec<String> = self
            .rules
            .iter()
            .filter(|r| !r.process_type.is_auto_inserted())
            .flat_map(|r| r.alloys.iter())
            .filter(|a| !crate::domain::types::is_alloy_sentinel(a))
            .cloned()
            .collect();
        alloys.sort();
        alloys.dedup();
        alloys
    }

    /// 可选阳极化等级 (额外排除等级豁免工艺)
    pub fn available_anodic_classes(&self) -> Vec<crate::domain::types::AnodicClass> {
        let mut classes: Vec<_> = self
            .rules
            .iter()
            .filter(|r| !r.process_type.is_auto_inserted() && !r.process_type.is_class_exempt())
            .flat_map(|r| r.anodic_classes.iter().copied())
            .collect();
        classes.sort();
        classes.dedup();
        classes
    }

    /// 可选目标膜厚 (额外排除膜厚豁免工艺与零值)
    pub fn available_thicknesses(&self) -> Vec<f64> {
        let mut thicknesses: Vec<f64> = self
            .rules
            .iter()
            .filter(|r| !r.process_type.is_auto_inserted() && !r.process_type.is_thickness_exempt())
            .filter_map(|r| r.target_thickness_um)
            .filter(|t| *t > 0.0)
            .collect();
        thicknesses.sort_by(f64::total_cmp);
        thicknesses.dedup();
        thicknesses
    }

    /// 可选 ENP 类型
    pub fn available_enp_types(&self) -> Vec<crate::domain::types::EnpType> {
        let mut types: Vec<_> = self
            .rules
            .iter()
            .filter(|r| r.is_enp())
            .filter_map(|r| r.enp_type)
            .collect();
        types.sort();
        types.dedup();
        types
    }
}
