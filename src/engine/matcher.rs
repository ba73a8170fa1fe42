// ==========================================
// 表面处理工艺规则引擎 - 规则匹配器
// ==========================================
// 双容差带设计:
// - 建议查询 (精简目录): ±5µm 宽容差, 粗粒度咨询层
// - 工序检索 (扩展目录): ±2.5µm 严容差, 结果文本直接进入
//   制造文档, 错误的电压/时间曲线是正确性缺陷
// 缺失的需求字段一律视为"该维度不约束", 不视为错误;
// 零命中是正常业务状态, 返回空列表
// ==========================================

use crate::catalog::{OperationCatalog, ProcessCatalog};
use crate::domain::rule::{OperationRule, ProcessRule, Requirement};
use crate::domain::types::{is_alloy_sentinel, ProcessType};

// ==========================================
// 匹配容差配置
// ==========================================
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// 建议查询的膜厚容差 (µm, 含边界)
    pub suggest_thickness_tolerance_um: f64,
    /// 工序检索的膜厚容差 (µm, 含边界)
    pub operation_thickness_tolerance_um: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            suggest_thickness_tolerance_um: 5.0,
            operation_thickness_tolerance_um: 2.5,
        }
    }
}

// ==========================================
// RuleMatcher - 规则匹配器
// ==========================================
pub struct RuleMatcher {
    config: MatcherConfig,
}

impl RuleMatcher {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config }
    }

    // ==========================================
    // 建议查询 (精简目录)
    // ==========================================

    /// 按需求返回适用的精简工艺规则, 升序排列
    ///
    /// 四谓词过滤:
    /// 1. 合金: 规则合金与需求合金双向不区分大小写子串匹配, 或通配哨兵
    /// 2. 工艺类型: 精确相等
    /// 3. 等级: 需求未给 / 规则空集 (任意等级) / 集合包含, 三者其一
    /// 4. 膜厚: 任一侧未给, 或 |Δ| ≤ 容差 (默认 5µm, 含边界)
    ///
    /// ENP 规则不参与常规过滤 (由插值器与专用检索路径处理)。
    /// 排序键: (目标膜厚或0, id), 膜厚有序, id 决胜, 结果稳定。
    pub fn suggest(&self, catalog: &ProcessCatalog, requirement: &Requirement) -> Vec<ProcessRule> {
        let mut matched: Vec<ProcessRule> = catalog
            .all()
            .iter()
            .filter(|rule| rule.process_type != ProcessType::ElectrolessNickelPlating)
            .filter(|rule| match &requirement.alloy {
                None => true,
                Some(alloy) => rule.alloys.iter().any(|a| alloy_matches_fuzzy(a, alloy)),
            })
            .filter(|rule| match requirement.process_type {
                None => true,
                Some(pt) => rule.process_type == pt,
            })
            .filter(|rule| match requirement.anodic_class {
                None => true,
                Some(class) => {
                    rule.anodic_classes.is_empty() || rule.anodic_classes.contains(&class)
                }
            })
            .filter(|rule| {
                thickness_within(
                    rule.target_thickness_um,
                    requirement.target_thickness_um,
                    self.config.suggest_thickness_tolerance_um,
                )
            })
            .cloned()
            .collect();

        matched.sort_by(|a, b| {
            let ta = a.target_thickness_um.unwrap_or(0.0);
            let tb = b.target_thickness_um.unwrap_or(0.0);
            ta.total_cmp(&tb).then_with(|| a.id.cmp(&b.id))
        });

        tracing::debug!(
            alloy = requirement.alloy.as_deref().unwrap_or("-"),
            process_type = ?requirement.process_type,
            matched = matched.len(),
            "建议查询完成"
        );
        matched
    }

    // ==========================================
    // 工序检索 (扩展目录)
    // ==========================================

    /// 按需求返回适用的扩展工序规则
    ///
    /// 过滤链 (字段缺省即放宽):
    /// - 排除结构工序 (合同评审/包装/水洗等, 只由编排器插入)
    /// - 工艺类型精确相等
    /// - 合金: 集合逐字包含 (与建议查询不同, 此处无子串模糊)
    /// - 等级: 铬酸阳极氧化/退膜豁免, 其余按集合判定
    /// - ENP 类型精确相等
    /// - 膜厚: 豁免工艺与遮蔽/退膜子类跳过, 其余 |Δ| ≤ 容差 (默认 2.5µm)
    ///
    /// 需求带膜厚时按 (豁免序, 偏差) 稳定排序: 豁免规则恒排最前,
    /// 其后膜厚变体按偏差升序, 未标定膜厚的通用变体排在标定变体之后。
    pub fn find_matching(
        &self,
        catalog: &OperationCatalog,
        requirement: &Requirement,
    ) -> Vec<OperationRule> {
        // 带膜厚的请求走每次新鲜装配的插值视图, 不触碰缓存目录
        let pool: Vec<OperationRule> = match requirement.target_thickness_um {
            Some(t) => catalog.all_with_thickness(t),
            None => catalog.all().to_vec(),
        };

        let mut matched: Vec<OperationRule> = pool
            .into_iter()
            .filter(|rule| !rule.process_type.is_structural())
            .filter(|rule| match requirement.process_type {
                None => true,
                Some(pt) => rule.process_type == pt,
            })
            .filter(|rule| match &requirement.alloy {
                None => true,
                Some(alloy) => {
                    rule.is_alloy_agnostic() || rule.alloys.iter().any(|a| a == alloy)
                }
            })
            .filter(|rule| match requirement.anodic_class {
                None => true,
                Some(class) => {
                    rule.process_type.is_class_exempt()
                        || rule.anodic_classes.is_empty()
                        || rule.anodic_classes.contains(&class)
                }
            })
            .filter(|rule| match requirement.enp_type {
                None => true,
                Some(enp_type) => rule.enp_type == Some(enp_type),
            })
            .filter(|rule| {
                if Self::operation_thickness_exempt(rule) {
                    return true;
                }
                thickness_within(
                    rule.target_thickness_um,
                    requirement.target_thickness_um,
                    self.config.operation_thickness_tolerance_um,
                )
            })
            .collect();

        if let Some(wanted) = requirement.target_thickness_um {
            matched.sort_by(|a, b| {
                let (rank_a, dev_a) = Self::thickness_sort_key(a, wanted);
                let (rank_b, dev_b) = Self::thickness_sort_key(b, wanted);
                rank_a.cmp(&rank_b).then_with(|| dev_a.total_cmp(&dev_b))
            });
        }

        tracing::debug!(
            process_type = ?requirement.process_type,
            alloy = requirement.alloy.as_deref().unwrap_or("-"),
            matched = matched.len(),
            "工序检索完成"
        );
        matched
    }

    /// 工序规则是否豁免膜厚过滤 (豁免工艺, 或遮蔽/退膜子类)
    fn operation_thickness_exempt(rule: &OperationRule) -> bool {
        rule.process_type.is_thickness_exempt() || rule.sub_kind.is_some()
    }

    /// 排序键 (豁免序, 膜厚偏差): 豁免规则记 (0, 0),
    /// 非豁免且未标定膜厚的通用变体记无穷大偏差, 排在标定变体之后
    fn thickness_sort_key(rule: &OperationRule, wanted_um: f64) -> (u8, f64) {
        if Self::operation_thickness_exempt(rule) {
            return (0, 0.0);
        }
        match rule.target_thickness_um {
            Some(t) => (1, (t - wanted_um).abs()),
            None => (1, f64::INFINITY),
        }
    }
}

impl Default for RuleMatcher {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}

// ==========================================
// 谓词辅助函数
// ==========================================

/// 建议查询的合金匹配: 通配哨兵, 或双向不区分大小写子串包含
///
/// 双向子串用于覆盖合金牌号后缀 (如需求 "2014a" 命中规则 "2014",
/// 需求 "6082" 命中规则 "6082_t6")。短牌号可能产生意外命中,
/// 已作为数据编制注意事项记录。
fn alloy_matches_fuzzy(rule_alloy: &str, wanted: &str) -> bool {
    if is_alloy_sentinel(rule_alloy) {
        return true;
    }
    let a = rule_alloy.to_lowercase();
    let b = wanted.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// 膜厚容差判定: 任一侧未给即放行, 否则 |Δ| ≤ 容差 (含边界)
fn thickness_within(rule_um: Option<f64>, wanted_um: Option<f64>, tolerance_um: f64) -> bool {
    match (rule_um, wanted_um) {
        (Some(rule_t), Some(wanted_t)) => (rule_t - wanted_t).abs() <= tolerance_um,
        _ => true,
    }
}
