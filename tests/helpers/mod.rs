// ==========================================
// 集成测试辅助函数
// ==========================================
// 各测试二进制只使用其中一部分辅助函数
#![allow(dead_code)]

use surface_treatment_engine::catalog::{CatalogResult, OperationCatalog, ProcessCatalog};
use surface_treatment_engine::domain::rule::{DepositionRateRange, OperationRule, ProcessRule};
use surface_treatment_engine::domain::types::{AnodicClass, EnpType, ProcessType};

/// 创建测试用的精简工艺规则
pub fn process_rule(
    id: &str,
    alloys: &[&str],
    process_type: ProcessType,
    anodic_classes: &[AnodicClass],
    target_thickness_um: Option<f64>,
) -> ProcessRule {
    ProcessRule {
        id: id.to_string(),
        alloys: alloys.iter().map(|s| s.to_string()).collect(),
        process_type,
        anodic_classes: anodic_classes.to_vec(),
        target_thickness_um,
        vat_numbers: vec!["V1".to_string()],
        operation_text: format!("测试工艺指令 {}", id),
    }
}

/// 创建测试用的扩展工序规则
pub fn operation_rule(
    id: &str,
    alloys: &[&str],
    process_type: ProcessType,
    anodic_classes: &[AnodicClass],
    target_thickness_um: Option<f64>,
) -> OperationRule {
    OperationRule {
        id: id.to_string(),
        alloys: alloys.iter().map(|s| s.to_string()).collect(),
        process_type,
        sub_kind: None,
        anodic_classes: anodic_classes.to_vec(),
        target_thickness_um,
        vat_numbers: vec!["V1".to_string()],
        operation_text: format!("测试工艺指令 {}", id),
        specifications: None,
        display_name: None,
        enp_type: None,
        deposition_rate_range: None,
        time: None,
    }
}

/// 创建测试用的 ENP 规则
pub fn enp_rule(id: &str, enp_type: EnpType, min_rate: f64, max_rate: f64) -> OperationRule {
    let mut rule = operation_rule(
        id,
        &["general"],
        ProcessType::ElectrolessNickelPlating,
        &[],
        None,
    );
    rule.enp_type = Some(enp_type);
    rule.deposition_rate_range = Some(DepositionRateRange {
        min_um_per_hour: min_rate,
        max_um_per_hour: max_rate,
    });
    rule
}

/// 编排锚点 (目录装载校验要求恰好各一条)
pub fn bookends() -> Vec<OperationRule> {
    vec![
        operation_rule("CONTRACT_REVIEW", &["general"], ProcessType::ContractReview, &[], None),
        operation_rule("PACK", &["general"], ProcessType::Pack, &[], None),
    ]
}

/// 构造带锚点的工序目录
pub fn operation_catalog_with(mut rules: Vec<OperationRule>) -> CatalogResult<OperationCatalog> {
    rules.extend(bookends());
    OperationCatalog::from_rules(rules)
}

/// 构造精简目录
pub fn process_catalog_with(rules: Vec<ProcessRule>) -> CatalogResult<ProcessCatalog> {
    ProcessCatalog::from_rules(rules)
}
