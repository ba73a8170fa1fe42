// ==========================================
// RuleMatcher 集成测试
// ==========================================
// 覆盖: 建议查询四谓词与排序, 工序检索过滤链,
//       双容差带边界 (±5 / ±2.5, 含边界), 豁免规则
// ==========================================

mod helpers;

use helpers::{
    enp_rule, operation_catalog_with, operation_rule, process_catalog_with, process_rule,
};
use surface_treatment_engine::domain::rule::Requirement;
use surface_treatment_engine::domain::types::{AnodicClass, EnpType, ProcessType, SubKind};
use surface_treatment_engine::engine::{MatcherConfig, RuleMatcher};

fn matcher() -> RuleMatcher {
    RuleMatcher::new(MatcherConfig::default())
}

// ==========================================
// 建议查询 (精简目录, ±5µm)
// ==========================================

#[test]
fn test_suggest_type_purity() {
    let catalog = process_catalog_with(vec![
        process_rule("HA25", &["6082"], ProcessType::HardAnodising, &[], Some(25.0)),
        process_rule("CAA", &["6082"], ProcessType::ChromicAnodising, &[], None),
    ])
    .unwrap();

    let req = Requirement::of("6082", ProcessType::HardAnodising);
    let result = matcher().suggest(&catalog, &req);
    assert!(result
        .iter()
        .all(|r| r.process_type == ProcessType::HardAnodising));
    assert_eq!(result.len(), 1);
}

#[test]
fn test_suggest_thickness_boundary_inclusive() {
    let catalog = process_catalog_with(vec![process_rule(
        "HA20",
        &["6082"],
        ProcessType::HardAnodising,
        &[],
        Some(20.0),
    )])
    .unwrap();

    // diff = 5, 含边界 → 命中
    let req = Requirement::of("6082", ProcessType::HardAnodising).with_thickness(25.0);
    assert_eq!(matcher().suggest(&catalog, &req).len(), 1);

    // diff = 5.01 → 不命中
    let req = Requirement::of("6082", ProcessType::HardAnodising).with_thickness(25.01);
    assert!(matcher().suggest(&catalog, &req).is_empty());
}

#[test]
fn test_suggest_alloy_fuzzy_and_sentinel() {
    let catalog = process_catalog_with(vec![
        process_rule("HA_2014", &["2014"], ProcessType::HardAnodising, &[], Some(25.0)),
        process_rule("HA_GEN", &["general"], ProcessType::HardAnodising, &[], Some(25.0)),
        process_rule("HA_7075", &["7075"], ProcessType::HardAnodising, &[], Some(25.0)),
    ])
    .unwrap();

    // 双向子串: 需求 "2014A" 命中规则 "2014"; 通配哨兵恒命中
    let req = Requirement::of("2014A", ProcessType::HardAnodising);
    let result = matcher().suggest(&catalog, &req);
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert!(ids.contains(&"HA_2014"));
    assert!(ids.contains(&"HA_GEN"));
    assert!(!ids.contains(&"HA_7075"));
}

#[test]
fn test_suggest_class_semantics() {
    let catalog = process_catalog_with(vec![
        process_rule("HA_C1", &["6082"], ProcessType::HardAnodising, &[AnodicClass::Class1], Some(25.0)),
        process_rule("HA_ANY", &["6082"], ProcessType::HardAnodising, &[], Some(25.0)),
    ])
    .unwrap();

    // 需求未给等级 → 全部命中
    let req = Requirement::of("6082", ProcessType::HardAnodising);
    assert_eq!(matcher().suggest(&catalog, &req).len(), 2);

    // class_2: 空集规则视为任意等级, 仍命中
    let req = Requirement::of("6082", ProcessType::HardAnodising)
        .with_anodic_class(AnodicClass::Class2);
    let result = matcher().suggest(&catalog, &req);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "HA_ANY");
}

#[test]
fn test_suggest_sorted_by_thickness_then_id() {
    let catalog = process_catalog_with(vec![
        process_rule("B50", &["6082"], ProcessType::HardAnodising, &[], Some(50.0)),
        process_rule("B25", &["6082"], ProcessType::HardAnodising, &[], Some(25.0)),
        process_rule("A25", &["6082"], ProcessType::HardAnodising, &[], Some(25.0)),
        process_rule("NONE", &["6082"], ProcessType::HardAnodising, &[], None),
    ])
    .unwrap();

    let req = Requirement::of("6082", ProcessType::HardAnodising);
    let result = matcher().suggest(&catalog, &req);
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    // 无膜厚记 0 排最前; 同膜厚按 id 决胜
    assert_eq!(ids, vec!["NONE", "A25", "B25", "B50"]);
}

// ==========================================
// 工序检索 (扩展目录, ±2.5µm)
// ==========================================

#[test]
fn test_find_matching_thickness_boundary_inclusive() {
    let catalog = operation_catalog_with(vec![operation_rule(
        "HA20",
        &["6082"],
        ProcessType::HardAnodising,
        &[],
        Some(20.0),
    )])
    .unwrap();

    let req = Requirement::of("6082", ProcessType::HardAnodising).with_thickness(22.5);
    assert_eq!(matcher().find_matching(&catalog, &req).len(), 1);

    let req = Requirement::of("6082", ProcessType::HardAnodising).with_thickness(22.51);
    assert!(matcher().find_matching(&catalog, &req).is_empty());
}

#[test]
fn test_find_matching_alloy_verbatim() {
    let catalog = operation_catalog_with(vec![
        operation_rule("HA_2014", &["2014"], ProcessType::HardAnodising, &[], None),
        operation_rule("HA_GEN", &["general"], ProcessType::HardAnodising, &[], None),
    ])
    .unwrap();

    // 工序检索无子串模糊: "2014A" 不命中 "2014", 哨兵仍命中
    let req = Requirement::of("2014A", ProcessType::HardAnodising);
    let result = matcher().find_matching(&catalog, &req);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "HA_GEN");
}

#[test]
fn test_find_matching_class_exemption() {
    let catalog = operation_catalog_with(vec![
        operation_rule("CAA", &["general"], ProcessType::ChromicAnodising, &[AnodicClass::Class1], None),
        operation_rule("STRIP", &["general"], ProcessType::Stripping, &[AnodicClass::Class1], None),
        operation_rule("HA_C1", &["general"], ProcessType::HardAnodising, &[AnodicClass::Class1], None),
    ])
    .unwrap();

    // 铬酸阳极氧化/退膜与等级无关, 声明等级不匹配也放行
    let req = Requirement {
        anodic_class: Some(AnodicClass::Class2),
        ..Requirement::default()
    };
    let result = matcher().find_matching(&catalog, &req);
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert!(ids.contains(&"CAA"));
    assert!(ids.contains(&"STRIP"));
    assert!(!ids.contains(&"HA_C1"));
}

#[test]
fn test_find_matching_thickness_exemption() {
    let mut sealing = operation_rule("SEAL", &["general"], ProcessType::Sealing, &[], Some(99.0));
    sealing.display_name = Some("封孔".to_string());
    let catalog = operation_catalog_with(vec![
        sealing,
        operation_rule("CC", &["general"], ProcessType::ChemicalConversion, &[], None),
        operation_rule("CAA", &["general"], ProcessType::ChromicAnodising, &[], None),
        operation_rule("HA99", &["general"], ProcessType::HardAnodising, &[], Some(99.0)),
    ])
    .unwrap();

    // 豁免工艺即使声明的膜厚远离需求也放行; 膜厚门控工艺被过滤
    let req = Requirement {
        target_thickness_um: Some(25.0),
        ..Requirement::default()
    };
    let result = matcher().find_matching(&catalog, &req);
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert!(ids.contains(&"SEAL"));
    assert!(ids.contains(&"CC"));
    assert!(ids.contains(&"CAA"));
    assert!(!ids.contains(&"HA99"));
}

#[test]
fn test_find_matching_sub_kind_exemption() {
    let mut mask = operation_rule("MASK_X", &["general"], ProcessType::HardAnodising, &[], Some(99.0));
    mask.sub_kind = Some(SubKind::Mask);
    let catalog = operation_catalog_with(vec![
        mask,
        operation_rule("HA99", &["general"], ProcessType::HardAnodising, &[], Some(99.0)),
    ])
    .unwrap();

    // 遮蔽/退膜子类豁免膜厚过滤
    let req = Requirement {
        target_thickness_um: Some(25.0),
        ..Requirement::default()
    };
    let result = matcher().find_matching(&catalog, &req);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "MASK_X");
}

#[test]
fn test_find_matching_structural_excluded() {
    let catalog = operation_catalog_with(vec![
        operation_rule("RINSE", &["general"], ProcessType::Rinse, &[], None),
        operation_rule("HA25", &["general"], ProcessType::HardAnodising, &[], Some(25.0)),
    ])
    .unwrap();

    // 结构工序 (水洗/合同评审/包装) 不出现在检索结果中
    let result = matcher().find_matching(&catalog, &Requirement::default());
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["HA25"]);
}

#[test]
fn test_find_matching_enp_type_filter() {
    let catalog = operation_catalog_with(vec![
        enp_rule("ENP_HI", EnpType::HighPhosphorus, 10.0, 15.0),
        enp_rule("ENP_LO", EnpType::LowPhosphorus, 15.0, 20.0),
    ])
    .unwrap();

    let req = Requirement {
        process_type: Some(ProcessType::ElectrolessNickelPlating),
        enp_type: Some(EnpType::HighPhosphorus),
        ..Requirement::default()
    };
    let result = matcher().find_matching(&catalog, &req);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, "ENP_HI");
}

#[test]
fn test_find_matching_exempt_rules_sort_first() {
    let catalog = operation_catalog_with(vec![
        operation_rule("HA27", &["general"], ProcessType::HardAnodising, &[], Some(27.0)),
        operation_rule("CAA", &["general"], ProcessType::ChromicAnodising, &[], None),
        operation_rule("HA25", &["general"], ProcessType::HardAnodising, &[], Some(25.0)),
    ])
    .unwrap();

    // (豁免序, 偏差) 升序: 豁免规则恒排最前, 之后 HA25 (偏差 0), HA27 (偏差 2)
    let req = Requirement {
        target_thickness_um: Some(25.0),
        ..Requirement::default()
    };
    let result = matcher().find_matching(&catalog, &req);
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["CAA", "HA25", "HA27"]);
}

#[test]
fn test_suggest_zero_thickness_rule_is_thickness_independent() {
    // 目标膜厚 0 与缺省同义: 装载期归一为缺省, 任意需求膜厚均放行
    let catalog = process_catalog_with(vec![process_rule(
        "HA_GEN",
        &["6082"],
        ProcessType::HardAnodising,
        &[],
        Some(0.0),
    )])
    .unwrap();
    assert_eq!(catalog.find("HA_GEN").and_then(|r| r.target_thickness_um), None);

    let req = Requirement::of("6082", ProcessType::HardAnodising).with_thickness(25.0);
    assert_eq!(matcher().suggest(&catalog, &req).len(), 1);
}

#[test]
fn test_find_matching_zero_thickness_rule_is_thickness_independent() {
    let catalog = operation_catalog_with(vec![operation_rule(
        "HA_GEN",
        &["6082"],
        ProcessType::HardAnodising,
        &[],
        Some(0.0),
    )])
    .unwrap();
    assert_eq!(catalog.find("HA_GEN").and_then(|r| r.target_thickness_um), None);

    let req = Requirement::of("6082", ProcessType::HardAnodising).with_thickness(25.0);
    assert_eq!(matcher().find_matching(&catalog, &req).len(), 1);
}

#[test]
fn test_find_matching_unset_thickness_sorts_after_calibrated() {
    let catalog = operation_catalog_with(vec![
        operation_rule("HA_GEN", &["general"], ProcessType::HardAnodising, &[], None),
        operation_rule("HA27", &["general"], ProcessType::HardAnodising, &[], Some(27.0)),
        operation_rule("CAA", &["general"], ProcessType::ChromicAnodising, &[], None),
    ])
    .unwrap();

    // 豁免规则最前, 标定变体按偏差居中, 未标定膜厚的通用变体垫底
    let req = Requirement {
        target_thickness_um: Some(25.0),
        ..Requirement::default()
    };
    let result = matcher().find_matching(&catalog, &req);
    let ids: Vec<&str> = result.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["CAA", "HA27", "HA_GEN"]);
}

#[test]
fn test_zero_matches_is_normal() {
    let catalog = operation_catalog_with(vec![]).unwrap();
    let result = matcher().find_matching(&catalog, &Requirement::default());
    assert!(result.is_empty());
}
