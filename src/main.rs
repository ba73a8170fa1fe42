// ==========================================
// 表面处理工艺规则引擎 - 查询演示入口
// ==========================================
// 用法: treatment-query <合金> <工艺类型> [目标膜厚µm] [阳极化等级]
// 示例: treatment-query 6082 hard_anodising 25 class_1
// ==========================================

use anyhow::{bail, Context, Result};
use surface_treatment_engine::api::TreatmentApi;
use surface_treatment_engine::domain::rule::Requirement;
use surface_treatment_engine::logging;

fn main() -> Result<()> {
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("表面处理工艺规则引擎 - 查询演示");
    tracing::info!("引擎版本: {}", surface_treatment_engine::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 {
        bail!("用法: treatment-query <合金> <工艺类型> [目标膜厚µm] [阳极化等级]");
    }

    let alloy = &args[0];
    let process_type = TreatmentApi::parse_process_type(&args[1])?;
    let target_thickness_um = match args.get(2) {
        Some(raw) => Some(
            raw.parse::<f64>()
                .with_context(|| format!("目标膜厚解析失败: {}", raw))?,
        ),
        None => None,
    };
    let anodic_class = match args.get(3) {
        Some(raw) => Some(TreatmentApi::parse_anodic_class(raw)?),
        None => None,
    };

    let api = TreatmentApi::new().context("规则目录装载失败")?;

    // 建议查询 (精简目录, ±5µm)
    let suggestions = api.suggest_processes(alloy, process_type, anodic_class, target_thickness_um);
    tracing::info!(count = suggestions.len(), "建议查询结果");
    println!("{}", serde_json::to_string_pretty(&suggestions)?);

    // 工序检索 (扩展目录, ±2.5µm, ENP 携带插值时间)
    let requirement = Requirement {
        alloy: Some(alloy.clone()),
        process_type: Some(process_type),
        anodic_class,
        target_thickness_um,
        enp_type: None,
    };
    let operations = api.find_matching_operations(&requirement);
    tracing::info!(count = operations.len(), "工序检索结果");
    for operation in &operations {
        println!("{}  [{}]", api.display_name(operation), operation.id);
    }

    Ok(())
}
