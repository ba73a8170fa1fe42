// ==========================================
// 表面处理工艺规则引擎 - 工艺查询 API
// ==========================================
// 职责: 面向协作方 (HTTP 控制器/文档生成器) 的业务门面
// 架构: API 层 → 引擎层 (Matcher/Interpolator/Assembler) → 目录层
// 目录 Arc 共享发布, 装载后只读, 并发读取无需加锁
// ==========================================

use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::catalog::{OperationCatalog, ProcessCatalog};
use crate::domain::rule::{OperationRule, PlatingTime, ProcessRule, Requirement, SequenceStep};
use crate::domain::types::{AnodicClass, EnpType, ProcessType};
use crate::engine::{
    DisplayNameResolver, MatcherConfig, PlatingTimeInterpolator, RuleMatcher, SequenceAssembler,
};

// ==========================================
// TreatmentApi - 工艺查询门面
// ==========================================
pub struct TreatmentApi {
    process_catalog: Arc<ProcessCatalog>,
    operation_catalog: Arc<OperationCatalog>,
    matcher: RuleMatcher,
    interpolator: PlatingTimeInterpolator,
    resolver: DisplayNameResolver,
}

impl TreatmentApi {
    /// 从嵌入的静态规则表构造 API (装载校验失败即整体失败)
    pub fn new() -> ApiResult<Self> {
        let process_catalog = Arc::new(ProcessCatalog::build()?);
        let operation_catalog = Arc::new(OperationCatalog::build()?);
        Ok(Self::with_catalogs(process_catalog, operation_catalog))
    }

    /// 从外部注入的目录构造 API (测试/多目录场景)
    pub fn with_catalogs(
        process_catalog: Arc<ProcessCatalog>,
        operation_catalog: Arc<OperationCatalog>,
    ) -> Self {
        Self {
            process_catalog,
            operation_catalog,
            matcher: RuleMatcher::new(MatcherConfig::default()),
            interpolator: PlatingTimeInterpolator::new(),
            resolver: DisplayNameResolver::new(),
        }
    }

    // ==========================================
    // 匹配查询接口
    // ==========================================

    /// 建议查询: 按客户需求返回适用的精简工艺规则 (±5µm 宽容差)
    ///
    /// 畸形字段 (空串/非正膜厚) 视为"该维度不约束", 不报错;
    /// 零命中返回空列表, 属正常业务状态。
    pub fn suggest_processes(
        &self,
        alloy: &str,
        process_type: ProcessType,
        anodic_class: Option<AnodicClass>,
        target_thickness_um: Option<f64>,
    ) -> Vec<ProcessRule> {
        let requirement = Requirement {
            alloy: sanitize_text(alloy),
            process_type: Some(process_type),
            anodic_class,
            target_thickness_um: sanitize_thickness(target_thickness_um),
            enp_type: None,
        };
        self.matcher.suggest(&self.process_catalog, &requirement)
    }

    /// 工序检索: 按需求返回适用的扩展工序规则 (±2.5µm 严容差)
    ///
    /// 需求带膜厚时, ENP 结果携带按该膜厚新鲜插值的镀覆时间。
    pub fn find_matching_operations(&self, requirement: &Requirement) -> Vec<OperationRule> {
        let mut requirement = requirement.clone();
        requirement.alloy = requirement.alloy.as_deref().and_then(sanitize_text);
        requirement.target_thickness_um = sanitize_thickness(requirement.target_thickness_um);
        self.matcher
            .find_matching(&self.operation_catalog, &requirement)
    }

    // ==========================================
    // 派生量与编排接口
    // ==========================================

    /// 按工序 id 与目标膜厚估计镀覆时间
    ///
    /// 未知 id / 非 ENP 规则 / 无速率标定 / 非正膜厚 → None (不适用)
    pub fn calculate_plating_time(
        &self,
        operation_id: &str,
        target_thickness_um: f64,
    ) -> Option<PlatingTime> {
        self.interpolator
            .estimate_by_id(&self.operation_catalog, operation_id, target_thickness_um)
    }

    /// 由选定主工序构建完整制造工序序列
    ///
    /// 固定结构 [合同评审, 选定工序..., 包装], 顺序稳定不丢步骤。
    pub fn build_operation_sequence(&self, selected: &[OperationRule]) -> Vec<SequenceStep> {
        SequenceAssembler::new(&self.operation_catalog).build(selected)
    }

    /// 规则的人类可读标签 (保证非空)
    pub fn display_name(&self, rule: &OperationRule) -> String {
        self.resolver.resolve(rule)
    }

    // ==========================================
    // 精确查找接口 (未命中返回 None, 不报错)
    // ==========================================

    pub fn find_process(&self, id: &str) -> Option<&ProcessRule> {
        self.process_catalog.find(id)
    }

    pub fn find_operation(&self, id: &str) -> Option<&OperationRule> {
        self.operation_catalog.find(id)
    }

    // ==========================================
    // 选项枚举接口 (UI 选项填充, 排除自动插入工序)
    // ==========================================

    pub fn available_process_types(&self) -> Vec<ProcessType> {
        self.operation_catalog.available_process_types()
    }

    pub fn available_alloys(&self) -> Vec<String> {
        self.operation_catalog.available_alloys()
    }

    pub fn available_anodic_classes(&self) -> Vec<AnodicClass> {
        self.operation_catalog.available_anodic_classes()
    }

    pub fn available_thicknesses(&self) -> Vec<f64> {
        self.operation_catalog.available_thicknesses()
    }

    pub fn available_enp_types(&self) -> Vec<EnpType> {
        self.operation_catalog.available_enp_types()
    }

    // ==========================================
    // 输入解析辅助 (字符串驱动的协作方使用)
    // ==========================================

    /// 解析 snake_case 工艺类型标记
    pub fn parse_process_type(token: &str) -> ApiResult<ProcessType> {
        serde_json::from_value(serde_json::Value::String(token.to_string()))
            .map_err(|_| ApiError::InvalidInput(format!("未知工艺类型: {}", token)))
    }

    /// 解析阳极化等级标记 (class_1 / class_2)
    pub fn parse_anodic_class(token: &str) -> ApiResult<AnodicClass> {
        serde_json::from_value(serde_json::Value::String(token.to_string()))
            .map_err(|_| ApiError::InvalidInput(format!("未知阳极化等级: {}", token)))
    }
}

// ==========================================
// 输入清洗
// ==========================================

/// 空白文本视为缺省
fn sanitize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// 非有限或非正的膜厚视为缺省
fn sanitize_thickness(raw: Option<f64>) -> Option<f64> {
    raw.filter(|t| t.is_finite() && *t > 0.0)
}
