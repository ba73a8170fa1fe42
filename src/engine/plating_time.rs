// ==========================================
// 表面处理工艺规则引擎 - 镀覆时间插值器
// ==========================================
// 化学镀镍 (ENP) 为速率驱动工艺 (非电压驱动):
// 预期时长 = 目标膜厚 / 标定沉积速率区间
// 插值结果随请求膜厚变化, 不得脱离膜厚按规则缓存
// ==========================================

use crate::catalog::OperationCatalog;
use crate::domain::rule::{OperationRule, PlatingTime};

/// 镀覆时间插值器
///
/// 非 ENP 规则或无速率标定的规则返回 None ("不适用"), 不报错。
pub struct PlatingTimeInterpolator;

impl PlatingTimeInterpolator {
    pub fn new() -> Self {
        Self
    }

    /// 按规则与目标膜厚估计镀覆时间
    ///
    /// 最乐观 = 膜厚/最大速率, 最保守 = 膜厚/最小速率。
    pub fn estimate(&self, rule: &OperationRule, target_thickness_um: f64) -> Option<PlatingTime> {
        if !rule.is_enp() {
            return None;
        }
        rule.deposition_rate_range?.time_for(target_thickness_um)
    }

    /// 按规则 id 估计镀覆时间; id 未命中同样返回 None
    pub fn estimate_by_id(
        &self,
        catalog: &OperationCatalog,
        operation_id: &str,
        target_thickness_um: f64,
    ) -> Option<PlatingTime> {
        let rule = catalog.find(operation_id)?;
        self.estimate(rule, target_thickness_um)
    }
}

impl Default for PlatingTimeInterpolator {
    fn default() -> Self {
        Self::new()
    }
}
