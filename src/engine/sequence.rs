// ==========================================
// 表面处理工艺规则引擎 - 工序序列编排器
// ==========================================
// 固定结构: [合同评审] + 选定主工序 (调用方顺序) + [包装]
// 保证: 序列长度 = 2 + 主工序数, 顺序稳定, 不静默丢弃任何步骤
// 湿法支撑工序 (水洗/除油/检验) 的穿插由独立的支撑工序插入器
// 负责, 其分类输入为 ProcessType::category()
// ==========================================

use crate::catalog::OperationCatalog;
use crate::domain::rule::{OperationRule, SequenceStep};
use crate::engine::display_name::DisplayNameResolver;

/// 工序序列编排器
pub struct SequenceAssembler<'a> {
    catalog: &'a OperationCatalog,
    resolver: DisplayNameResolver,
}

impl<'a> SequenceAssembler<'a> {
    pub fn new(catalog: &'a OperationCatalog) -> Self {
        Self {
            catalog,
            resolver: DisplayNameResolver::new(),
        }
    }

    /// 由选定主工序构建完整制造工序序列
    ///
    /// 头尾锚点 (合同评审/包装) 在目录装载期已校验唯一存在,
    /// 此处取用不会失败。
    pub fn build(&self, selected: &[OperationRule]) -> Vec<SequenceStep> {
        let mut sequence = Vec::with_capacity(selected.len() + 2);
        sequence.push(self.step_for(self.catalog.contract_review()));
        for rule in selected {
            sequence.push(self.step_for(rule));
        }
        sequence.push(self.step_for(self.catalog.pack()));

        tracing::debug!(
            selected = selected.len(),
            total = sequence.len(),
            "工序序列编排完成"
        );
        sequence
    }

    /// 单个步骤: 标题取展示名, 描述取工艺指令原文 (不得改写)
    fn step_for(&self, rule: &OperationRule) -> SequenceStep {
        SequenceStep {
            title: self.resolver.resolve(rule),
            description: rule.operation_text.clone(),
            rule: rule.clone(),
        }
    }
}
