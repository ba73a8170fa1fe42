// ==========================================
// 表面处理工艺规则引擎 - 展示名解析器
// ==========================================
// 分派顺序 (确定性, 永不为空):
// 1. 数据编制期给定的 display_name (原样采用)
// 2. ENP 规则: 工艺 i18n 标签 + ENP 类型标签
// 3. 膜厚门控工艺: 人性化 id + 膜厚后缀
// 4. 回退: 人性化 id (下划线/连字符转空格, 词首大写)
// 子类/温度/时长等参数在数据编制期写入 display_name,
// 运行期不对 id 做正则分派
// ==========================================

use crate::domain::rule::OperationRule;
use crate::domain::types::{EnpType, ProcessType};
use crate::i18n;

/// 展示名解析器
pub struct DisplayNameResolver;

impl DisplayNameResolver {
    pub fn new() -> Self {
        Self
    }

    /// 解析规则的人类可读标签; 保证非空
    pub fn resolve(&self, rule: &OperationRule) -> String {
        if let Some(name) = &rule.display_name {
            if !name.trim().is_empty() {
                return name.clone();
            }
        }

        let resolved = match rule.process_type {
            ProcessType::ElectrolessNickelPlating => self.enp_label(rule.enp_type),
            pt if !pt.is_thickness_exempt() => match rule.target_thickness_um {
                Some(t) if t > 0.0 => {
                    format!("{} {}µm", humanize_id(&rule.id), format_thickness(t))
                }
                _ => humanize_id(&rule.id),
            },
            _ => humanize_id(&rule.id),
        };

        if resolved.is_empty() {
            // id 异常为空时以工艺类型标签兜底
            return self.process_label(rule.process_type);
        }
        resolved
    }

    /// 工艺类型的 i18n 标签
    pub fn process_label(&self, process_type: ProcessType) -> String {
        i18n::t(&format!("process_type.{}", process_type.as_str()))
    }

    /// ENP 标签: 工艺标签 + 类型标签
    fn enp_label(&self, enp_type: Option<EnpType>) -> String {
        let base = self.process_label(ProcessType::ElectrolessNickelPlating);
        match enp_type {
            Some(t) => format!("{} ({})", base, i18n::t(&format!("enp_type.{}", t.as_str()))),
            None => base,
        }
    }
}

impl Default for DisplayNameResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// 人性化 id: 分隔符转空格, 词首大写, 其余小写, 数字词原样保留
fn humanize_id(id: &str) -> String {
    id.split(|c| c == '_' || c == '-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// 膜厚展示: 整数值不带小数位
fn format_thickness(thickness_um: f64) -> String {
    if (thickness_um - thickness_um.round()).abs() < 1e-9 {
        format!("{:.0}", thickness_um)
    } else {
        format!("{:.1}", thickness_um)
    }
}
