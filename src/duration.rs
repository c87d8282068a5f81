//! 年月时长转换
//!
//! 将 "X年Y个月" 式的时长表达折算为月数

use crate::amount::AmountConverter;
use crate::error::ZhNumResult;
use crate::tier::MagnitudeTier;

/// 时长转换器
pub struct DurationConverter;

impl DurationConverter {
    /// 将中文时长表达折算为总月数
    ///
    /// 年月两部分分别按面值求值（不经过规范化），
    /// 量词 "个" 与占位 "零" 在时长表达里不携带数值含义，先行去除
    ///
    /// # 示例
    /// ```
    /// # use zhnum::DurationConverter;
    /// assert_eq!(DurationConverter::to_months("十五年五个月").unwrap(), 185.0);
    /// assert_eq!(DurationConverter::to_months("三个月").unwrap(), 3.0);
    /// ```
    pub fn to_months(text: &str) -> ZhNumResult<f64> {
        let has_year = text.contains('年');
        let has_month = text.contains('月');

        let stripped: String = text
            .chars()
            .filter(|&ch| !matches!(ch, '个' | '零'))
            .collect();
        let parts: Vec<&str> = stripped.split(['年', '月']).collect();

        let months = if has_year && has_month {
            Self::face_value(parts[0])? * 12.0 + Self::face_value(parts[1])?
        } else if has_year {
            Self::face_value(parts[0])? * 12.0
        } else {
            Self::face_value(parts[0])?
        };

        tracing::debug!("时长折算: {:?} -> {} 个月", text, months);
        Ok(months)
    }

    /// 按面值求值单个年/月分量（跳过规范化）
    fn face_value(part: &str) -> ZhNumResult<f64> {
        AmountConverter::convert_at(part, MagnitudeTier::TOP, false, false)
    }
}
