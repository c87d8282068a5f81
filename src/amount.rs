//! 金额数字转换
//!
//! 核心是按量级递归求值：在当前量级找到单位字符，把字符串一分为二，
//! 两半分别在更低的量级下递归求值

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ZhNumError, ZhNumResult};
use crate::normalize::Normalizer;
use crate::tier::MagnitudeTier;

/// 普通十进制字面量（规范化的均值替换或调用方直接传入的数字）
static DECIMAL_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d*)?$").expect("valid regex"));

/// 基础情形分派结果
///
/// 求值入口先对字符串分类，再按变体逐一处理；
/// 分类优先级与各变体的声明顺序一致
enum ParseOutcome<'a> {
    /// 十进制字面量，直接取值
    Literal(f64),
    /// 单个表内字符，取其面值
    SingleChar(f64),
    /// 单位字符之后的右侧余部：去掉一个前导 "零" 后从头重新求值
    RightRemainder(&'a str),
    /// 空串，该量级没有贡献
    Empty,
    /// 需要在当前量级上切分递归
    RecursiveSplit,
}

/// 金额数字转换器
pub struct AmountConverter;

impl AmountConverter {
    /// 将中文金额表达转换为数值（单位：元）
    ///
    /// # 参数
    /// - `text`: 中文金额文本，允许繁体/大写变体、货币后缀与相邻数字对
    ///
    /// # 返回
    /// - `Ok(f64)`: 转换后的数值
    /// - `Err`: 如果不是有效的金额表达
    ///
    /// # 示例
    /// ```
    /// # use zhnum::AmountConverter;
    /// assert_eq!(AmountConverter::convert("三千元").unwrap(), 3000.0);
    /// assert_eq!(AmountConverter::convert("两万八千").unwrap(), 28000.0);
    /// assert_eq!(AmountConverter::convert("4佰零七万9仟一百26元").unwrap(), 4079126.0);
    /// ```
    pub fn convert(text: &str) -> ZhNumResult<f64> {
        Self::convert_at(text, MagnitudeTier::TOP, false, true)
    }

    /// 完整控制版本的转换入口
    ///
    /// # 参数
    /// - `base_unit`: 递归求值的起始量级；低于最高量级时可用来求子表达式
    /// - `right_side`: 文本是否为某个单位字符之后的右侧余部
    /// - `normalize`: 是否执行规范化（仅在最高量级起始时生效）
    ///
    /// "两" → "二" 的折叠总是执行，与 `normalize` 无关
    pub fn convert_at(
        text: &str,
        base_unit: MagnitudeTier,
        right_side: bool,
        normalize: bool,
    ) -> ZhNumResult<f64> {
        let text = Normalizer::fold_attributive_two(text);

        let text = if normalize && base_unit == MagnitudeTier::TOP {
            let normalized = Normalizer::normalize(&text);
            tracing::trace!("规范化: {:?} -> {:?}", text, normalized);
            normalized
        } else {
            text
        };

        Self::evaluate(&text, base_unit, right_side)
    }

    /// 在给定量级下递归求值
    fn evaluate(s: &str, tier: MagnitudeTier, right_side: bool) -> ZhNumResult<f64> {
        match Self::classify(s, right_side)? {
            ParseOutcome::Literal(value) => Ok(value),
            ParseOutcome::SingleChar(face) => {
                // 高位单位之后的孤立数字按当前量级计数，
                // 否则按面值读取
                if right_side {
                    Ok(face * tier.scale())
                } else {
                    Ok(face)
                }
            }
            ParseOutcome::RightRemainder(rest) => {
                Self::evaluate(rest, MagnitudeTier::TOP, false)
            }
            ParseOutcome::Empty => Ok(0.0),
            ParseOutcome::RecursiveSplit => Self::split_at_tier(s, tier),
        }
    }

    /// 基础情形分类
    fn classify<'a>(s: &'a str, right_side: bool) -> ZhNumResult<ParseOutcome<'a>> {
        if DECIMAL_LITERAL.is_match(s) {
            let value = s
                .parse::<f64>()
                .map_err(|_| ZhNumError::MalformedUnitSequence(s.to_string()))?;
            return Ok(ParseOutcome::Literal(value));
        }

        let mut chars = s.chars();
        if let (Some(ch), None) = (chars.next(), chars.next()) {
            if let Some(face) = Self::single_char_value(ch) {
                return Ok(ParseOutcome::SingleChar(face));
            }
            if !right_side {
                return Err(ZhNumError::UnrecognizedCharacter { ch });
            }
            // 右侧余部中的孤立 "零" 走余部分支，被剥掉后归零
        }

        if right_side {
            return Ok(ParseOutcome::RightRemainder(
                s.strip_prefix('零').unwrap_or(s),
            ));
        }

        if s.is_empty() {
            return Ok(ParseOutcome::Empty);
        }

        Ok(ParseOutcome::RecursiveSplit)
    }

    /// 在当前量级的单位字符处切分并递归
    ///
    /// 单位字符缺席时整串落入下一个更低的量级；
    /// 切分后左半部分乘以当前量级倍率，右半部分作为右侧余部求值
    fn split_at_tier(s: &str, tier: MagnitudeTier) -> ZhNumResult<f64> {
        let (unit, lower) = match (tier.unit_char(), tier.next_lower()) {
            (Some(unit), Some(lower)) => (unit, lower),
            // 个位已无单位字符可切分，多字符串走到这里即为非法序列
            _ => return Err(ZhNumError::MalformedUnitSequence(s.to_string())),
        };

        // 文法保证每个单位字符在一个合法表达里至多出现一次
        if s.matches(unit).count() > 1 {
            return Err(ZhNumError::MalformedUnitSequence(s.to_string()));
        }

        match s.split_once(unit) {
            None => Self::evaluate(s, lower, false),
            Some((head, tail)) => {
                // 以单位字符开头时左半为空，按隐含的 "一" 计（如 "十五" = 15）
                let head_value = if head.is_empty() {
                    1.0
                } else {
                    Self::evaluate(head, lower, false)?
                };
                let tail_value = Self::evaluate(tail, lower, true)?;

                Ok(head_value * tier.scale() + tail_value)
            }
        }
    }

    /// 单字符面值表
    ///
    /// 数字字符取 1..9，单位字符单独出现时取其倍率（如 "十" = 10）
    fn single_char_value(ch: char) -> Option<f64> {
        let value = match ch {
            '一' => 1.0,
            '二' => 2.0,
            '三' => 3.0,
            '四' => 4.0,
            '五' => 5.0,
            '六' => 6.0,
            '七' => 7.0,
            '八' => 8.0,
            '九' => 9.0,
            '十' => 10.0,
            '百' => 100.0,
            '千' => 1_000.0,
            '万' => 10_000.0,
            '亿' => 100_000_000.0,
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_digit() {
        assert_eq!(AmountConverter::convert("一").unwrap(), 1.0);
        assert_eq!(AmountConverter::convert("九").unwrap(), 9.0);
    }

    #[test]
    fn test_lone_unit_chars() {
        assert_eq!(AmountConverter::convert("十").unwrap(), 10.0);
        assert_eq!(AmountConverter::convert("百").unwrap(), 100.0);
        assert_eq!(AmountConverter::convert("千").unwrap(), 1000.0);
        assert_eq!(AmountConverter::convert("万").unwrap(), 10000.0);
        assert_eq!(AmountConverter::convert("亿").unwrap(), 100000000.0);
    }

    #[test]
    fn test_implicit_leading_one() {
        assert_eq!(AmountConverter::convert("十五").unwrap(), 15.0);
        assert_eq!(AmountConverter::convert("十五万").unwrap(), 150000.0);
    }

    #[test]
    fn test_currency_suffix() {
        assert_eq!(AmountConverter::convert("三千元").unwrap(), 3000.0);
        assert_eq!(AmountConverter::convert("三千").unwrap(), 3000.0);
    }

    #[test]
    fn test_zero_placeholder() {
        assert_eq!(AmountConverter::convert("三千零五十").unwrap(), 3050.0);
        assert_eq!(AmountConverter::convert("二十万零五").unwrap(), 200005.0);
    }

    #[test]
    fn test_attributive_two() {
        assert_eq!(AmountConverter::convert("两万八千").unwrap(), 28000.0);
        assert_eq!(AmountConverter::convert("两千").unwrap(), 2000.0);
    }

    #[test]
    fn test_mixed_variant_digits() {
        assert_eq!(
            AmountConverter::convert("4佰零七万9仟一百26元").unwrap(),
            4079126.0
        );
        assert_eq!(AmountConverter::convert("409万八千零71").unwrap(), 4098071.0);
    }

    #[test]
    fn test_decimal_heads() {
        assert_eq!(AmountConverter::convert("23万6.2千503").unwrap(), 236703.0);
        assert_eq!(AmountConverter::convert("23.1千802元").unwrap(), 23902.0);
    }

    #[test]
    fn test_digit_pair_mean() {
        assert_eq!(AmountConverter::convert("六柒").unwrap(), 6.5);
    }

    #[test]
    fn test_deep_recursion() {
        assert_eq!(
            AmountConverter::convert("一百1拾九万3千零2拾3亿83.2万零三").unwrap(),
            119302300832003.0
        );
    }

    #[test]
    fn test_empty_string_any_tier() {
        for tier in [
            MagnitudeTier::Unit,
            MagnitudeTier::Ten,
            MagnitudeTier::Hundred,
            MagnitudeTier::Thousand,
            MagnitudeTier::TenThousand,
            MagnitudeTier::HundredMillion,
        ] {
            for right_side in [false, true] {
                assert_eq!(
                    AmountConverter::convert_at("", tier, right_side, false).unwrap(),
                    0.0
                );
            }
        }
    }

    #[test]
    fn test_literal_roundtrip_ignores_tier_and_side() {
        for text in ["0", "7", "26", "83.2", "409"] {
            let expected: f64 = text.parse().unwrap();
            for tier in [MagnitudeTier::Unit, MagnitudeTier::Thousand, MagnitudeTier::TOP] {
                for right_side in [false, true] {
                    assert_eq!(
                        AmountConverter::convert_at(text, tier, right_side, false).unwrap(),
                        expected
                    );
                }
            }
        }
    }

    #[test]
    fn test_lower_base_unit() {
        // 从千位开始求值子表达式
        assert_eq!(
            AmountConverter::convert_at("三千五百", MagnitudeTier::Thousand, false, false)
                .unwrap(),
            3500.0
        );
    }

    #[test]
    fn test_unrecognized_character() {
        assert!(matches!(
            AmountConverter::convert("朤"),
            Err(ZhNumError::UnrecognizedCharacter { ch: '朤' })
        ));
    }

    #[test]
    fn test_malformed_unit_sequence() {
        // 同一单位字符重复出现
        assert!(matches!(
            AmountConverter::convert("三亿五亿"),
            Err(ZhNumError::MalformedUnitSequence(_))
        ));
        // 没有任何可切分单位的多字符串
        assert!(AmountConverter::convert("你好").is_err());
    }
}
