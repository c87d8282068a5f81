//! 数字文本规范化
//!
//! 将繁体/大写变体折叠为标准字符、去掉货币后缀，并把相邻数字对
//! 替换为均值写法对应的十进制字面量

/// 相邻数字对取均值时使用的固定字符顺序及各自数值
///
/// 替换按此顺序逐行进行（行优先遍历全部 100 个有序对）；
/// 每次替换产生的都是 ASCII 数字字面量，不会被后续数字对重新匹配
const PAIR_DIGITS: [(char, u32); 10] = [
    ('一', 1),
    ('二', 2),
    ('两', 2),
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
    ('七', 7),
    ('八', 8),
    ('九', 9),
];

/// 数字文本规范化器
pub struct Normalizer;

impl Normalizer {
    /// 将量词用法的 "两" 折叠为标准数字 "二"
    ///
    /// 金额转换入口总是先执行这一步，与其余规范化步骤是否启用无关
    /// （例如 "两万"、"两千" 统一变为 "二万"、"二千"）
    pub fn fold_attributive_two(text: &str) -> String {
        text.replace('两', "二")
    }

    /// 规范化数字文本
    ///
    /// 步骤（顺序固定）：
    /// 1. "两" → "二"
    /// 2. 繁体/大写变体折叠（億萬仟佰拾〇壹貳叁肆伍陆柒捌玖）
    /// 3. 去掉货币后缀（元/圓/圆）
    /// 4. 相邻数字对替换为均值的十进制字面量（如 "六七" → "6.5"）
    ///
    /// 纯函数，且幂等：规范化结果再次规范化不会变化
    ///
    /// # 示例
    /// ```
    /// # use zhnum::Normalizer;
    /// assert_eq!(Normalizer::normalize("叁仟元"), "三千");
    /// assert_eq!(Normalizer::normalize("六柒"), "6.5");
    /// ```
    pub fn normalize(text: &str) -> String {
        let folded: String = Self::fold_attributive_two(text)
            .chars()
            .map(Self::fold_variant)
            .filter(|ch| !Self::is_currency_suffix(*ch))
            .collect();

        Self::substitute_digit_pairs(&folded)
    }

    /// 将单个变体字符折叠为标准字符
    fn fold_variant(ch: char) -> char {
        match ch {
            '億' => '亿',
            '萬' => '万',
            '仟' => '千',
            '佰' => '百',
            '拾' => '十',
            '〇' => '零',
            '壹' => '一',
            '貳' => '二',
            '叁' => '三',
            '肆' => '四',
            '伍' => '五',
            '陆' => '六',
            '柒' => '七',
            '捌' => '八',
            '玖' => '九',
            other => other,
        }
    }

    /// 检查是否为货币后缀字符（无数值含义，规范化时去除）
    fn is_currency_suffix(ch: char) -> bool {
        matches!(ch, '元' | '圓' | '圆')
    }

    /// 相邻数字对替换
    ///
    /// 相邻的两个数字字符总是按两者数值的均值解读（保留一位小数），
    /// 不会被当作两个独立的位值
    fn substitute_digit_pairs(text: &str) -> String {
        let mut result = text.to_string();

        for (n1, v1) in PAIR_DIGITS {
            for (n2, v2) in PAIR_DIGITS {
                let pair: String = [n1, n2].iter().collect();
                if result.contains(&pair) {
                    let mean = f64::from(v1 + v2) / 2.0;
                    result = result.replace(&pair, &format!("{:.1}", mean));
                }
            }
        }

        result
    }
}
