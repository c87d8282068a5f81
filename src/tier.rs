//! 数量级层级
//!
//! 位值计数法的六个量级：个、十、百、千、万、亿

/// 量级层级
///
/// 按从小到大的顺序排列；`Unit`（个位）是递归求值的终止层级，
/// 没有对应的单位字符
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MagnitudeTier {
    /// 个位
    Unit,
    /// 十位
    Ten,
    /// 百位
    Hundred,
    /// 千位
    Thousand,
    /// 万位
    TenThousand,
    /// 亿位
    HundredMillion,
}

impl MagnitudeTier {
    /// 最高量级（递归求值的默认入口）
    pub const TOP: MagnitudeTier = MagnitudeTier::HundredMillion;

    /// 量级对应的倍率
    pub fn scale(self) -> f64 {
        match self {
            MagnitudeTier::Unit => 1.0,
            MagnitudeTier::Ten => 10.0,
            MagnitudeTier::Hundred => 100.0,
            MagnitudeTier::Thousand => 1_000.0,
            MagnitudeTier::TenThousand => 10_000.0,
            MagnitudeTier::HundredMillion => 100_000_000.0,
        }
    }

    /// 量级对应的单位字符（个位没有单位字符）
    pub fn unit_char(self) -> Option<char> {
        match self {
            MagnitudeTier::Unit => None,
            MagnitudeTier::Ten => Some('十'),
            MagnitudeTier::Hundred => Some('百'),
            MagnitudeTier::Thousand => Some('千'),
            MagnitudeTier::TenThousand => Some('万'),
            MagnitudeTier::HundredMillion => Some('亿'),
        }
    }

    /// 下一个更低的量级（个位之下没有更低量级）
    pub fn next_lower(self) -> Option<MagnitudeTier> {
        match self {
            MagnitudeTier::Unit => None,
            MagnitudeTier::Ten => Some(MagnitudeTier::Unit),
            MagnitudeTier::Hundred => Some(MagnitudeTier::Ten),
            MagnitudeTier::Thousand => Some(MagnitudeTier::Hundred),
            MagnitudeTier::TenThousand => Some(MagnitudeTier::Thousand),
            MagnitudeTier::HundredMillion => Some(MagnitudeTier::TenThousand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale() {
        assert_eq!(MagnitudeTier::Unit.scale(), 1.0);
        assert_eq!(MagnitudeTier::Ten.scale(), 10.0);
        assert_eq!(MagnitudeTier::Hundred.scale(), 100.0);
        assert_eq!(MagnitudeTier::Thousand.scale(), 1000.0);
        assert_eq!(MagnitudeTier::TenThousand.scale(), 10000.0);
        assert_eq!(MagnitudeTier::HundredMillion.scale(), 100000000.0);
    }

    #[test]
    fn test_unit_char() {
        assert_eq!(MagnitudeTier::Unit.unit_char(), None);
        assert_eq!(MagnitudeTier::Ten.unit_char(), Some('十'));
        assert_eq!(MagnitudeTier::HundredMillion.unit_char(), Some('亿'));
    }

    #[test]
    fn test_next_lower_walks_to_unit() {
        let mut tier = MagnitudeTier::TOP;
        let mut steps = 0;
        while let Some(lower) = tier.next_lower() {
            assert!(lower < tier);
            tier = lower;
            steps += 1;
        }
        assert_eq!(tier, MagnitudeTier::Unit);
        assert_eq!(steps, 5);
    }
}
