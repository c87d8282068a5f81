//! zhnum 核心库
//!
//! 中文数字表达转换引擎：将汉字书写的金额与年月时长转换为数值
//!
//! 支持的字符集：传统位值计数（一..九 + 十百千万亿）、
//! 繁体/大写变体（壹貳叁…、拾佰仟萬億）以及相邻数字取均值的扩展写法

#![warn(rust_2018_idioms)]

pub mod amount;
pub mod duration;
pub mod error;
pub mod normalize;
pub mod tier;

// Re-export key types
pub use amount::AmountConverter;
pub use duration::DurationConverter;
pub use error::{ZhNumError, ZhNumResult};
pub use normalize::Normalizer;
pub use tier::MagnitudeTier;

/// 初始化日志系统
///
/// 生产模式: 静默运行，不启用日志
/// 调试模式 (--features debug-logs): 级别由 ZHNUM_LOG 环境变量控制
///
/// 注意: 此函数可以安全地多次调用
pub fn init_logging() {
    #[cfg(feature = "debug-logs")]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let filter = EnvFilter::try_from_env("ZHNUM_LOG")
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        // 使用 try_init() 代替 init()，避免重复初始化时 panic
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .try_init();
    }
}
