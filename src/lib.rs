//! 按名称查找文件和目录并执行动作的库
//!
//! 本库提供：
//! - glob 或正则表达式模式，只匹配条目的基本名称
//! - glob 默认做子串匹配，可用 `--begin`/`--end` 锚定
//! - 反向匹配以及文件/目录模式过滤
//! - 对每个结果显示路径、执行带占位符的命令，可交互确认
//!
//! ## 使用场景
//!
//! - 在交互式 shell 中快速定位文件
//! - 配合 `xargs -0` 的脚本
//! - 对一批文件执行相同的命令
//!
//! # 示例
//!
//! 基本用法：
//! ```no_run
//! use rust_ff::finder::{Finder, FindOptions, Mode};
//!
//! let options = FindOptions::new()
//!     .with_pattern("*.rs")
//!     .with_anchors(false, true)  // 必须以 .rs 结尾
//!     .with_mode(Mode::Files)
//!     .with_sources(vec![std::env::current_dir().unwrap()]);
//!
//! let finder = Finder::new(options).unwrap();
//! let stats = finder.run().unwrap();
//! println!("选中 {} 个文件", stats.selected);
//! ```
//!
//! 更多用法请参考各模块文档。

pub mod cli;
pub mod errors;
pub mod finder;

// Re-export main types for convenience
pub use errors::{FindError, FindResult};
pub use finder::Finder;
