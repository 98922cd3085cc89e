//! 文件查找模块
//!
//! 这个模块把各部分串起来：对每个源目录进行遍历，
//! 按模式（文件/目录）过滤条目，再交给匹配-动作引擎处理。

pub mod action;
pub mod entry;
pub mod filter;
pub mod options;
pub mod pattern;
mod walker;

use std::io::Write;
use log::{debug, info};

pub use self::action::{ActionEngine, Confirm, Launcher, ProcessLauncher, PromptConfirm};
pub use self::entry::Entry;
pub use self::filter::{EntryFilter, ModeFilter, NameFilter};
pub use self::options::{Delimiter, FindOptions, Mode};
pub use self::pattern::{Matcher, PatternFlags};
pub use self::walker::FileWalkerIterator;
use crate::errors::FindResult;

/// 文件查找器
///
/// 持有不可变的配置和已编译的名称过滤器，对每个源目录做一次深度优先遍历。
#[derive(Debug)]
pub struct Finder {
    options: FindOptions,
    name_filter: NameFilter,
    mode_filter: ModeFilter,
}

/// 一次运行的统计信息
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FindStats {
    /// 参与匹配的条目数
    pub tested: usize,
    /// 被选中的条目数
    pub selected: usize,
}

impl Finder {
    /// 创建新的文件查找器实例，模式在这里编译一次
    pub fn new(options: FindOptions) -> FindResult<Self> {
        let name_filter = NameFilter::from_options(&options)?;
        debug!("Compiled pattern: {}", name_filter.matcher().as_str());
        let mode_filter = ModeFilter::new(options.mode);

        Ok(Self {
            options,
            name_filter,
            mode_filter,
        })
    }

    /// 遍历所有源目录，结果写到 stdout，确认从终端读取
    pub fn run(&self) -> FindResult<FindStats> {
        let stdout = std::io::stdout();
        self.run_with(stdout.lock(), PromptConfirm::terminal(), ProcessLauncher)
    }

    /// 使用注入的输出、确认和进程启动能力遍历所有源目录
    pub fn run_with<W, C, L>(&self, out: W, confirm: C, launcher: L) -> FindResult<FindStats>
    where
        W: Write,
        C: Confirm,
        L: Launcher,
    {
        let mut engine = ActionEngine::new(
            &self.options,
            self.name_filter.clone(),
            out,
            confirm,
            launcher,
        );
        let mut stats = FindStats::default();

        for source in &self.options.sources {
            info!("在路径中搜索: {}", source.display());
            debug!(
                "Filters: {}, {}",
                self.mode_filter.description(),
                self.name_filter.description()
            );

            for entry in FileWalkerIterator::new(source, &self.options) {
                if !self.mode_filter.matches(&entry) {
                    continue;
                }
                stats.tested += 1;
                if engine.process(&entry)? {
                    stats.selected += 1;
                }
            }
        }

        engine.flush()?;
        Ok(stats)
    }
}
