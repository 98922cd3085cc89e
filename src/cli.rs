//! ff 工具的命令行接口
//!
//! 本模块提供了命令行参数解析和验证功能，
//! 并把参数转换为显式的 `FindOptions` 配置。

use std::path::{Component, Path, PathBuf};
use std::str::FromStr;
use clap::Parser;
use crate::errors::{FindError, FindResult};
use crate::finder::options::{Delimiter, FindOptions, Mode};

/// 按名称查找文件和目录，并可对每个结果执行命令
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 匹配模式（未使用 --pattern 时为第一个参数），其余为源目录（默认：当前目录）
    #[arg(value_name = "PATTERN | SOURCE")]
    pub args: Vec<String>,

    /// 匹配模式
    #[arg(short = 'p', long)]
    pub pattern: Option<String>,

    /// 源目录（可多次指定）
    #[arg(short = 's', long = "source", value_name = "DIR")]
    pub sources: Vec<String>,

    /// 把模式当作正则表达式
    #[arg(short = 'g', long)]
    pub regexp: bool,

    /// 忽略大小写（默认区分大小写）
    #[arg(short = 'i', long)]
    pub ignorecase: bool,

    /// 正则多行模式
    #[arg(short = 'l', long)]
    pub regex_multiline: bool,

    /// 正则中 `.` 匹配换行
    #[arg(short = 'd', long)]
    pub regex_dotall: bool,

    /// 模式匹配名称开头（正则模式下忽略）
    #[arg(short = 'B', long)]
    pub begin: bool,

    /// 模式匹配名称结尾（正则模式下忽略）
    #[arg(short = 'E', long)]
    pub end: bool,

    /// 反向匹配
    #[arg(short = 'v', long)]
    pub invert_match: bool,

    /// 匹配对象：files、dirs 或 all
    #[arg(
        short = 'm',
        long,
        value_name = "MODE",
        default_value = "all",
        value_parser = Mode::from_str
    )]
    pub mode: Mode,

    /// 对每个结果执行命令（按 shell 规则拆分）；支持 {path}、{dirname}、{basename} 占位符
    #[arg(short = 'x', long = "exec", value_name = "COMMAND", allow_hyphen_values = true)]
    pub exec: Option<String>,

    /// 执行前显示命令
    #[arg(long)]
    pub verbose_exec: bool,

    /// 每次执行前询问
    #[arg(long)]
    pub interactive_exec: bool,

    /// 不显示结果（配合 --exec 使用）
    #[arg(long)]
    pub no_display: bool,

    /// 用二进制零分隔结果（配合 xargs -0 使用）
    #[arg(short = '0', long)]
    pub print0: bool,

    /// 在结果前加上 'd: '（目录）或 'f: '（文件）
    #[arg(long)]
    pub prefix: bool,

    /// 最大搜索深度
    #[arg(long, value_name = "NUM")]
    pub max_depth: Option<usize>,

    /// 跟随符号链接
    #[arg(short = 'L', long)]
    pub follow_links: bool,

    /// 启用调试日志
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// 构建查找选项
    pub fn build_options(&self) -> FindResult<FindOptions> {
        self.validate()?;

        let mut positional = self.args.iter();
        let pattern = match &self.pattern {
            Some(pattern) => pattern.clone(),
            None => positional.next().cloned().ok_or(FindError::MissingPattern)?,
        };

        let mut sources: Vec<&str> = self.sources.iter().map(String::as_str).collect();
        sources.extend(positional.map(String::as_str));
        if sources.is_empty() {
            sources.push(".");
        }
        let sources = sources
            .into_iter()
            .map(absolute_source)
            .collect::<FindResult<Vec<_>>>()?;

        let execute = self.exec.as_deref().map(split_command).transpose()?;

        Ok(FindOptions::new()
            .with_pattern(pattern)
            .with_regex(self.regexp)
            .with_ignore_case(self.ignorecase)
            .with_multiline(self.regex_multiline)
            .with_dot_all(self.regex_dotall)
            .with_anchors(self.begin, self.end)
            .with_mode(self.mode)
            .with_invert_match(self.invert_match)
            .with_sources(sources)
            .with_execute(execute)
            .with_verbose_exec(self.verbose_exec)
            .with_interactive_exec(self.interactive_exec)
            .with_display(!self.no_display)
            .with_delimiter(if self.print0 { Delimiter::Null } else { Delimiter::Newline })
            .with_prefix(self.prefix)
            .with_max_depth(self.max_depth)
            .with_follow_links(self.follow_links))
    }

    /// 验证命令行参数
    pub fn validate(&self) -> FindResult<()> {
        if self.pattern.is_none() && self.args.is_empty() {
            return Err(FindError::MissingPattern);
        }

        if let Some(exec) = &self.exec {
            if exec.trim().is_empty() {
                return Err(FindError::EmptyCommand);
            }
        }

        Ok(())
    }
}

/// 按 shell 规则把命令字符串拆分为参数列表
fn split_command(command: &str) -> FindResult<Vec<String>> {
    let tokens = shlex::split(command)
        .ok_or_else(|| FindError::InvalidCommand(command.to_string()))?;
    if tokens.is_empty() {
        return Err(FindError::EmptyCommand);
    }
    Ok(tokens)
}

/// 检查源目录并转换为绝对路径
fn absolute_source(source: &str) -> FindResult<PathBuf> {
    let path = Path::new(source);
    if !path.is_dir() {
        return Err(FindError::InvalidSource(path.to_path_buf()));
    }
    let absolute = std::path::absolute(path).map_err(|source| FindError::FilesystemError {
        source,
        path: path.to_path_buf(),
    })?;
    Ok(normalize(&absolute))
}

/// 按词法规则去掉 `.` 和 `..` 组件，不解析符号链接
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}
