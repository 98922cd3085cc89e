use std::time::Instant;
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use rust_ff::cli::Cli;
use rust_ff::finder::Finder;

fn main() -> Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 初始化日志
    env_logger::Builder::new()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    info!("开始运行 rust-ff");
    let start_time = Instant::now();

    // 配置错误在遍历开始前报告
    let options = cli.build_options().context("无效的参数")?;
    debug!("配置: {:?}", options);
    let finder = Finder::new(options).context("创建名称过滤器失败")?;

    let stats = finder.run().context("搜索失败")?;

    let elapsed = start_time.elapsed();
    info!(
        "搜索完成，测试 {} 个条目，选中 {} 个，耗时 {:.2?}",
        stats.tested, stats.selected, elapsed
    );

    Ok(())
}
