//! 日志工具模块
//!
//! 提供日志初始化和格式化输出的辅助函数

use std::path::Path;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::orchestrator::{RunOptions, RunStats};

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config, options: &RunOptions) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 地图商户抓取");
    info!("🌐 目标页面: {}", config.target_url);
    info!("📊 每个任务目标数量: {}", options.target);
    info!("📁 输出目录: {}", config.output_dir);
    info!("{}", "=".repeat(60));
}

/// 记录任务加载信息
pub fn log_jobs_loaded(total: usize) {
    info!("✓ 共 {} 个搜索任务，将按顺序依次处理", total);
}

/// 打印最终统计信息
pub fn print_final_stats(stats: &RunStats, output_dir: &Path) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!(
        "✅ 任务成功: {}/{}",
        stats.jobs_succeeded,
        stats.jobs_succeeded + stats.jobs_failed
    );
    info!("❌ 任务失败: {}", stats.jobs_failed);
    info!("📄 记录: {} 条 (跳过 {} 个列表项)", stats.records, stats.skipped);
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", output_dir.display());
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_text("咖啡店咖啡店", 3), "咖啡店...");
        assert_eq!(truncate_text("short", 10), "short");
    }
}
