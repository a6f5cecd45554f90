//! 单个任务处理器 - 编排层
//!
//! ## 职责
//!
//! 1. **执行流程**：委托 `JobFlow` 完成发现和抽取
//! 2. **导出文件**：把记录集交给 `Exporter`
//! 3. **统计输出**：记录成功/跳过数量

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::infrastructure::PageDriver;
use crate::services::Exporter;
use crate::workflow::{JobCtx, JobFlow};

/// 单个任务的统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct JobStats {
    pub extracted: usize,
    pub skipped: usize,
    pub files: Vec<PathBuf>,
}

/// 处理单个任务：发现 → 抽取 → 导出
pub async fn process_job<D: PageDriver>(
    driver: &D,
    flow: &JobFlow,
    exporter: &Exporter,
    ctx: &JobCtx,
) -> Result<JobStats> {
    log_job_start(ctx);

    let records = flow
        .run(driver, ctx)
        .await
        .with_context(|| format!("{} 搜索失败: {}", ctx, ctx.job))?;

    for reason in records.skipped() {
        warn!("{} ⚠️ 已跳过 {}", ctx, reason);
    }

    let files = exporter
        .export(&records)
        .with_context(|| format!("{} 导出失败", ctx))?;

    let stats = JobStats {
        extracted: records.len(),
        skipped: records.skipped().len(),
        files,
    };
    log_job_complete(ctx, &stats);

    Ok(stats)
}

// ========== 日志辅助函数 ==========

fn log_job_start(ctx: &JobCtx) {
    info!("\n{}", "─".repeat(60));
    info!("{} 开始处理: {}", ctx, ctx.job);
}

fn log_job_complete(ctx: &JobCtx, stats: &JobStats) {
    info!(
        "{} 记录统计: 成功 {}, 跳过 {}",
        ctx, stats.extracted, stats.skipped
    );
    info!("{} ✅ 任务处理完成", ctx);
}
