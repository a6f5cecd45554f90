//! 任务处理流程 - 流程层
//!
//! 核心职责：定义"一个搜索任务"的完整处理流程
//!
//! 流程顺序：
//! 1. 搜索并滚动到收敛（Discoverer）
//! 2. 逐个抽取列表项（Extractor），失败的跳过
//! 3. 汇总到 RecordSet

use tracing::info;

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::PageDriver;
use crate::models::{ExtractOutcome, RecordSet};
use crate::services::{Discoverer, Extractor, TargetCount};
use crate::utils::logging::truncate_text;
use crate::workflow::job_ctx::JobCtx;

/// 任务处理流程
///
/// - 编排发现和抽取
/// - 不持有任何资源（page），页面驱动由调用方传入
/// - 严格串行：一个列表项抽取完才处理下一个
pub struct JobFlow {
    discoverer: Discoverer,
    extractor: Extractor,
    target: TargetCount,
}

impl JobFlow {
    pub fn new(config: &Config, target: TargetCount) -> Self {
        Self {
            discoverer: Discoverer::new(config),
            extractor: Extractor::new(config),
            target,
        }
    }

    pub fn from_parts(discoverer: Discoverer, extractor: Extractor, target: TargetCount) -> Self {
        Self {
            discoverer,
            extractor,
            target,
        }
    }

    pub async fn run<D: PageDriver>(&self, driver: &D, ctx: &JobCtx) -> AppResult<RecordSet> {
        info!("{} 🔍 搜索: {} (目标数量: {})", ctx, ctx.job, self.target);

        let discovery = self.discoverer.discover(driver, &ctx.job, self.target).await?;
        let total = discovery.handles.len();
        let mut records = RecordSet::new(ctx.job.clone());

        for (index, handle) in discovery.handles.into_iter().enumerate() {
            let listing_index = index + 1;
            let outcome = self
                .extractor
                .extract(driver, handle, &ctx.job, listing_index)
                .await;

            if let ExtractOutcome::Extracted(record) = &outcome {
                info!(
                    "{} ✓ {}/{} {}",
                    ctx,
                    listing_index,
                    total,
                    truncate_text(&record.name, 60)
                );
            }
            records.collect(outcome);
        }

        Ok(records)
    }
}
