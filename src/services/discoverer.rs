//! 列表发现服务 - 业务能力层
//!
//! 只负责"搜索并把结果列表滚动到收敛"，不关心抽取

use std::time::Duration;

use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::AppResult;
use crate::infrastructure::PageDriver;
use crate::models::SearchJob;
use crate::services::convergence::{ConvergenceState, StopReason, TargetCount};
use crate::services::selectors;

/// 发现结果
#[derive(Debug)]
pub struct Discovery<H> {
    pub handles: Vec<H>,
    pub reason: StopReason,
    /// 滚动 + 计数的轮数
    pub polls: usize,
}

/// 列表发现服务
///
/// 职责：
/// - 提交搜索
/// - 反复"滚动 → 等待 → 计数"，直到达到目标数量或列表不再增长
/// - 只处理单个任务
pub struct Discoverer {
    fill_settle: Duration,
    search_settle: Duration,
    scroll_settle: Duration,
    scroll_amount: i64,
    timeout: Duration,
}

impl Discoverer {
    pub fn new(config: &Config) -> Self {
        Self {
            fill_settle: config.delays.fill,
            search_settle: config.delays.search,
            scroll_settle: config.delays.scroll,
            scroll_amount: config.scroll_amount,
            timeout: config.discovery_timeout,
        }
    }

    /// 设置发现阶段的最长时间
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// 在搜索框中提交任务的查询语句
    pub async fn search<D: PageDriver>(&self, driver: &D, job: &SearchJob) -> AppResult<()> {
        let query = job.query();
        debug!("提交搜索: {}", query);

        driver.fill_input(&selectors::SEARCH_INPUT, &query).await?;
        driver.wait(self.fill_settle).await;
        driver.press_enter().await?;
        driver.wait(self.search_settle).await;

        // 鼠标停在结果列表上，滚动才会作用到列表
        if !driver.hover(&selectors::LISTING_ANCHOR).await? {
            debug!("搜索结果中没有可悬停的列表项");
        }
        Ok(())
    }

    /// 搜索并滚动结果列表直到收敛，返回列表项句柄
    pub async fn discover<D: PageDriver>(
        &self,
        driver: &D,
        job: &SearchJob,
        target: TargetCount,
    ) -> AppResult<Discovery<D::Handle>> {
        self.search(driver, job).await?;

        let started = Instant::now();
        let mut state = ConvergenceState::default();
        let mut polls = 0;

        let reason = loop {
            driver.scroll(self.scroll_amount).await?;
            driver.wait(self.scroll_settle).await;

            let current = driver.count(&selectors::LISTING_ANCHOR).await?;
            polls += 1;
            state = state.observe(current, target);

            match state {
                ConvergenceState::Converged { reason, .. } => break reason,
                ConvergenceState::Polling { .. } => {
                    info!("当前已发现: {}", current);
                    if started.elapsed() >= self.timeout {
                        warn!(
                            "⚠️ 发现阶段超过 {:?} 仍未收敛，使用当前已加载的 {} 个结果",
                            self.timeout, current
                        );
                        break StopReason::TimedOut;
                    }
                }
            }
        };

        let mut handles = driver.locate_all(&selectors::LISTING_ITEM).await?;
        if let Some(limit) = target.limit() {
            handles.truncate(limit);
        }

        match reason {
            StopReason::AtTarget => info!("✓ 已达到目标数量，共发现: {}", handles.len()),
            StopReason::Stabilized => info!("✓ 已加载全部可用结果，共发现: {}", handles.len()),
            StopReason::TimedOut => info!("共发现: {}", handles.len()),
        }

        Ok(Discovery {
            handles,
            reason,
            polls,
        })
    }
}
