//! 任务队列处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责任务队列的处理和资源管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：打开浏览器会话、创建 ChromeDriver、打开地图首页
//! 2. **顺序执行**：一个任务完全结束（含导出）后才提交下一个搜索
//! 3. **资源管理**：持有 Browser 和 ChromeDriver，页面会话在所有任务间复用
//! 4. **全局统计**：汇总所有任务的处理结果
//!
//! 单个任务失败只记录日志，继续下一个任务。

use anyhow::{Context, Result};
use chromiumoxide::Browser;
use tracing::error;

use crate::browser;
use crate::config::Config;
use crate::infrastructure::{ChromeDriver, PageDriver};
use crate::models::JobQueue;
use crate::orchestrator::job_processor::process_job;
use crate::services::{ExportFormat, Exporter, TargetCount};
use crate::utils::logging::{log_jobs_loaded, log_startup, print_final_stats};
use crate::workflow::{JobCtx, JobFlow};

/// 运行选项（来自命令行）
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub target: TargetCount,
    pub format: ExportFormat,
}

/// 全部任务的统计
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub jobs_succeeded: usize,
    pub jobs_failed: usize,
    pub records: usize,
    pub skipped: usize,
}

/// 应用主结构
pub struct App {
    config: Config,
    options: RunOptions,
    _browser: Browser,
    driver: ChromeDriver,
}

impl App {
    /// 初始化应用：打开浏览器并进入地图首页
    pub async fn initialize(config: Config, options: RunOptions) -> Result<Self> {
        log_startup(&config, &options);

        let (browser, page) = browser::open_session(&config)
            .await
            .context("打开浏览器会话失败")?;
        let driver = ChromeDriver::new(page);

        driver
            .navigate_to(&config.target_url)
            .await
            .with_context(|| format!("打开 {} 失败", config.target_url))?;
        driver.wait(config.delays.page_load).await;

        Ok(Self {
            config,
            options,
            _browser: browser,
            driver,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self, jobs: &JobQueue) -> Result<RunStats> {
        let flow = JobFlow::new(&self.config, self.options.target);
        let exporter = Exporter::new(&self.config.output_dir, self.options.format);

        let stats = run_jobs(&self.driver, jobs, &flow, &exporter).await;
        print_final_stats(&stats, exporter.output_dir());

        Ok(stats)
    }
}

/// 按顺序处理所有任务，同一个页面会话在任务间复用
pub async fn run_jobs<D: PageDriver>(
    driver: &D,
    jobs: &JobQueue,
    flow: &JobFlow,
    exporter: &Exporter,
) -> RunStats {
    log_jobs_loaded(jobs.len());

    let mut stats = RunStats::default();
    for (index, job) in jobs.iter().enumerate() {
        let ctx = JobCtx::new(index + 1, jobs.len(), job.clone());

        match process_job(driver, flow, exporter, &ctx).await {
            Ok(job_stats) => {
                stats.jobs_succeeded += 1;
                stats.records += job_stats.extracted;
                stats.skipped += job_stats.skipped;
            }
            Err(e) => {
                error!("{} ❌ 处理过程中发生错误: {:#}", ctx, e);
                stats.jobs_failed += 1;
            }
        }
    }

    stats
}
