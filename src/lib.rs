//! # Maps Listing Scraper
//!
//! 从地图网页中搜索商户列表、滚动到结果收敛、逐个打开详情并抽取字段，最后导出表格
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（Page），只暴露能力
//! - `PageDriver` - 页面能力 trait；`ChromeDriver` 是基于 chromiumoxide 的实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个任务或单个列表项
//! - `Discoverer` - 搜索 + 滚动收敛
//! - `Extractor` - 按字段表抽取一个列表项
//! - `Exporter` - 写 CSV / XLSX
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一个任务"的完整处理流程
//! - `JobCtx` - 上下文封装（任务序号 + SearchJob）
//! - `JobFlow` - 流程编排（discover → extract → RecordSet）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 任务队列处理器，管理浏览器资源
//! - `orchestrator/job_processor` - 单个任务处理器，执行流程并导出
//!
//! ## 模块结构

pub mod browser;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{ChromeDriver, Locator, PageDriver};
pub use models::{ExtractOutcome, JobQueue, Record, RecordSet, SearchJob};
pub use orchestrator::{App, RunOptions};
pub use workflow::{JobCtx, JobFlow};
