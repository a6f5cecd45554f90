//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责任务调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 任务队列处理器
//! - 管理应用生命周期（初始化、运行）
//! - 持有浏览器资源（Browser、ChromeDriver）
//! - 按顺序执行任务队列
//! - 输出全局统计信息
//!
//! ### `job_processor` - 单个任务处理器
//! - 执行 `JobFlow`
//! - 导出记录集
//! - 输出单个任务的统计信息
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 JobQueue)
//!     ↓
//! job_processor (处理一个 SearchJob)
//!     ↓
//! workflow::JobFlow (发现 + 逐个抽取)
//!     ↓
//! services (能力层：discover / extract / export)
//!     ↓
//! infrastructure (基础设施：PageDriver)
//! ```

pub mod batch_processor;
pub mod job_processor;

// 重新导出主要类型
pub use batch_processor::{run_jobs, App, RunOptions, RunStats};
pub use job_processor::{process_job, JobStats};
