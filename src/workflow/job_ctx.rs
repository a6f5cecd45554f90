//! 任务处理上下文
//!
//! 封装"我正在处理第几个任务、是哪个任务"这一信息

use std::fmt::Display;

use crate::models::SearchJob;

/// 任务处理上下文
#[derive(Debug, Clone)]
pub struct JobCtx {
    /// 任务序号（从 1 开始，仅用于日志显示）
    pub job_index: usize,

    /// 任务总数
    pub job_total: usize,

    pub job: SearchJob,
}

impl JobCtx {
    pub fn new(job_index: usize, job_total: usize, job: SearchJob) -> Self {
        Self {
            job_index,
            job_total,
            job,
        }
    }
}

impl Display for JobCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[任务 {}/{}]", self.job_index, self.job_total)
    }
}
