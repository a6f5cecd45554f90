use std::fmt;

use crate::models::record::Record;

/// 单个列表项的抽取结果
#[derive(Debug, Clone, PartialEq)]
pub enum ExtractOutcome {
    /// 抽取成功
    Extracted(Record),
    /// 跳过（不会中断当前任务）
    Skipped(SkipReason),
}

impl ExtractOutcome {
    pub fn record(&self) -> Option<&Record> {
        match self {
            ExtractOutcome::Extracted(record) => Some(record),
            ExtractOutcome::Skipped(_) => None,
        }
    }
}

/// 跳过原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipReason {
    /// 列表项在本次发现结果中的序号（从 1 开始）
    pub listing_index: usize,
    pub message: String,
}

impl SkipReason {
    pub fn new(listing_index: usize, message: impl Into<String>) -> Self {
        Self {
            listing_index,
            message: message.into(),
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "列表项 #{}: {}", self.listing_index, self.message)
    }
}
