use crate::models::outcome::{ExtractOutcome, SkipReason};
use crate::models::record::{Cell, Record};
use crate::models::search_job::SearchJob;

/// 导出用的表格
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

/// 一个任务的全部记录
///
/// 按发现顺序追加，不去重、不排序；记录追加后不再修改
#[derive(Debug, Clone)]
pub struct RecordSet {
    job: SearchJob,
    records: Vec<Record>,
    skipped: Vec<SkipReason>,
}

impl RecordSet {
    pub fn new(job: SearchJob) -> Self {
        Self {
            job,
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn job(&self) -> &SearchJob {
        &self.job
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    /// 记录一个列表项的结果：成功的追加记录，跳过的只保留原因
    pub fn collect(&mut self, outcome: ExtractOutcome) {
        match outcome {
            ExtractOutcome::Extracted(record) => self.records.push(record),
            ExtractOutcome::Skipped(reason) => self.skipped.push(reason),
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn skipped(&self) -> &[SkipReason] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 展开成表格，每条记录一行
    pub fn to_table(&self) -> Table {
        Table {
            headers: Record::COLUMNS.to_vec(),
            rows: self.records.iter().map(Record::to_row).collect(),
        }
    }
}
