//! 字段抽取服务 - 业务能力层
//!
//! 只负责"打开一个列表项并读取字段"，不关心列表从哪来

use std::time::Duration;

use tracing::{debug, error};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::PageDriver;
use crate::models::{derive_area, ExtractOutcome, Record, SearchJob, SkipReason};
use crate::services::field_table::{FieldSource, FieldSpec, FieldValue, DETAIL_FIELDS};
use crate::services::selectors;

/// 字段抽取服务
///
/// 职责：
/// - 点击列表项，等待详情面板
/// - 按字段表逐个读取，缺失的字段取空值
/// - 页面错误或数字解析失败只导致当前列表项被跳过
pub struct Extractor {
    detail_settle: Duration,
    fields: &'static [FieldSpec],
}

impl Extractor {
    pub fn new(config: &Config) -> Self {
        Self {
            detail_settle: config.delays.detail,
            fields: &DETAIL_FIELDS,
        }
    }

    /// 抽取一个列表项；句柄在这里被消耗
    ///
    /// 不会返回错误：失败时返回 `Skipped`
    pub async fn extract<D: PageDriver>(
        &self,
        driver: &D,
        handle: D::Handle,
        job: &SearchJob,
        listing_index: usize,
    ) -> ExtractOutcome {
        match self.try_extract(driver, &handle, job).await {
            Ok(record) => ExtractOutcome::Extracted(record),
            Err(e) => {
                error!("列表项 #{} 抽取失败: {}", listing_index, e);
                ExtractOutcome::Skipped(SkipReason::new(listing_index, e.to_string()))
            }
        }
    }

    async fn try_extract<D: PageDriver>(
        &self,
        driver: &D,
        handle: &D::Handle,
        job: &SearchJob,
    ) -> AppResult<Record> {
        let mut record = Record::for_job(job);

        // 名称在点击前读取，不受详情面板加载影响
        record.name = driver
            .get_attribute(handle, selectors::LABEL_ATTRIBUTE)
            .await?
            .unwrap_or_default();

        driver.click(handle).await?;
        driver.wait(self.detail_settle).await;

        for spec in self.fields {
            let value = self.read_field(driver, spec).await?;
            spec.apply(&mut record, value);
        }

        record.area = derive_area(&record.address);
        debug!("抽取完成: {}", record.name);
        Ok(record)
    }

    /// 读取单个字段；找不到元素时返回空值
    ///
    /// 页面错误和解析失败都会向上传播，使整个列表项被跳过
    async fn read_field<D: PageDriver>(&self, driver: &D, spec: &FieldSpec) -> AppResult<FieldValue> {
        match self.lookup(driver, spec).await? {
            Some(raw) => spec
                .parser
                .parse(&raw)
                .map_err(|e| AppError::field_parse(spec.field.to_string(), e.raw)),
            None => Ok(FieldValue::Empty),
        }
    }

    /// 取第一个匹配元素的文本或属性，没有匹配时返回 None
    async fn lookup<D: PageDriver>(&self, driver: &D, spec: &FieldSpec) -> AppResult<Option<String>> {
        if driver.count(&spec.locator).await? == 0 {
            return Ok(None);
        }
        let Some(first) = driver.locate_all(&spec.locator).await?.into_iter().next() else {
            return Ok(None);
        };
        let raw = match spec.source {
            FieldSource::Text => driver.get_text(&first).await?,
            FieldSource::Attribute(name) => driver.get_attribute(&first, name).await?.unwrap_or_default(),
        };
        Ok(Some(raw))
    }
}
