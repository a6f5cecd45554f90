//! 详情面板字段表
//!
//! 每个字段由"定位 + 读取方式 + 解析器"描述，抽取服务对整张表执行同一套流程。
//! 没有匹配元素时字段取空值。

use std::fmt;

use crate::infrastructure::Locator;
use crate::models::{Parsed, Record};
use crate::services::selectors;

/// 详情面板里的字段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Address,
    Website,
    PhoneNumber,
    ReviewsCount,
    ReviewsAverage,
    Subcategory,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Address => "address",
            Field::Website => "website",
            Field::PhoneNumber => "phone_number",
            Field::ReviewsCount => "reviews_count",
            Field::ReviewsAverage => "reviews_average",
            Field::Subcategory => "subcategory",
        };
        f.write_str(name)
    }
}

/// 从匹配元素上读取什么
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    Text,
    Attribute(&'static str),
}

/// 原始文本的解析方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldParser {
    /// 原样保留
    Text,
    /// 去掉首尾空白
    TrimmedText,
    /// "1,234 reviews" → 1234
    ReviewCount,
    /// "4,5 stars" → 4.5
    Rating,
}

/// 字段值
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Integer(u64),
    Float(f64),
    /// 空值（元素不存在）
    Empty,
}

/// 解析失败
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    pub raw: String,
}

impl FieldParser {
    pub fn parse(self, raw: &str) -> Result<FieldValue, ParseFailure> {
        let failure = || ParseFailure {
            raw: raw.to_string(),
        };
        match self {
            FieldParser::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldParser::TrimmedText => Ok(FieldValue::Text(raw.trim().to_string())),
            FieldParser::ReviewCount => parse_review_count(raw)
                .map(FieldValue::Integer)
                .ok_or_else(failure),
            FieldParser::Rating => parse_rating(raw).map(FieldValue::Float).ok_or_else(failure),
        }
    }
}

/// 评论数：取第一个词，去掉千位分隔逗号，按整数解析
pub fn parse_review_count(text: &str) -> Option<u64> {
    let first = text.split_whitespace().next()?;
    first.replace(',', "").trim().parse().ok()
}

/// 评分：取第一个词，逗号小数点换成句点，按浮点数解析
pub fn parse_rating(label: &str) -> Option<f64> {
    let first = label.split_whitespace().next()?;
    first.replace(',', ".").trim().parse().ok()
}

/// 字段描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub locator: Locator,
    pub source: FieldSource,
    pub parser: FieldParser,
}

impl FieldSpec {
    const fn new(field: Field, locator: Locator, source: FieldSource, parser: FieldParser) -> Self {
        Self {
            field,
            locator,
            source,
            parser,
        }
    }

    /// 把字段值写入记录，空值写入该字段的空值
    pub fn apply(&self, record: &mut Record, value: FieldValue) {
        match (self.field, value) {
            (Field::Address, value) => record.address = value.into_text(),
            (Field::Website, value) => record.website = value.into_text(),
            (Field::PhoneNumber, value) => record.phone_number = value.into_text(),
            (Field::Subcategory, value) => record.subcategory = value.into_text(),
            (Field::ReviewsCount, FieldValue::Integer(n)) => {
                record.reviews_count = Parsed::Value(n)
            }
            (Field::ReviewsCount, _) => record.reviews_count = Parsed::Empty,
            (Field::ReviewsAverage, FieldValue::Float(x)) => {
                record.reviews_average = Parsed::Value(x)
            }
            (Field::ReviewsAverage, _) => record.reviews_average = Parsed::Empty,
        }
    }
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Text(s) => s,
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::Float(x) => x.to_string(),
            FieldValue::Empty => String::new(),
        }
    }
}

/// 详情面板的全部字段（名称除外，名称读自列表项本身）
pub const DETAIL_FIELDS: [FieldSpec; 6] = [
    FieldSpec::new(Field::Address, selectors::ADDRESS, FieldSource::Text, FieldParser::Text),
    FieldSpec::new(Field::Website, selectors::WEBSITE, FieldSource::Text, FieldParser::Text),
    FieldSpec::new(
        Field::PhoneNumber,
        selectors::PHONE_NUMBER,
        FieldSource::Text,
        FieldParser::Text,
    ),
    FieldSpec::new(
        Field::ReviewsCount,
        selectors::REVIEWS_COUNT,
        FieldSource::Text,
        FieldParser::ReviewCount,
    ),
    FieldSpec::new(
        Field::ReviewsAverage,
        selectors::REVIEWS_AVERAGE,
        FieldSource::Attribute(selectors::LABEL_ATTRIBUTE),
        FieldParser::Rating,
    ),
    FieldSpec::new(
        Field::Subcategory,
        selectors::SUBCATEGORY,
        FieldSource::Text,
        FieldParser::TrimmedText,
    ),
];
