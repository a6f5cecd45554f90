use std::fmt;

use serde::{Serialize, Serializer};

use crate::models::search_job::SearchJob;

/// 可能缺失的解析结果
///
/// 缺失时导出为空字符串，保证每条记录的列都一样
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Parsed<T> {
    Value(T),
    #[default]
    Empty,
}

impl<T> Parsed<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Parsed::Value(v) => Some(v),
            Parsed::Empty => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Parsed::Empty)
    }
}

impl<T> From<Option<T>> for Parsed<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Parsed::Empty, Parsed::Value)
    }
}

impl<T: Serialize> Serialize for Parsed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Parsed::Value(v) => v.serialize(serializer),
            Parsed::Empty => serializer.serialize_str(""),
        }
    }
}

/// 一家商户的抽取结果
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Record {
    pub name: String,
    pub address: String,
    pub website: String,
    pub phone_number: String,
    pub reviews_count: Parsed<u64>,
    pub reviews_average: Parsed<f64>,
    pub category: String,
    pub subcategory: String,
    pub city: String,
    pub state: String,
    /// 由地址推导；地址为空时为 None（导出为空单元格）
    pub area: Option<String>,
}

/// 表格单元格
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(u64),
    Float(f64),
    Empty,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Integer(n) => write!(f, "{}", n),
            // 4.0 输出为 "4.0" 而不是 "4"
            Cell::Float(x) => write!(f, "{:?}", x),
            Cell::Empty => Ok(()),
        }
    }
}

impl Record {
    /// 导出列顺序
    pub const COLUMNS: [&'static str; 11] = [
        "name",
        "address",
        "website",
        "phone_number",
        "reviews_count",
        "reviews_average",
        "category",
        "subcategory",
        "city",
        "state",
        "area",
    ];

    /// 只带任务字段的空记录，其余字段都是空值
    pub fn for_job(job: &SearchJob) -> Self {
        Self {
            category: job.category.clone(),
            city: job.locality.clone(),
            state: job.region.clone(),
            ..Default::default()
        }
    }

    /// 按 `COLUMNS` 的顺序展开成一行
    pub fn to_row(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.name.clone()),
            Cell::Text(self.address.clone()),
            Cell::Text(self.website.clone()),
            Cell::Text(self.phone_number.clone()),
            self.reviews_count.value().map_or(Cell::Empty, |n| Cell::Integer(*n)),
            self.reviews_average.value().map_or(Cell::Empty, |x| Cell::Float(*x)),
            Cell::Text(self.category.clone()),
            Cell::Text(self.subcategory.clone()),
            Cell::Text(self.city.clone()),
            Cell::Text(self.state.clone()),
            self.area.clone().map_or(Cell::Empty, Cell::Text),
        ]
    }
}

/// 从地址推导区域：取前两段（逗号分隔），只有一段时取整段
pub fn derive_area(address: &str) -> Option<String> {
    if address.is_empty() {
        return None;
    }
    let head: Vec<&str> = address.split(',').take(2).collect();
    Some(head.join(",").trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_takes_first_two_segments() {
        assert_eq!(
            derive_area("12 Main St, Springfield, IL").as_deref(),
            Some("12 Main St, Springfield")
        );
    }

    #[test]
    fn area_single_segment_is_trimmed() {
        assert_eq!(derive_area("Remote").as_deref(), Some("Remote"));
        assert_eq!(derive_area("  Remote  ").as_deref(), Some("Remote"));
    }

    #[test]
    fn area_absent_for_empty_address() {
        assert_eq!(derive_area(""), None);
    }

    #[test]
    fn area_two_segments_kept_whole() {
        assert_eq!(derive_area(" Springfield, IL ").as_deref(), Some("Springfield, IL"));
    }

    #[test]
    fn record_for_job_copies_scope_fields() {
        let job = SearchJob::new("bakery", "Springfield", "IL");
        let record = Record::for_job(&job);
        assert_eq!(record.category, "bakery");
        assert_eq!(record.city, "Springfield");
        assert_eq!(record.state, "IL");
        assert!(record.reviews_count.is_empty());
        assert!(record.reviews_average.is_empty());
        assert_eq!(record.area, None);
    }

    #[test]
    fn row_has_fixed_width_and_renders_sentinels_as_empty() {
        let record = Record {
            name: "Joe's".into(),
            reviews_average: Parsed::Value(4.0),
            ..Default::default()
        };
        let row = record.to_row();
        assert_eq!(row.len(), Record::COLUMNS.len());
        let rendered: Vec<String> = row.iter().map(ToString::to_string).collect();
        assert_eq!(rendered[0], "Joe's");
        assert_eq!(rendered[4], "");
        assert_eq!(rendered[5], "4.0");
        assert_eq!(rendered[10], "");
    }

    #[test]
    fn parsed_serializes_empty_as_empty_string() {
        let empty: Parsed<u64> = Parsed::Empty;
        assert_eq!(serde_json::to_string(&empty).unwrap(), "\"\"");
        assert_eq!(serde_json::to_string(&Parsed::Value(12u64)).unwrap(), "12");
    }
}
