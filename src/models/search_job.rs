use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static UNSAFE_FILENAME_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\-]").expect("静态正则表达式"));

/// 一次搜索任务：类别 + 城市 + 州/地区
///
/// 创建后不再修改，它产生的每条记录都带上这三个字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchJob {
    pub category: String,
    pub locality: String,
    pub region: String,
}

impl SearchJob {
    pub fn new(
        category: impl Into<String>,
        locality: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            locality: locality.into(),
            region: region.into(),
        }
    }

    /// 填入搜索框的查询语句
    pub fn query(&self) -> String {
        format!("{}, {}, {}", self.category, self.locality, self.region)
    }

    /// 导出文件名（不含扩展名）
    pub fn output_stem(&self) -> String {
        safe_filename(&format!(
            "google_maps_data_{}_{}_{}",
            self.category, self.locality, self.region
        ))
    }
}

impl fmt::Display for SearchJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query())
    }
}

/// 空格换成下划线，其余非单词字符（连字符除外）也换成下划线
pub fn safe_filename(name: &str) -> String {
    let name = name.trim().replace(' ', "_");
    UNSAFE_FILENAME_CHARS.replace_all(&name, "_").into_owned()
}
