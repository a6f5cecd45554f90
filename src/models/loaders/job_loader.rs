use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

use crate::error::{AppResult, ConfigError};
use crate::models::search_job::SearchJob;

/// 解析任务文件中的一行：`category,locality,region`
///
/// 每个字段去掉首尾空白，字段数不等于 3 时返回 None
pub fn parse_job_line(line: &str) -> Option<SearchJob> {
    let parts: Vec<&str> = line.trim().split(',').map(str::trim).collect();
    match parts.as_slice() {
        [category, locality, region] => Some(SearchJob::new(*category, *locality, *region)),
        _ => None,
    }
}

/// 解析整个任务文件，格式不对的行直接丢弃
pub fn parse_job_file(content: &str) -> Vec<SearchJob> {
    content.lines().filter_map(parse_job_line).collect()
}

/// 读取任务文件；文件不存在时返回空列表
pub async fn load_job_file(path: &Path) -> AppResult<Vec<SearchJob>> {
    match fs::read_to_string(path).await {
        Ok(content) => {
            let jobs = parse_job_file(&content);
            tracing::debug!("从 {} 读取到 {} 个任务", path.display(), jobs.len());
            Ok(jobs)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("任务文件不存在: {}", path.display());
            Ok(Vec::new())
        }
        Err(source) => Err(ConfigError::JobFileRead {
            path: path.display().to_string(),
            source,
        }
        .into()),
    }
}

/// 命令行指定的单个搜索
#[derive(Debug, Clone, Default)]
pub struct SearchArgs {
    pub category: Option<String>,
    pub locality: String,
    pub region: String,
}

/// 按顺序执行的任务队列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobQueue {
    jobs: Vec<SearchJob>,
}

impl JobQueue {
    /// 构建任务队列
    ///
    /// 命令行给出了类别时只执行这一个任务，否则读取任务文件；
    /// 两者都没有产生任务时返回致命的配置错误
    pub async fn build(search: &SearchArgs, job_file: &Path) -> AppResult<Self> {
        let jobs = match search.category.as_deref().filter(|c| !c.is_empty()) {
            Some(category) => vec![SearchJob::new(
                category,
                search.locality.as_str(),
                search.region.as_str(),
            )],
            None => load_job_file(job_file).await?,
        };

        if jobs.is_empty() {
            return Err(ConfigError::NoJobs {
                job_file: job_file.display().to_string(),
            }
            .into());
        }

        Ok(Self { jobs })
    }

    pub fn from_jobs(jobs: Vec<SearchJob>) -> Self {
        Self { jobs }
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchJob> {
        self.jobs.iter()
    }
}

impl<'a> IntoIterator for &'a JobQueue {
    type Item = &'a SearchJob;
    type IntoIter = std::slice::Iter<'a, SearchJob>;

    fn into_iter(self) -> Self::IntoIter {
        self.jobs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn line_fields_are_trimmed() {
        let job = parse_job_line("  bakery ,  Springfield,IL  ").unwrap();
        assert_eq!(job, SearchJob::new("bakery", "Springfield", "IL"));
    }

    #[test]
    fn lines_with_wrong_field_count_are_dropped() {
        let content = "bakery, Springfield, IL\nbad,line\n\na,b,c,d\nplumber,Austin,TX\n";
        let jobs = parse_job_file(content);
        assert_eq!(
            jobs,
            vec![
                SearchJob::new("bakery", "Springfield", "IL"),
                SearchJob::new("plumber", "Austin", "TX"),
            ]
        );
    }

    #[test]
    fn empty_fields_still_count() {
        assert_eq!(parse_job_line("bakery,,"), Some(SearchJob::new("bakery", "", "")));
    }

    #[tokio::test]
    async fn command_line_search_wins_over_file() {
        let search = SearchArgs {
            category: Some("dentist".into()),
            ..Default::default()
        };
        let queue = JobQueue::build(&search, Path::new("does/not/exist.txt"))
            .await
            .unwrap();
        assert_eq!(queue.iter().collect::<Vec<_>>(), [&SearchJob::new("dentist", "", "")]);
    }

    #[tokio::test]
    async fn missing_sources_is_a_config_error() {
        let err = JobQueue::build(&SearchArgs::default(), Path::new("does/not/exist.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::NoJobs { .. })));
    }

    #[tokio::test]
    async fn empty_category_falls_back_to_file() {
        let search = SearchArgs {
            category: Some(String::new()),
            ..Default::default()
        };
        let err = JobQueue::build(&search, Path::new("does/not/exist.txt"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::NoJobs { .. })));
    }
}
