//! 错误类型
//!
//! 库内部统一使用 `AppError`，编排层和 main 再用 anyhow 包一层上下文。

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 配置错误（致命，发生在浏览器启动之前）
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
    /// 浏览器 / 页面操作错误
    #[error("浏览器错误: {0}")]
    Browser(#[from] BrowserError),
    /// 导出文件错误
    #[error("导出错误: {0}")]
    Export(#[from] ExportError),
    /// 列表项字段抽取错误
    #[error("抽取错误: {0}")]
    Extract(#[from] ExtractError),
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 命令行和任务文件都没有提供有效任务
    #[error(
        "没有可执行的搜索任务: 请使用 -s 指定搜索内容，或在 {job_file} 中按 category,city,state 格式添加任务"
    )]
    NoJobs { job_file: String },
    /// 任务文件存在但读取失败
    #[error("读取任务文件失败 ({path}): {source}")]
    JobFileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 浏览器相关错误
#[derive(Debug, Error)]
pub enum BrowserError {
    /// 连接已有浏览器失败
    #[error("无法连接到浏览器 (端口: {port}): {source}")]
    ConnectionFailed {
        port: u16,
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 启动浏览器失败
    #[error("启动浏览器失败: {reason}")]
    LaunchFailed { reason: String },
    /// 导航失败
    #[error("导航到 {url} 失败: {source}")]
    NavigationFailed {
        url: String,
        #[source]
        source: chromiumoxide::error::CdpError,
    },
    /// 找不到需要操作的元素
    #[error("找不到元素: {locator}")]
    ElementNotFound { locator: String },
    /// 元素句柄已失效（页面刷新、节点被移除等）
    #[error("元素已失效: {reason}")]
    StaleElement { reason: String },
    /// 执行脚本返回的结果无法解析
    #[error("脚本结果解析失败: {0}")]
    ScriptResult(#[from] serde_json::Error),
    /// 其他 CDP 协议错误
    #[error("CDP 错误: {0}")]
    Cdp(#[from] chromiumoxide::error::CdpError),
}

/// 导出错误
#[derive(Debug, Error)]
pub enum ExportError {
    /// 创建输出目录失败
    #[error("创建输出目录失败 ({path}): {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),
    #[error("XLSX 写入失败: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

/// 字段抽取错误
#[derive(Debug, Error)]
pub enum ExtractError {
    /// 元素存在，但文本无法按规则解析
    #[error("字段 {field} 无法解析: {raw:?}")]
    FieldParse { field: String, raw: String },
}

impl From<chromiumoxide::error::CdpError> for AppError {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        AppError::Browser(BrowserError::Cdp(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Browser(BrowserError::ScriptResult(err))
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建元素失效错误
    pub fn stale_element(reason: impl Into<String>) -> Self {
        AppError::Browser(BrowserError::StaleElement {
            reason: reason.into(),
        })
    }

    /// 创建元素未找到错误
    pub fn element_not_found(locator: impl Into<String>) -> Self {
        AppError::Browser(BrowserError::ElementNotFound {
            locator: locator.into(),
        })
    }
}

impl AppError {
    /// 创建字段解析失败错误
    pub fn field_parse(field: impl Into<String>, raw: impl Into<String>) -> Self {
        AppError::Extract(ExtractError::FieldParse {
            field: field.into(),
            raw: raw.into(),
        })
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
