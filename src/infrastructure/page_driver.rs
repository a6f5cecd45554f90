//! 页面驱动能力 - 基础设施层
//!
//! 发现与抽取逻辑只依赖这里的 `PageDriver` trait，不直接接触 chromiumoxide。

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::AppResult;

/// 元素定位表达式（XPath）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locator(&'static str);

impl Locator {
    pub const fn xpath(expr: &'static str) -> Self {
        Self(expr)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// 页面驱动
///
/// 职责：
/// - 持有唯一的页面会话
/// - 只暴露导航、定位、读取、点击、滚动、等待能力
/// - 不认识 SearchJob / Record
///
/// 所有操作都按顺序 await，对调用方来说等同于阻塞调用。
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// 页面元素句柄，只在当前任务的发现阶段内有效
    type Handle: Send + Sync;

    async fn navigate_to(&self, url: &str) -> AppResult<()>;

    /// 清空输入框后填入文本
    async fn fill_input(&self, locator: &Locator, text: &str) -> AppResult<()>;

    /// 在当前焦点元素上按回车
    async fn press_enter(&self) -> AppResult<()>;

    /// 滚动结果列表
    async fn scroll(&self, amount: i64) -> AppResult<()>;

    /// 鼠标悬停到第一个匹配元素上，没有匹配时返回 `false`
    async fn hover(&self, locator: &Locator) -> AppResult<bool>;

    async fn locate_all(&self, locator: &Locator) -> AppResult<Vec<Self::Handle>>;

    async fn count(&self, locator: &Locator) -> AppResult<usize>;

    async fn get_attribute(&self, handle: &Self::Handle, name: &str) -> AppResult<Option<String>>;

    /// 元素的可见文本，没有文本时返回空字符串
    async fn get_text(&self, handle: &Self::Handle) -> AppResult<String>;

    async fn click(&self, handle: &Self::Handle) -> AppResult<()>;

    async fn wait(&self, duration: Duration);
}
