//! Chrome 页面驱动 - 基础设施层
//!
//! 基于 chromiumoxide 的 `PageDriver` 实现，持有唯一的 Page 资源

use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::{Element, Page};
use tokio::time::sleep;
use tracing::debug;

use crate::error::{AppError, AppResult, BrowserError};
use crate::infrastructure::page_driver::{Locator, PageDriver};

/// Chrome 页面驱动
///
/// 职责：
/// - 持有唯一的 Page 资源
/// - 把 `PageDriver` 能力翻译成 CDP 调用
/// - 不认识 SearchJob / Record
pub struct ChromeDriver {
    page: Page,
}

impl ChromeDriver {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// 执行 JS 表达式并反序列化结果
    async fn eval_as<T: serde::de::DeserializeOwned>(&self, js_code: String) -> AppResult<T> {
        let result = self.page.evaluate(js_code).await?;
        let value = result.into_value::<T>()?;
        Ok(value)
    }
}

#[async_trait]
impl PageDriver for ChromeDriver {
    type Handle = Element;

    async fn navigate_to(&self, url: &str) -> AppResult<()> {
        debug!("导航到: {}", url);
        self.page.goto(url).await.map_err(|source| BrowserError::NavigationFailed {
            url: url.to_string(),
            source,
        })?;
        Ok(())
    }

    async fn fill_input(&self, locator: &Locator, text: &str) -> AppResult<()> {
        let input = self
            .page
            .find_xpath(locator.as_str())
            .await
            .map_err(|_| AppError::element_not_found(locator.as_str()))?;
        input.click().await?;
        input
            .call_js_fn("function() { this.value = ''; }", false)
            .await?;
        input.type_str(text).await?;
        Ok(())
    }

    async fn press_enter(&self) -> AppResult<()> {
        let focused = self
            .page
            .find_element(":focus")
            .await
            .map_err(|_| AppError::element_not_found(":focus"))?;
        focused.press_key("Enter").await?;
        Ok(())
    }

    async fn scroll(&self, amount: i64) -> AppResult<()> {
        // 结果列表是独立的滚动容器，找不到时退回到整个窗口
        let js_code = format!(
            r#"
            (() => {{
                const feed = document.querySelector('div[role="feed"]');
                if (feed) {{
                    feed.scrollBy(0, {amount});
                    return true;
                }}
                window.scrollBy(0, {amount});
                return false;
            }})()
            "#
        );
        let scrolled_feed: bool = self.eval_as(js_code).await?;
        debug!("滚动 {} 像素 (结果列表: {})", amount, scrolled_feed);
        Ok(())
    }

    async fn hover(&self, locator: &Locator) -> AppResult<bool> {
        let elements = self.page.find_xpaths(locator.as_str()).await?;
        match elements.first() {
            Some(element) => {
                element.hover().await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn locate_all(&self, locator: &Locator) -> AppResult<Vec<Element>> {
        let elements = self.page.find_xpaths(locator.as_str()).await?;
        Ok(elements)
    }

    async fn count(&self, locator: &Locator) -> AppResult<usize> {
        let js_code = format!(
            "document.evaluate({}, document, null, XPathResult.ORDERED_NODE_SNAPSHOT_TYPE, null).snapshotLength",
            serde_json::to_string(locator.as_str())?
        );
        self.eval_as(js_code).await
    }

    async fn get_attribute(&self, handle: &Element, name: &str) -> AppResult<Option<String>> {
        let value = handle
            .attribute(name)
            .await
            .map_err(|e| AppError::stale_element(e.to_string()))?;
        Ok(value)
    }

    async fn get_text(&self, handle: &Element) -> AppResult<String> {
        let text = handle
            .inner_text()
            .await
            .map_err(|e| AppError::stale_element(e.to_string()))?;
        Ok(text.unwrap_or_default())
    }

    async fn click(&self, handle: &Element) -> AppResult<()> {
        handle
            .click()
            .await
            .map_err(|e| AppError::stale_element(e.to_string()))?;
        Ok(())
    }

    async fn wait(&self, duration: Duration) {
        sleep(duration).await;
    }
}
