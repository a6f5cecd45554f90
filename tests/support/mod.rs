//! 测试用的内存页面
//!
//! 按脚本返回每一轮滚动后的列表数量，点击列表项后切换到该项的详情面板。

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use maps_listing_scraper::error::{AppError, AppResult};
use maps_listing_scraper::services::selectors;
use maps_listing_scraper::{Locator, PageDriver};

/// 详情面板里的一个元素
#[derive(Debug, Clone, Default)]
pub struct FakeElement {
    pub text: String,
    pub attributes: HashMap<String, String>,
}

impl FakeElement {
    pub fn text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Default::default()
        }
    }

    pub fn labelled(label: &str) -> Self {
        let mut attributes = HashMap::new();
        attributes.insert(selectors::LABEL_ATTRIBUTE.to_string(), label.to_string());
        Self {
            text: String::new(),
            attributes,
        }
    }
}

/// 一个列表项：名称 + 详情面板内容
#[derive(Debug, Clone, Default)]
pub struct FakeListing {
    pub label: Option<String>,
    pub detail: HashMap<&'static str, Vec<FakeElement>>,
    pub fail_click: bool,
    /// 读取这些字段时返回页面错误
    pub broken_fields: Vec<&'static str>,
}

impl FakeListing {
    pub fn named(name: &str) -> Self {
        Self {
            label: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn with(mut self, locator: Locator, element: FakeElement) -> Self {
        self.detail.entry(locator.as_str()).or_default().push(element);
        self
    }

    pub fn failing_click(mut self) -> Self {
        self.fail_click = true;
        self
    }

    pub fn broken(mut self, locator: Locator) -> Self {
        self.broken_fields.push(locator.as_str());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeHandle {
    Listing(usize),
    Detail { xpath: &'static str, index: usize },
}

#[derive(Debug, Default)]
struct State {
    listings: Vec<FakeListing>,
    /// 每次滚动后可见的列表数量
    count_script: VecDeque<usize>,
    visible: usize,
    active: Option<usize>,
    events: Vec<String>,
}

pub struct FakePage {
    state: Mutex<State>,
}

impl FakePage {
    /// `counts` 为每次滚动后的可见数量，脚本用完后保持最后一个值
    pub fn new(listings: Vec<FakeListing>, counts: &[usize]) -> Self {
        Self {
            state: Mutex::new(State {
                listings,
                count_script: counts.iter().copied().collect(),
                ..Default::default()
            }),
        }
    }

    /// 所有列表项一次性可见
    pub fn loaded(listings: Vec<FakeListing>) -> Self {
        let n = listings.len();
        Self::new(listings, &[n])
    }

    pub fn events(&self) -> Vec<String> {
        self.state.lock().unwrap().events.clone()
    }

    pub fn scrolls(&self) -> usize {
        self.events().iter().filter(|e| e.starts_with("scroll")).count()
    }

    fn record(&self, event: String) {
        self.state.lock().unwrap().events.push(event);
    }

    fn detail_element(&self, xpath: &str, index: usize) -> AppResult<FakeElement> {
        let state = self.state.lock().unwrap();
        let listing = state
            .active
            .and_then(|i| state.listings.get(i))
            .ok_or_else(|| AppError::stale_element("没有打开的详情面板"))?;
        if listing.broken_fields.iter().any(|broken| *broken == xpath) {
            return Err(AppError::stale_element(format!("读取失败: {}", xpath)));
        }
        listing
            .detail
            .get(xpath)
            .and_then(|elements| elements.get(index))
            .cloned()
            .ok_or_else(|| AppError::element_not_found(xpath))
    }
}

#[async_trait]
impl PageDriver for FakePage {
    type Handle = FakeHandle;

    async fn navigate_to(&self, url: &str) -> AppResult<()> {
        self.record(format!("navigate {}", url));
        Ok(())
    }

    async fn fill_input(&self, locator: &Locator, text: &str) -> AppResult<()> {
        self.record(format!("fill {} {}", locator, text));
        Ok(())
    }

    async fn press_enter(&self) -> AppResult<()> {
        self.record("enter".to_string());
        Ok(())
    }

    async fn scroll(&self, amount: i64) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(next) = state.count_script.pop_front() {
            state.visible = next.min(state.listings.len());
        }
        state.events.push(format!("scroll {}", amount));
        Ok(())
    }

    async fn hover(&self, locator: &Locator) -> AppResult<bool> {
        self.record(format!("hover {}", locator));
        Ok(!self.state.lock().unwrap().listings.is_empty())
    }

    async fn locate_all(&self, locator: &Locator) -> AppResult<Vec<FakeHandle>> {
        let state = self.state.lock().unwrap();
        if *locator == selectors::LISTING_ITEM || *locator == selectors::LISTING_ANCHOR {
            return Ok((0..state.visible).map(FakeHandle::Listing).collect());
        }
        let len = state
            .active
            .and_then(|i| state.listings.get(i))
            .and_then(|listing| listing.detail.get(locator.as_str()))
            .map_or(0, Vec::len);
        Ok((0..len)
            .map(|index| FakeHandle::Detail {
                xpath: locator.as_str(),
                index,
            })
            .collect())
    }

    async fn count(&self, locator: &Locator) -> AppResult<usize> {
        Ok(self.locate_all(locator).await?.len())
    }

    async fn get_attribute(&self, handle: &FakeHandle, name: &str) -> AppResult<Option<String>> {
        match handle {
            FakeHandle::Listing(i) => {
                let state = self.state.lock().unwrap();
                let listing = state
                    .listings
                    .get(*i)
                    .ok_or_else(|| AppError::stale_element(format!("列表项 {} 不存在", i)))?;
                Ok(if name == selectors::LABEL_ATTRIBUTE {
                    listing.label.clone()
                } else {
                    None
                })
            }
            FakeHandle::Detail { xpath, index } => {
                let element = self.detail_element(xpath, *index)?;
                Ok(element.attributes.get(name).cloned())
            }
        }
    }

    async fn get_text(&self, handle: &FakeHandle) -> AppResult<String> {
        match handle {
            FakeHandle::Listing(_) => Ok(String::new()),
            FakeHandle::Detail { xpath, index } => Ok(self.detail_element(xpath, *index)?.text),
        }
    }

    async fn click(&self, handle: &FakeHandle) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        if let FakeHandle::Listing(i) = handle {
            let fail = state.listings.get(*i).map_or(true, |l| l.fail_click);
            if fail {
                state.active = None;
                return Err(AppError::stale_element(format!("列表项 {} 已失效", i)));
            }
            state.active = Some(*i);
            state.events.push(format!("click {}", i));
        }
        Ok(())
    }

    async fn wait(&self, _duration: Duration) {}
}

/// 所有等待时间为 0 的配置
pub fn fast_config() -> maps_listing_scraper::Config {
    let mut config = maps_listing_scraper::Config::default();
    config.delays = maps_listing_scraper::config::SettleDelays {
        page_load: Duration::ZERO,
        fill: Duration::ZERO,
        search: Duration::ZERO,
        scroll: Duration::ZERO,
        detail: Duration::ZERO,
    };
    config
}

/// 一个详情完整的列表项
pub fn full_listing(name: &str, address: &str) -> FakeListing {
    FakeListing::named(name)
        .with(selectors::ADDRESS, FakeElement::text(address))
        .with(selectors::WEBSITE, FakeElement::text("example.com"))
        .with(selectors::PHONE_NUMBER, FakeElement::text("(217) 555-0100"))
        .with(selectors::REVIEWS_COUNT, FakeElement::text("1,234 reviews"))
        .with(selectors::REVIEWS_AVERAGE, FakeElement::labelled("4,5 stars "))
        .with(selectors::SUBCATEGORY, FakeElement::text(" Bakery "))
}
