//! 地图页面的元素定位表达式

use crate::infrastructure::Locator;

/// 搜索框
pub const SEARCH_INPUT: Locator = Locator::xpath(r#"//input[@id="searchboxinput"]"#);

/// 结果列表中指向商户详情的链接，用于计数
pub const LISTING_ANCHOR: Locator =
    Locator::xpath(r#"//a[contains(@href, "https://www.google.com/maps/place")]"#);

/// 列表项本身（链接的父元素），点击它打开详情面板
pub const LISTING_ITEM: Locator =
    Locator::xpath(r#"//a[contains(@href, "https://www.google.com/maps/place")]/.."#);

/// 列表项上保存商户名称的属性；评分元素也用它保存 "4.5 stars" 之类的文本
pub const LABEL_ATTRIBUTE: &str = "aria-label";

pub const ADDRESS: Locator = Locator::xpath(
    r#"//button[@data-item-id="address"]//div[contains(@class, "fontBodyMedium")]"#,
);

pub const WEBSITE: Locator = Locator::xpath(
    r#"//a[@data-item-id="authority"]//div[contains(@class, "fontBodyMedium")]"#,
);

pub const PHONE_NUMBER: Locator = Locator::xpath(
    r#"//button[contains(@data-item-id, "phone:tel:")]//div[contains(@class, "fontBodyMedium")]"#,
);

pub const REVIEWS_COUNT: Locator =
    Locator::xpath(r#"//button[@jsaction="pane.reviewChart.moreReviews"]//span"#);

pub const REVIEWS_AVERAGE: Locator =
    Locator::xpath(r#"//div[@jsaction="pane.reviewChart.moreReviews"]//div[@role="img"]"#);

pub const SUBCATEGORY: Locator = Locator::xpath(
    r#"//div[contains(@aria-label, "stars")]/following-sibling::div[contains(@class, "fontBodyMedium")]"#,
);
