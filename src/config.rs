use std::time::Duration;

/// 各个动作之后的固定等待时间
///
/// 页面是异步渲染的，只能"动作 → 等待 → 观察"轮询
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettleDelays {
    /// 首次打开地图页面后的等待
    pub page_load: Duration,
    /// 填写搜索框之后、按回车之前的等待
    pub fill: Duration,
    /// 提交搜索之后的等待
    pub search: Duration,
    /// 每次滚动结果列表之后的等待
    pub scroll: Duration,
    /// 点击列表项之后等待详情面板加载
    pub detail: Duration,
}

impl Default for SettleDelays {
    fn default() -> Self {
        Self {
            page_load: Duration::from_millis(5000),
            fill: Duration::from_millis(3000),
            search: Duration::from_millis(5000),
            scroll: Duration::from_millis(3000),
            detail: Duration::from_millis(5000),
        }
    }
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 地图首页
    pub target_url: String,
    /// 浏览器调试端口，设置后连接已有浏览器而不是启动新浏览器
    pub browser_debug_port: Option<u16>,
    /// 启动新浏览器时是否使用无头模式
    pub headless: bool,
    /// 浏览器可执行文件路径（为空时由 chromiumoxide 自动查找）
    pub chrome_executable: Option<String>,
    /// 页面导航超时
    pub navigation_timeout: Duration,
    /// 任务文件
    pub job_file: String,
    /// 输出目录
    pub output_dir: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    pub delays: SettleDelays,
    /// 每次滚动的距离（像素）
    pub scroll_amount: i64,
    /// 单个任务发现阶段的最长时间，正常情况下不会触发
    pub discovery_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_url: "https://www.google.com/maps".to_string(),
            browser_debug_port: None,
            headless: false,
            chrome_executable: None,
            navigation_timeout: Duration::from_secs(60),
            job_file: "input.txt".to_string(),
            output_dir: "output".to_string(),
            verbose_logging: false,
            delays: SettleDelays::default(),
            scroll_amount: 10_000,
            discovery_timeout: Duration::from_secs(30 * 60),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            target_url: std::env::var("TARGET_URL").unwrap_or(default.target_url),
            browser_debug_port: std::env::var("BROWSER_DEBUG_PORT").ok().and_then(|v| v.parse().ok()).or(default.browser_debug_port),
            headless: env_parse("HEADLESS").unwrap_or(default.headless),
            chrome_executable: std::env::var("CHROME_EXECUTABLE").ok().filter(|v| !v.is_empty()).or(default.chrome_executable),
            navigation_timeout: env_millis("NAVIGATION_TIMEOUT_MS").unwrap_or(default.navigation_timeout),
            job_file: std::env::var("JOB_FILE").unwrap_or(default.job_file),
            output_dir: std::env::var("OUTPUT_DIR").unwrap_or(default.output_dir),
            verbose_logging: env_parse("VERBOSE_LOGGING").unwrap_or(default.verbose_logging),
            delays: SettleDelays {
                page_load: env_millis("PAGE_LOAD_MS").unwrap_or(default.delays.page_load),
                fill: env_millis("FILL_SETTLE_MS").unwrap_or(default.delays.fill),
                search: env_millis("SEARCH_SETTLE_MS").unwrap_or(default.delays.search),
                scroll: env_millis("SCROLL_SETTLE_MS").unwrap_or(default.delays.scroll),
                detail: env_millis("DETAIL_SETTLE_MS").unwrap_or(default.delays.detail),
            },
            scroll_amount: env_parse("SCROLL_AMOUNT").unwrap_or(default.scroll_amount),
            discovery_timeout: env_parse::<u64>("DISCOVERY_TIMEOUT_SECS")
                .map(Duration::from_secs)
                .unwrap_or(default.discovery_timeout),
        }
    }
}

fn env_parse<T: std::str::FromStr>(var_name: &str) -> Option<T> {
    std::env::var(var_name).ok().and_then(|v| v.parse().ok())
}

fn env_millis(var_name: &str) -> Option<Duration> {
    env_parse::<u64>(var_name).map(Duration::from_millis)
}
