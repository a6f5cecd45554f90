pub mod connection;
pub mod launch;

pub use connection::connect_to_browser;
pub use launch::launch_browser;

use chromiumoxide::{Browser, Page};

use crate::config::Config;
use crate::error::AppResult;

/// 按配置打开浏览器会话：设置了调试端口就连接已有浏览器，否则启动新浏览器
pub async fn open_session(config: &Config) -> AppResult<(Browser, Page)> {
    match config.browser_debug_port {
        Some(port) => connect_to_browser(port).await,
        None => launch_browser(config).await,
    }
}
