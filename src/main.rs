use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use maps_listing_scraper::config::Config;
use maps_listing_scraper::models::{JobQueue, SearchArgs};
use maps_listing_scraper::orchestrator::{App, RunOptions};
use maps_listing_scraper::services::{ExportFormat, TargetCount};
use maps_listing_scraper::utils::logging;

#[derive(Debug, Parser)]
#[command(name = "maps_listing_scraper")]
#[command(about = "抓取地图搜索结果中的商户信息并导出为表格")]
struct Cli {
    /// 搜索类别；不指定时读取任务文件
    #[arg(short, long)]
    search: Option<String>,

    /// 城市（配合 --search 使用）
    #[arg(long, default_value = "")]
    locality: String,

    /// 州 / 地区（配合 --search 使用）
    #[arg(long, default_value = "")]
    region: String,

    /// 每个任务最多抓取的数量，不指定则抓取全部
    #[arg(short, long)]
    total: Option<usize>,

    /// 任务文件，每行 category,city,state
    #[arg(short, long, env = "JOB_FILE")]
    input: Option<PathBuf>,

    /// 输出目录
    #[arg(short, long, env = "OUTPUT_DIR")]
    output_dir: Option<String>,

    /// 导出格式
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
    format: ExportFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::from_env();
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }

    // 初始化日志
    logging::init(config.verbose_logging);

    // 构建任务队列（没有任务时在启动浏览器之前退出）
    let search = SearchArgs {
        category: cli.search,
        locality: cli.locality,
        region: cli.region,
    };
    let job_file = cli
        .input
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_default().join(&config.job_file));
    let jobs = JobQueue::build(&search, &job_file).await?;

    let options = RunOptions {
        target: TargetCount::from_total(cli.total),
        format: cli.format,
    };

    // 初始化并运行应用
    let app = App::initialize(config, options).await?;
    app.run(&jobs).await?;

    Ok(())
}
