use anyhow::{Context, Result};
use resume_evaluate_submit::{logger, App, Config};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志
    if config.verbose_logging {
        logger::init_with_level("debug");
    } else {
        logger::init();
    }

    let resume_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("用法: resume_evaluate_submit <简历PDF路径>")?;

    // 初始化并运行应用
    App::initialize(config).await?.run(&resume_path).await?;

    Ok(())
}
