use anyhow::{Context, Result};
use form_filler::utils::logging;
use form_filler::{App, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(config.verbose_logging);

    // 运行会话
    App::stdio(config)
        .run()
        .await
        .context("控制台会话异常结束")?;

    Ok(())
}
