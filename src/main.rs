use anyhow::Result;
use self_grade::utils::logging;
use self_grade::{App, Config, TerminalBackend};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::load()?;

    // 初始化日志
    logging::init(&config);

    // 初始化并运行应用
    let mut app = App::initialize(config, TerminalBackend::new()).await?;
    app.run().await?;

    Ok(())
}
