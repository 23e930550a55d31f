//! 日志工具模块
//!
//! 初始化 tracing 输出，并提供会话开始/结束时的日志辅助函数

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化日志
///
/// 优先使用 `RUST_LOG`，否则按配置选择 `info` 或 `debug`。重复调用无副作用。
pub fn init(config: &Config) {
    let default_level = if config.verbose_logging { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 Self-grading session - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("📁 Output folder: {}", config.output_folder.display());
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `questions`: 大题数量
/// - `subproblems`: 小题数量
/// - `comments`: 填写了说明的小题数量
pub fn print_final_stats(questions: usize, subproblems: usize, comments: usize) {
    info!("\n{}", "=".repeat(60));
    info!(
        "📊 Session finished at {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ Questions: {}", questions);
    info!("✅ Subproblems graded: {}", subproblems);
    info!("📝 Comments written: {}", comments);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
