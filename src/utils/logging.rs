/// 日志工具模块
///
/// 日志统一写到 stderr，stdout 只留给交互协议
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::Form;

/// 初始化日志，`RUST_LOG` 优先
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!(
        "🚀 表单填写程序启动 - {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    if config.output_dir.as_os_str().is_empty() {
        info!("📁 导出目录: 当前目录");
    } else {
        info!("📁 导出目录: {}", config.output_dir.display());
    }
    info!("{}", "=".repeat(60));
}

/// 记录表单导入信息
pub fn log_form_imported(form: &Form) {
    info!("✓ 已导入表单 {} ({} 个问题)", form.name, form.questions.len());
    for (index, question) in form.questions.iter().enumerate() {
        tracing::debug!("  {}. {}", index + 1, truncate_text(&question.text, 60));
    }
}

/// 记录会话结束
pub fn log_session_end(reason: &str) {
    info!(
        "会话结束 ({}) - {}",
        reason,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
}

/// 截断长文本用于日志显示
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
