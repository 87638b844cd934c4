//! 日志初始化
//!
//! 界面占用整个终端，日志只能写文件。
//! 日志是辅助设施：目录不可写时依次退回临时目录、不写日志，程序照常启动。

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dns_changer_core::AppConfig;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志文件名
pub const LOG_FILE_NAME: &str = "dns-changer.log";

/// 日志目录：配置值 > 本地数据目录 > 临时目录
pub fn log_directory(config: &AppConfig) -> PathBuf {
    config.log_dir.clone().unwrap_or_else(|| {
        dirs::data_local_dir()
            .map(|dir| dir.join("dns-changer"))
            .unwrap_or_else(std::env::temp_dir)
    })
}

/// 在 `dir` 下打开日志文件
fn open_appender(dir: &Path) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .with_context(|| format!("Failed to open log file in {}", dir.display()))
}

/// 已打开的日志文件
pub struct LogFile {
    pub path: PathBuf,
    pub appender: RollingFileAppender,
    /// 首选目录不可用时的原因
    pub fallback_reason: Option<String>,
}

/// 打开日志文件：先试首选目录，失败后退回临时目录
pub fn open_log_file(config: &AppConfig) -> Option<LogFile> {
    let preferred = log_directory(config);

    let error = match open_appender(&preferred) {
        Ok(appender) => {
            return Some(LogFile {
                path: preferred.join(LOG_FILE_NAME),
                appender,
                fallback_reason: None,
            });
        }
        Err(e) => e,
    };

    let fallback = std::env::temp_dir().join("dns-changer");
    open_appender(&fallback).ok().map(|appender| LogFile {
        path: fallback.join(LOG_FILE_NAME),
        appender,
        fallback_reason: Some(format!("{error:#}")),
    })
}

/// 初始化 tracing，返回日志文件路径
///
/// 没有可写目录或已经装有 subscriber 时返回 `None`，程序继续运行。
/// `log` 宏产生的记录（来自 core）经由 tracing-log 转发到同一个文件。
pub fn init_logging(config: &AppConfig) -> Option<PathBuf> {
    let log_file = open_log_file(config)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(log_file.appender)
                .with_target(true)
                .with_ansi(false),
        )
        .with(filter)
        .try_init()
        .ok()?;

    if let Some(reason) = &log_file.fallback_reason {
        tracing::warn!(reason = %reason, "Preferred log directory unavailable, using fallback");
    }

    Some(log_file.path)
}
