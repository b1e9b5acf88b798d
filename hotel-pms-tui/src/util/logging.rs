//! 日志初始化
//!
//! 代码中统一使用 `log` 门面，这里由 tracing-subscriber 接管输出。
//! TUI 占用终端，因此界面模式下日志写入文件；子命令模式写入 stderr。

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 日志输出位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    Disabled,
}

impl LogTarget {
    /// 界面模式的默认日志位置：<data_local_dir>/hotel-pms/hotel-pms-tui.log
    pub fn default_file() -> Self {
        dirs::data_local_dir().map_or(Self::Disabled, |dir| {
            Self::File(dir.join("hotel-pms").join("hotel-pms-tui.log"))
        })
    }
}

/// 构造过滤器：`RUST_LOG` 优先，否则使用命令行给出的级别
fn build_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).with_context(|| format!("invalid log level: {level}")),
    }
}

/// 初始化全局日志
pub fn init_logging(level: &str, target: &LogTarget) -> Result<()> {
    let writer = match target {
        LogTarget::Disabled => return Ok(()),
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .with(build_filter(level)?)
        .try_init()
        .context("failed to install log subscriber")?;

    Ok(())
}

/// 同 [`init_logging`]，但失败时只在 stderr 提示并关闭日志，返回实际生效的输出位置
pub fn init_logging_or_disable(level: &str, target: LogTarget) -> LogTarget {
    match init_logging(level, &target) {
        Ok(()) => target,
        Err(e) => {
            eprintln!("Logging disabled: {e:#}");
            LogTarget::Disabled
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn unwritable_log_file_disables_logging() {
        // 父路径是普通文件，无法创建日志目录
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let target = LogTarget::File(tmp.path().join("logs").join("hotel-pms-tui.log"));

        assert!(init_logging("info", &target).is_err());
        assert_eq!(init_logging_or_disable("info", target), LogTarget::Disabled);
    }

    #[test]
    fn disabled_target_installs_nothing() {
        assert!(init_logging("info", &LogTarget::Disabled).is_ok());
    }

    #[test]
    fn default_file_lives_under_app_dir() {
        if let LogTarget::File(path) = LogTarget::default_file() {
            assert!(path.ends_with("hotel-pms/hotel-pms-tui.log"));
        }
    }
}
