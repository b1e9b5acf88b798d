//! Hotel PMS 设置控制台
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 偏好持久化 (`backend/`)
//!
//! 设置项的路由解析由 `hotel-pms-core` 提供。
//!
//!
//! main.rs 执行：
//!
//!     Cli::parse()
//!     有子命令 → 日志写入 stderr，执行 cli::run_command()，按结果设置退出码
//!     无子命令 →
//!         init_logging_or_disable(文件)   // 日志文件不可写时照常启动
//!         TerminalSession::enter()        // 原始模式 + 备用屏幕
//!         model::App::new()               // 从配置恢复偏好
//!         app::run()                      // 主循环
//!         session.restore()               // 无论成功与否，都恢复终端（Drop 兜底）

mod app;
mod backend;
mod cli;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use cli::Cli;
use util::{init_logging, init_logging_or_disable, LogTarget, TerminalSession};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        Some(command) => run_command(&cli, command),
        None => run_ui(&cli).map(|()| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// 非交互子命令
fn run_command(cli: &Cli, command: &cli::Command) -> Result<bool> {
    init_logging(&cli.log_level, &LogTarget::Stderr)?;
    cli::run_command(command, &mut std::io::stdout().lock())
}

/// 终端界面
fn run_ui(cli: &Cli) -> Result<()> {
    let log_target = init_logging_or_disable(&cli.log_level, LogTarget::default_file());
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Hotel PMS console");
    log::debug!("Log target: {log_target:?}");

    let config = backend::config_service_for(cli.config.clone(), cli.ephemeral);

    // 1. 进入终端会话
    let mut session = TerminalSession::enter()?;

    // 2. 创建应用实例
    let mut app = model::App::new(config);

    // 3. 运行主循环
    let result = app::run(session.terminal_mut(), &mut app);

    // 4. 恢复终端（出错时先恢复，再返回错误）
    session.restore()?;

    if let Err(ref e) = result {
        log::error!("Console exited with error: {e:#}");
    }
    result
}
