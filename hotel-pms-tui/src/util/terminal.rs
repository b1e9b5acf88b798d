//! 终端会话
//!
//! `TerminalSession` 持有整个界面生命周期内的终端。
//! 正常退出时调用 `restore()`；出错提前返回或 panic 展开时由 Drop 兜底恢复。

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 原始模式 + 备用屏幕下的终端会话
pub struct TerminalSession {
    terminal: Term,
    active: bool,
}

impl TerminalSession {
    /// 进入原始模式与备用屏幕；中途失败时撤销已做的改动
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = leave(&mut stdout);
            return Err(e).context("failed to enter alternate screen");
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self {
                terminal,
                active: true,
            }),
            Err(e) => {
                let _ = leave(&mut io::stdout());
                Err(e).context("failed to create terminal")
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }

    /// 恢复终端并报告错误
    pub fn restore(mut self) -> Result<()> {
        self.active = false;
        leave(self.terminal.backend_mut()).context("failed to restore terminal")
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            if let Err(e) = leave(self.terminal.backend_mut()) {
                log::warn!("Failed to restore terminal: {e}");
            }
        }
    }
}

/// 关闭原始模式，离开备用屏幕并显示光标
fn leave(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen, Show)
}
