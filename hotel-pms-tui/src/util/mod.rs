//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化和恢复，以及日志输出的初始化。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志初始化（tracing-subscriber）
//!         mod terminal;       // 终端会话（进入与恢复）
//!
//!
//!     终端会话（TerminalSession）：
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显：按键不会显示在终端上
//!         · Alternate Screen（备用屏幕）
//!             - 退出后自动恢复主屏幕内容
//!
//!         TerminalSession::enter() 进入上述模式，restore() 恢复。
//!         主循环出错提前返回或发生 panic 时，Drop 仍会恢复终端，
//!         否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!
//!     日志：
//!         界面模式 → LogTarget::File（默认位于本地数据目录）
//!         子命令   → LogTarget::Stderr（stdout 留给命令输出）
//!         过滤级别：RUST_LOG 优先，其次是 --log-level
//!         日志文件无法打开时界面照常启动，只是不记录日志
//!

mod logging;
mod terminal;

pub use logging::{init_logging, init_logging_or_disable, LogTarget};
pub use terminal::{Term, TerminalSession};
