//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!
//!     当接收到键盘事件时，转入 handle_key_event()
//!     判断顺序：
//!         - Ctrl+C 任何时候都退出
//!         - 有弹窗（全局弹窗或设置项通用弹窗）打开时，调用 handle_modal_keys 处理
//!         - 全局快捷键，就地处理
//!         - 焦点位于导航面板，调用 handle_navigation_keys 处理
//!         - 焦点位于内容面板，调用 handle_content_keys 处理
//!
//!     设置目录页面：
//!         ↑↓ / jk     → 分区内上下移动
//!         ←→ / hl     → 切换分区
//!         Enter       → 解析设置项（跳转子页面或打开通用弹窗）
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
