//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//! 每一帧都由 app.rs 主循环调用 render() 重新绘制。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局（标题栏 + 导航 + 内容 + 状态栏）
//!         pub mod theme;          // 主题颜色与常用样式
//!         mod components;         // 导航面板、状态栏、弹窗
//!         mod pages;              // 各页面内容
//!
//!
//!     布局：
//!         ┌──────────────────────────────────────────────┐
//!         │ 标题栏                                        │
//!         ├──────────┬───────────────────────────────────┤
//!         │ 导航 20% │ 内容 80%                           │
//!         │          │                                   │
//!         ├──────────┴───────────────────────────────────┤
//!         │ 状态栏（快捷键提示 + 状态消息）                 │
//!         └──────────────────────────────────────────────┘
//!
//!     弹窗绘制在最上层：
//!         - 设置项通用弹窗（SettingsState::dialog）
//!         - 全局弹窗（帮助、错误），覆盖在通用弹窗之上
//!

mod components;
mod layout;
mod pages;
pub mod theme;

use ratatui::Frame;

use crate::model::App;

/// 渲染整个界面
pub fn render(app: &App, frame: &mut Frame) {
    layout::render(app, frame);
}
