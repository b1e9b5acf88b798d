//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;         // 导航子消息处理
//!         mod content;            // 内容面板子消息处理（含设置项路由解析）
//!         mod modal;              // 弹窗子消息处理
//!
//!     使用 match 进行穷举，其中每个 Message 变体都对应一个状态变更。
//!     复杂的子消息委托给子模块处理（navigation、content、modal）。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 返回（GoBack）的优先级
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     1. 全局弹窗打开 → 关闭全局弹窗
//!     2. 设置项通用弹窗打开 → 关闭通用弹窗
//!     3. 位于设置子页面 → 回到设置目录
//!

mod content;
mod modal;
mod navigation;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            // 如果有弹窗打开，不切换焦点
            if !app.modal.is_open() && !app.settings.dialog.is_open() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
        }

        AppMessage::Content(content_msg) => {
            content::update(app, content_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::GoBack => {
            if app.modal.is_open() || app.settings.dialog.is_open() {
                modal::close_top(app);
            } else if let Some(parent) = app.current_page.parent() {
                app.go_to(parent);
            }
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::backend::InMemoryConfigService;
    use crate::model::App;

    pub fn app() -> App {
        App::new(Box::new(InMemoryConfigService::default()))
    }
}
