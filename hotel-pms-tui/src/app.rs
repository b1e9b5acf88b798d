//!
//! app.rs
//! 应用主循环
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!     should_quit: false,
//!     focus: FocusPanel::Navigation,
//!     navigation: NavigationState { items: [Home, Settings, Preferences], selected: 0 },
//!     current_page: Page::Home,
//!     resolver: SettingsResolver::builtin(),      // 内置路由表
//!     settings: SettingsState { dialog: DialogState::Closed, .. },
//!     preferences: 从配置文件恢复,
//!     ..
//! }
//!
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!     terminal.draw(|f| view::render(&app, f))       // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     if let Some(event) = poll_event() {             // 轮询输入，最多等待 100ms
//!         let msg = handle_event(event, &app);            // 事件 → 消息
//!         update::update(&mut app, msg)                   // 消息 → 状态变更
//!     }
//! }

use std::time::Duration;

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(Duration::from_millis(100))? {
            let msg = event::handle_event(event, app);
            log::trace!("Message: {msg:?}");
            update::update(app, msg);
        }
    }

    Ok(())
}
