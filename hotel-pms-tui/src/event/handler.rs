//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Page};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时下一轮自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 弹窗优先：全局弹窗，其次是设置项通用弹窗
    if app.modal.is_open() || app.settings.dialog.is_open() {
        return handle_modal_keys(key);
    }

    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::ALT_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::HELP.matches(&key) || DefaultKeymap::HELP_ALT.matches(&key) {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_navigation() {
        handle_navigation_keys(key)
    } else {
        handle_content_keys(key, app)
    }
}

/// 处理弹窗按键
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            AppMessage::Modal(ModalMessage::Close)
        }
        _ => AppMessage::Noop,
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),
        KeyCode::Enter | KeyCode::Right => AppMessage::Navigation(NavigationMessage::Confirm),
        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),
        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match &app.current_page {
        Page::Settings => handle_settings_keys(key),
        Page::Preferences => handle_preferences_keys(key),
        Page::Home => handle_list_keys(key),
        Page::SettingsPage { .. } => AppMessage::Noop,
    }
}

/// 处理列表类页面的按键（通用）
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => ContentMessage::SelectPrevious,
        KeyCode::Down | KeyCode::Char('j') => ContentMessage::SelectNext,
        KeyCode::Home => ContentMessage::SelectFirst,
        KeyCode::End => ContentMessage::SelectLast,
        KeyCode::Enter => ContentMessage::Confirm,
        _ => return AppMessage::Noop,
    };
    AppMessage::Content(msg)
}

/// 处理设置目录页面的按键
fn handle_settings_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Content(ContentMessage::PrevSection),
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Content(ContentMessage::NextSection),
        _ => handle_list_keys(key),
    }
}

/// 处理偏好设置页面的按键
fn handle_preferences_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => AppMessage::Content(ContentMessage::TogglePrev),
        KeyCode::Right | KeyCode::Char('l') => AppMessage::Content(ContentMessage::ToggleNext),
        _ => handle_list_keys(key),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventState, KeyModifiers};

    use super::*;
    use crate::model::FocusPanel;
    use crate::update::test_support;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn release_events_are_ignored() {
        let app = test_support::app();
        let key = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_event(Event::Key(key), &app), AppMessage::Noop);
    }

    #[test]
    fn arrows_switch_sections_on_settings_page() {
        let mut app = test_support::app();
        app.current_page = Page::Settings;
        app.focus = FocusPanel::Content;

        assert_eq!(
            handle_event(press(KeyCode::Right), &app),
            AppMessage::Content(ContentMessage::NextSection)
        );
        assert_eq!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Content(ContentMessage::Confirm)
        );
    }

    #[test]
    fn open_dialog_captures_keys() {
        let mut app = test_support::app();
        app.current_page = Page::Settings;
        app.focus = FocusPanel::Content;
        app.settings.dialog.open("rooms", "Housekeeping");

        assert_eq!(
            handle_event(press(KeyCode::Enter), &app),
            AppMessage::Modal(ModalMessage::Close)
        );
        assert_eq!(handle_event(press(KeyCode::Right), &app), AppMessage::Noop);
    }

    #[test]
    fn q_quits_without_modal() {
        let app = test_support::app();
        assert_eq!(handle_event(press(KeyCode::Char('q')), &app), AppMessage::Quit);
    }
}
