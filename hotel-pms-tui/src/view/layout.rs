//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 背景
    frame.render_widget(Block::default().style(Style::default().bg(colors().bg)), size);

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧导航
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗（在最上层）
    components::modal::render(app, frame);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();

    let page_title = match &app.current_page {
        Page::Home => texts.nav.home,
        Page::Settings => texts.settings.title,
        Page::SettingsPage { .. } => texts.settings_page.title,
        Page::Preferences => texts.preferences.title,
    };

    let block = Block::default()
        .title(format!(" {page_title} "))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    match &app.current_page {
        Page::Home => pages::home::render(app, frame, inner_area),
        Page::Settings => pages::settings::render(app, frame, inner_area),
        Page::SettingsPage { path } => pages::settings_page::render(app, path, frame, inner_area),
        Page::Preferences => pages::preferences::render(app, frame, inner_area),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use crate::message::AppMessage;
    use crate::model::Page;
    use crate::update::{test_support, update};

    fn draw(app: &crate::model::App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| super::render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_every_page() {
        let mut app = test_support::app();
        for page in [
            Page::Home,
            Page::Settings,
            Page::SettingsPage {
                path: "/settings/user-roles".to_string(),
            },
            Page::SettingsPage {
                path: "/settings/nowhere".to_string(),
            },
            Page::Preferences,
        ] {
            app.go_to(page);
            assert!(!draw(&app).trim().is_empty());
        }
    }

    #[test]
    fn dialog_shows_selected_item() {
        let mut app = test_support::app();
        app.go_to(Page::Settings);
        app.settings.dialog.open("rooms", "Housekeeping");
        assert!(draw(&app).contains("Housekeeping"));

        // 帮助弹窗覆盖在通用弹窗之上
        update(&mut app, AppMessage::ShowHelp);
        assert!(app.modal.is_open());
        assert!(!draw(&app).trim().is_empty());
    }
}
