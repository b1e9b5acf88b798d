//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, FocusPanel, Page};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 状态消息显示在提示之后，没有消息时显示“就绪”
    let status = app
        .status_message
        .clone()
        .unwrap_or_else(|| t().status_bar.ready.to_string());
    spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
    spans.push(Span::styled(status, Style::default().fg(Color::Yellow)));

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = t();
    let keys = &texts.hints.keys;
    let actions = &texts.hints.actions;

    // 弹窗打开时只提示关闭
    if app.modal.is_open() || app.settings.dialog.is_open() {
        return vec![(keys.esc, texts.common.close)];
    }

    let mut hints = vec![(keys.tab, actions.switch_panel)];

    match app.focus {
        FocusPanel::Navigation => {
            hints.push((keys.arrows_ud, actions.navigate));
            hints.push((keys.enter, texts.common.select));
        }
        FocusPanel::Content => match &app.current_page {
            Page::Home => {
                hints.push((keys.enter, texts.common.open));
            }
            Page::Settings => {
                hints.push((keys.arrows_ud, actions.move_up_down));
                hints.push((keys.arrows_lr, actions.switch_section));
                hints.push((keys.enter, texts.common.open));
            }
            Page::SettingsPage { .. } => {}
            Page::Preferences => {
                hints.push((keys.arrows_ud, actions.move_up_down));
                hints.push((keys.arrows_lr, actions.switch_option));
            }
        },
    }

    if app.current_page.is_detail_page() {
        hints.push((keys.esc, texts.common.back));
    }

    hints.push(("q", texts.common.quit));

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::test_support;

    #[test]
    fn dialog_hints_only_offer_close() {
        let mut app = test_support::app();
        app.settings.dialog.open("rooms", "Housekeeping");
        assert_eq!(get_hints(&app).len(), 1);
    }

    #[test]
    fn settings_hints_include_section_switch() {
        let mut app = test_support::app();
        app.go_to(Page::Settings);
        app.focus = FocusPanel::Content;
        let keys: Vec<_> = get_hints(&app).into_iter().map(|(key, _)| key).collect();
        assert!(keys.contains(&"←→"));
    }
}
