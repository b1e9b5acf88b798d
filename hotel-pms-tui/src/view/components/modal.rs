//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::theme::{colors, Styles};

/// 渲染弹窗：先画设置项通用弹窗，全局弹窗覆盖其上
pub fn render(app: &App, frame: &mut Frame) {
    if let Some((section_id, item_title)) = app.settings.dialog.selection() {
        render_settings_dialog(app, frame, section_id, item_title);
    }

    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Help => render_help(frame),
        Modal::Error { title, message } => render_error(frame, title, message),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 弹窗边框
fn popup_block(title: &str, border: ratatui::style::Color) -> Block<'static> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Styles::popup())
}

/// 渲染设置项通用弹窗（设置项没有专属页面时使用）
fn render_settings_dialog(app: &App, frame: &mut Frame, section_id: &str, item_title: &str) {
    let texts = &t().modal.settings_dialog;
    let c = colors();

    let area = centered_rect(56, 11, frame.area());
    frame.render_widget(Clear, area);

    let block = popup_block(item_title, c.border_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let catalog = &app.settings.catalog;
    let section_title = catalog
        .section(section_id)
        .map_or(section_id, |section| section.title.as_str());
    let detail = catalog.item(section_id, item_title).map_or_else(
        || Line::styled(texts.unknown_item, Style::default().fg(c.warning)),
        |item| Line::styled(item.description.clone(), Style::default().fg(c.fg)),
    );

    let label_style = Style::default().fg(c.muted);
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{}: ", texts.section), label_style),
            Span::styled(section_title.to_string(), Styles::title()),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", texts.item), label_style),
            Span::styled(item_title.to_string(), Styles::title()),
        ]),
        Line::from(""),
        detail,
        Line::from(""),
        Line::styled(texts.no_dedicated_page, Style::default().fg(c.muted)),
        Line::from(""),
        Line::styled(texts.close_hint, Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(50, 8, frame.area());
    frame.render_widget(Clear, area);

    let block = popup_block(title, c.error);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::styled(message.to_string(), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(
            t().modal.settings_dialog.close_hint,
            Style::default().fg(c.muted),
        ),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = &t().help;
    let c = colors();

    let area = centered_rect(55, 17, frame.area());
    frame.render_widget(Clear, area);

    let block = popup_block(texts.title, c.border_focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let heading = Style::default()
        .fg(c.highlight)
        .add_modifier(Modifier::BOLD);
    let row = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<8}"), Styles::hint_key()),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        Line::styled(texts.global_shortcuts, heading),
        row("Tab", texts.actions.switch_panel),
        row("↑↓/jk", texts.actions.move_up_down),
        row("Enter", texts.actions.confirm),
        row("Esc", texts.actions.back_cancel),
        row("Alt+h/?", texts.actions.help),
        row("q", texts.actions.quit),
        Line::from(""),
        Line::styled(texts.settings_shortcuts, heading),
        row("←→/hl", texts.actions.switch_section),
        row("Enter", texts.actions.confirm),
        Line::from(""),
        Line::styled(texts.close_hint, Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
