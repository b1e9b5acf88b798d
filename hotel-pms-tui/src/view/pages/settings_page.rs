//! 设置子页面视图
//!
//! 由路由解析跳转而来。页面本身只展示路径以及指向它的设置项，
//! 具体的编辑器不在本程序范围内。

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染设置子页面
pub fn render(app: &App, path: &str, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let label_style = Style::default().fg(c.muted);

    let mut lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {}: ", texts.settings_page.path), label_style),
            Span::styled(path.to_string(), Style::default().fg(c.success)),
        ]),
        Line::from(""),
    ];

    // 反查路由表：同一路径可能由多个设置项指向
    let catalog = &app.settings.catalog;
    let sources: Vec<_> = app
        .resolver
        .routes()
        .entries()
        .iter()
        .filter(|entry| entry.path() == Some(path))
        .collect();

    if sources.is_empty() {
        lines.push(Line::styled(
            format!("  {}", texts.settings_page.unknown_path),
            Style::default().fg(c.warning),
        ));
    }

    for entry in sources {
        let section_title = catalog
            .section(entry.section_id)
            .map_or(entry.section_id, |section| section.title.as_str());
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", texts.settings_page.section), label_style),
            Span::styled(section_title.to_string(), Styles::title()),
        ]));
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", texts.settings_page.item), label_style),
            Span::styled(entry.item_title, Styles::title()),
        ]));
        if let Some(item) = catalog.item(entry.section_id, entry.item_title) {
            lines.push(Line::styled(
                format!("  {}", item.description),
                Style::default().fg(c.fg),
            ));
        }
        lines.push(Line::from(""));
    }

    lines.push(Line::styled(
        format!("  {}", texts.settings_page.placeholder),
        Style::default().fg(c.muted),
    ));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
