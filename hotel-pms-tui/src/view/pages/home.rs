//! 首页视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::colors;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();

    // 首页布局：欢迎信息 + 统计信息
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // 欢迎区域
            Constraint::Min(1),    // 统计区域
        ])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.welcome),
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.welcome_desc),
            Style::default().fg(c.muted),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.home.open_settings_hint),
            Style::default().fg(c.muted),
        )),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    let stats_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(layout[1]);

    let catalog = &app.settings.catalog;
    let stats = [
        (catalog.sections().len(), texts.home.sections, c.success),
        (catalog.item_count(), texts.home.items, Color::Blue),
        (
            app.resolver.routes().routed_paths().count(),
            texts.home.dedicated_pages,
            c.warning,
        ),
    ];

    for ((count, label, color), area) in stats.into_iter().zip(stats_layout.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(c.border));

        let content = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("  {count}"),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("  {label}"),
                Style::default().fg(c.muted),
            )),
        ])
        .block(block);

        frame.render_widget(content, *area);
    }
}
