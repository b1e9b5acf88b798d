//! 设置目录页面视图

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

use hotel_pms_core::Destination;

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染设置目录页面：分区标签 + 设置项列表 + 说明
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let settings = &app.settings;

    let Some(section) = settings.current_section() else {
        let empty = Paragraph::new(format!("  {}", texts.settings.no_sections))
            .style(Style::default().fg(c.muted));
        frame.render_widget(empty, area);
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // 分区标签
            Constraint::Min(3),    // 设置项列表
            Constraint::Length(3), // 说明
        ])
        .split(area);

    // === 分区标签 ===
    let titles: Vec<Line> = settings
        .catalog
        .sections()
        .iter()
        .map(|s| Line::from(format!("{} {}", s.icon, s.title)))
        .collect();
    let tabs = Tabs::new(titles)
        .select(settings.section_index)
        .style(Style::default().fg(c.muted))
        .highlight_style(
            Style::default()
                .fg(c.highlight)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider("│");
    frame.render_widget(tabs, layout[0]);

    // === 设置项列表 ===
    let routes = app.resolver.routes();
    let items: Vec<ListItem> = section
        .items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let is_selected = i == settings.item_index;
            let prefix = if is_selected { "▶ " } else { "  " };

            // 有专属页面显示路径，否则标记为通用弹窗
            let target = match routes.destination(&section.id, &item.title) {
                Destination::Page(path) => {
                    Span::styled(format!("→ {path}"), Style::default().fg(c.success))
                }
                Destination::NoDedicatedPage => Span::styled(
                    format!("[{}]", texts.settings.dialog_only),
                    Style::default().fg(c.muted),
                ),
            };

            let title_style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{prefix}{:<28}", item.title), title_style),
                Span::raw(" "),
                target,
            ]))
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(settings.item_index));
    frame.render_stateful_widget(List::new(items), layout[1], &mut state);

    // === 说明 ===
    let description = settings.current_item().map_or_else(
        || section.description.clone(),
        |item| {
            let kind = if routes.lookup(&section.id, &item.title).and_then(|e| e.path()).is_some() {
                texts.settings.dedicated_page
            } else {
                texts.settings.dialog_only
            };
            format!("{} ({kind})", item.description)
        },
    );
    let footer = Paragraph::new(description)
        .style(Style::default().fg(c.muted))
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, layout[2]);
}
