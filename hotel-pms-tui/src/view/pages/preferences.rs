//! 偏好设置页面视图

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::state::{PreferenceItem, Theme};
use crate::model::App;
use crate::view::theme::colors;

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 20;
/// 值区域的宽度（包含 ◀ ▶ 符号）
const VALUE_WIDTH: usize = 20;

/// 渲染偏好设置页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let c = colors();
    let preferences = &app.preferences;
    let selected = preferences.current_item();

    let mut lines = vec![Line::from("")];

    let theme_value = match preferences.theme {
        Theme::Dark => texts.preferences.theme.dark,
        Theme::Light => texts.preferences.theme.light,
    };
    lines.push(render_setting_row(
        texts.preferences.theme.label,
        theme_value,
        selected == Some(PreferenceItem::Theme),
    ));

    lines.push(render_setting_row(
        texts.preferences.language.label,
        preferences.language.display_name(),
        selected == Some(PreferenceItem::Language),
    ));

    if selected == Some(PreferenceItem::Language) {
        lines.push(Line::styled(
            format!("      {}", texts.preferences.language.description),
            Style::default().fg(c.muted),
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(""));

    // 操作提示
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {}", texts.hints.keys.arrows_ud),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(
            format!(" {} | ", texts.hints.actions.move_up_down),
            Style::default().fg(c.muted),
        ),
        Span::styled(texts.hints.keys.arrows_lr, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {} | ", texts.hints.actions.switch_option),
            Style::default().fg(c.muted),
        ),
        Span::styled(texts.hints.keys.tab, Style::default().fg(Color::Yellow)),
        Span::styled(
            format!(" {}", texts.hints.actions.switch_panel),
            Style::default().fg(c.muted),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}

/// 渲染单行偏好项，选中时值两侧显示 ◀ ▶
fn render_setting_row<'a>(label: &'a str, value: &'a str, is_selected: bool) -> Line<'a> {
    let c = colors();
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };

    let value_style = if is_selected {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    // 使用 unicode-width 计算显示宽度，中文标签按双宽处理
    let label_padding = LABEL_WIDTH.saturating_sub(label.width());
    let available_space = VALUE_WIDTH.saturating_sub(4);
    let left_padding = available_space.saturating_sub(value.width()) / 2;
    let right_padding = available_space
        .saturating_sub(value.width())
        .saturating_sub(left_padding);

    let (left_marker, right_marker) = if is_selected { ("◀ ", " ▶") } else { ("  ", "  ") };
    let marker_style = Style::default().fg(Color::Yellow);

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(format!("  {label}"), label_style),
        Span::raw(" ".repeat(label_padding)),
        Span::styled(": ", Style::default().fg(c.muted)),
        Span::styled(left_marker, marker_style),
        Span::raw(" ".repeat(left_padding)),
        Span::styled(value, value_style),
        Span::raw(" ".repeat(right_padding)),
        Span::styled(right_marker, marker_style),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_width(line: &Line) -> usize {
        line.spans.iter().map(|span| span.content.width()).sum()
    }

    #[test]
    fn rows_align_across_scripts() {
        let english = render_setting_row("Language", "English", false);
        let chinese = render_setting_row("语言", "简体中文", false);
        assert_eq!(line_width(&english), line_width(&chinese));
    }
}
