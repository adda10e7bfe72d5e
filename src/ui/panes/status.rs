//! Status bar rendering with keybindings and the input prompt
//!
//! When a command is waiting for input, the left side of the bar becomes the
//! prompt (`call ▸ add 5 3▏`); otherwise it shows the stack depth and the
//! last status message.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status bar at the bottom
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    is_error: bool,
    stack_depth: usize,
    prompt: Option<(&str, &str)>,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    // Left side: input prompt when active, depth + message otherwise
    let left_spans = if let Some((verb, buffer)) = prompt {
        vec![
            Span::styled(
                format!(" {} ▸ ", verb),
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}▏", buffer),
                Style::default()
                    .bg(DEFAULT_THEME.status_bg)
                    .fg(DEFAULT_THEME.fg),
            ),
        ]
    } else {
        vec![
            Span::styled(
                format!(" depth {} ", stack_depth),
                Style::default()
                    .bg(DEFAULT_THEME.primary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " | ",
                Style::default()
                    .bg(DEFAULT_THEME.status_bg)
                    .fg(DEFAULT_THEME.comment),
            ),
            Span::styled(
                format!(" {} ", message),
                Style::default().bg(DEFAULT_THEME.status_bg).fg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.fg
                }),
            ),
        ]
    };

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled(" p/o ", key_style),
        Span::styled(" push/pop ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" c/r ", key_style),
        Span::styled(" call/ret ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" l ", key_style),
        Span::styled(" loop ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" m/b ", key_style),
        Span::styled(" load/base ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" x ", key_style),
        Span::styled(" clear ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
