//! Loop trace pane rendering

use super::{border_style, clamp_scroll};
use crate::machine::trace::TraceLog;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the diagnostic trace from loop simulation
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    trace: &TraceLog,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Loop Trace ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if trace.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = trace
        .lines()
        .iter()
        .map(|line| ListItem::new(line.as_str()).style(Style::default().fg(DEFAULT_THEME.fg)))
        .collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, total_items, visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
