//! Seeded memory pane rendering

use super::{border_style, clamp_scroll};
use crate::machine::memory::Memory;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the seeded memory cells, sorted by address
pub fn render_memory_pane(
    frame: &mut Frame,
    area: Rect,
    memory: &Memory,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Memory ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if memory.is_empty() {
        let paragraph = Paragraph::new("(no seeded cells)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let all_items: Vec<ListItem> = memory
        .cells()
        .into_iter()
        .map(|(address, value)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" 0x{:08X} ", address),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(
                    value.to_string(),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
            ]))
        })
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
