//! Call stack pane rendering
//!
//! Frames are drawn top-of-stack first, the way a textbook draws a call
//! stack growing upward: the most recent call sits at the top of the pane.
//! Inactive frames (returned-from but not popped) stay visible, greyed out.

use super::{border_style, clamp_scroll};
use crate::machine::frame::{CallStack, StackFrame};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn frame_items<'a>(depth: usize, stack_frame: &StackFrame, is_top: bool) -> Vec<ListItem<'a>> {
    let body_color = if stack_frame.is_inactive() {
        DEFAULT_THEME.frame_inactive
    } else {
        DEFAULT_THEME.frame_active
    };

    let marker = if is_top { "▸ " } else { "  " };
    let state = if stack_frame.is_inactive() {
        Span::styled(" (inactive)", Style::default().fg(DEFAULT_THEME.comment))
    } else {
        Span::raw("")
    };

    let header = Line::from(vec![
        Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
        Span::styled(
            format!("Frame {} ", depth),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            stack_frame.return_address.clone(),
            Style::default().fg(body_color).add_modifier(Modifier::BOLD),
        ),
        state,
    ]);

    let params = if stack_frame.parameters.is_empty() {
        Span::styled("(none)", Style::default().fg(DEFAULT_THEME.comment))
    } else {
        Span::styled(
            format!("{:?}", stack_frame.parameters),
            Style::default().fg(DEFAULT_THEME.number),
        )
    };
    let params_line = Line::from(vec![
        Span::styled("    params ", Style::default().fg(DEFAULT_THEME.comment)),
        params,
    ]);

    let mut items = vec![ListItem::new(header), ListItem::new(params_line)];

    // Locals are part of the frame record even though nothing fills them yet
    if !stack_frame.locals.is_empty() {
        let mut locals: Vec<_> = stack_frame.locals.iter().collect();
        locals.sort_by_key(|(name, _)| name.as_str());
        for (name, value) in locals {
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    format!("    {} = ", name),
                    Style::default().fg(DEFAULT_THEME.fg),
                ),
                Span::styled(
                    value.to_string(),
                    Style::default().fg(DEFAULT_THEME.number),
                ),
            ])));
        }
    }

    items
}

/// Render the call stack pane
pub fn render_stack_pane(
    frame: &mut Frame,
    area: Rect,
    stack: &CallStack,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Call Stack ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let frames = stack.frames();
    let mut all_items = Vec::new();

    if frames.is_empty() {
        all_items.push(ListItem::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment)));
    } else {
        // Top of stack first
        for (depth, stack_frame) in frames.iter().enumerate().rev() {
            let is_top = depth == frames.len() - 1;
            all_items.extend(frame_items(depth, stack_frame, is_top));
            if depth > 0 {
                all_items.push(ListItem::new(""));
            }
        }
    }

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
