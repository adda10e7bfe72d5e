//! Register pane rendering
//!
//! One row per register. Integer contents render in the number color,
//! address-like labels in the label color, so the EAX int/label duality is
//! visible at a glance.

use super::border_style;
use crate::machine::registers::{Register, RegisterFile};
use crate::machine::value::RegValue;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the register pane
pub fn render_registers_pane(
    frame: &mut Frame,
    area: Rect,
    registers: &RegisterFile,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Registers ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let items: Vec<ListItem> = Register::ALL
        .iter()
        .map(|&reg| {
            let value = registers.get(reg);
            let value_span = match value {
                RegValue::Int(n) => {
                    let text = if *n >= 0x100 {
                        format!("{} (0x{:X})", n, n)
                    } else {
                        n.to_string()
                    };
                    Span::styled(text, Style::default().fg(DEFAULT_THEME.number))
                }
                RegValue::Label(label) => Span::styled(
                    label.clone(),
                    Style::default().fg(DEFAULT_THEME.label),
                ),
            };

            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", reg.name()),
                    Style::default()
                        .fg(DEFAULT_THEME.primary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled("│ ", Style::default().fg(DEFAULT_THEME.comment)),
                value_span,
            ]))
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}
