//! Rendering logic for each TUI pane
//!
//! Every pane is a stateless render function taking the ratatui frame, its
//! area, a slice of machine state, and the scroll/focus state owned by the
//! [`App`](crate::ui::app::App). Nothing in here mutates the machine.

pub mod memory;
pub mod registers;
pub mod stack;
pub mod status;
pub mod trace;

pub use memory::render_memory_pane;
pub use registers::render_registers_pane;
pub use stack::render_stack_pane;
pub use status::render_status_bar;
pub use trace::render_trace_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by all panes: bold yellow when focused, grey otherwise
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `scroll_offset` so the visible window stays inside `total_items`
pub(crate) fn clamp_scroll(scroll_offset: &mut usize, total_items: usize, visible_height: usize) {
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }
}
