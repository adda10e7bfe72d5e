//! Main TUI application state and logic
//!
//! The app owns the one [`Machine`] value and translates key presses into
//! machine operations. Commands that need an argument (push label, call
//! name and arguments, loop count, load offset, base address) open an input
//! prompt in the status bar; everything the user types is validated here,
//! before the model is touched, so bad input never changes machine state.

use crate::machine::frame::StackFrame;
use crate::machine::memory::parse_int;
use crate::machine::registers::Register;
use crate::machine::Machine;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Stack,
    Registers,
    Memory,
    Trace,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: stack -> registers -> memory -> trace)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Stack => FocusedPane::Registers,
            FocusedPane::Registers => FocusedPane::Memory,
            FocusedPane::Memory => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::Stack,
        }
    }
}

/// A command waiting for its argument in the input prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PendingCommand {
    Push,
    Call,
    Loop,
    Load,
    SetBase,
}

impl PendingCommand {
    fn verb(self) -> &'static str {
        match self {
            PendingCommand::Push => "push label",
            PendingCommand::Call => "call name args…",
            PendingCommand::Loop => "loop count",
            PendingCommand::Load => "load offset",
            PendingCommand::SetBase => "base address",
        }
    }
}

/// The main application state
pub struct App {
    /// The machine being visualized
    pub machine: Machine,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub stack_scroll: usize,
    pub memory_scroll: usize,
    pub trace_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports invalid input
    pub status_is_error: bool,

    /// Active input prompt, if a command is waiting for its argument
    prompt: Option<(PendingCommand, String)>,
}

impl App {
    /// Create a new app around the given machine
    pub fn new(machine: Machine) -> Self {
        App {
            machine,
            focused_pane: FocusedPane::Stack,
            stack_scroll: 0,
            memory_scroll: 0,
            trace_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            prompt: None,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left column: call stack. Right column: registers / memory / trace.
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),
                Constraint::Percentage(40),
                Constraint::Min(0),
            ])
            .split(columns[1]);

        super::panes::render_stack_pane(
            frame,
            columns[0],
            self.machine.stack(),
            self.focused_pane == FocusedPane::Stack,
            &mut self.stack_scroll,
        );

        super::panes::render_registers_pane(
            frame,
            right_rows[0],
            self.machine.registers(),
            self.focused_pane == FocusedPane::Registers,
        );

        super::panes::render_memory_pane(
            frame,
            right_rows[1],
            self.machine.memory(),
            self.focused_pane == FocusedPane::Memory,
            &mut self.memory_scroll,
        );

        super::panes::render_trace_pane(
            frame,
            right_rows[2],
            self.machine.trace(),
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        let prompt = self
            .prompt
            .as_ref()
            .map(|(command, buffer)| (command.verb(), buffer.as_str()));
        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.status_is_error,
            self.machine.stack().depth(),
            prompt,
        );
    }

    fn status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => self.scroll_focused(-1),
            KeyCode::Down => self.scroll_focused(1),

            KeyCode::Char('p') => self.prompt = Some((PendingCommand::Push, String::new())),
            KeyCode::Char('c') => self.prompt = Some((PendingCommand::Call, String::new())),
            KeyCode::Char('l') => self.prompt = Some((PendingCommand::Loop, String::new())),
            KeyCode::Char('m') => self.prompt = Some((PendingCommand::Load, String::new())),
            KeyCode::Char('b') => self.prompt = Some((PendingCommand::SetBase, String::new())),

            KeyCode::Char('o') => match self.machine.pop_frame() {
                Some(popped) => self.status(format!("popped frame {}", popped.return_address)),
                None => self.status("stack is empty, nothing to pop"),
            },
            KeyCode::Char('r') => {
                if self.machine.stack().is_empty() {
                    self.status("stack is empty, nothing to return from");
                } else {
                    self.machine.return_from_call();
                    self.status("marked top frame inactive");
                }
            }
            KeyCode::Char('x') => {
                self.machine.clear();
                self.status("stack emptied, registers reset");
            }
            _ => {}
        }
    }

    /// Handle keys while the input prompt is open
    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.prompt = None;
                self.status("cancelled");
            }
            KeyCode::Backspace => {
                if let Some((_, buffer)) = self.prompt.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Enter => {
                if let Some((command, buffer)) = self.prompt.take() {
                    self.submit(command, buffer.trim());
                }
            }
            KeyCode::Char(c) => {
                if let Some((_, buffer)) = self.prompt.as_mut() {
                    buffer.push(c);
                }
            }
            _ => {}
        }
    }

    /// Validate the prompt input and apply the command to the machine.
    /// Invalid input leaves the machine untouched.
    fn submit(&mut self, command: PendingCommand, input: &str) {
        match command {
            PendingCommand::Push => {
                if input.is_empty() {
                    self.error("push needs a return-address label");
                    return;
                }
                let frame = StackFrame::new(input, Vec::new(), Default::default());
                self.machine.push_frame(frame);
                self.status(format!("pushed frame {}", input));
            }
            PendingCommand::Call => {
                let mut fields = input.split_whitespace();
                let Some(name) = fields.next() else {
                    self.error("call needs a function name");
                    return;
                };
                let mut params = Vec::new();
                for field in fields {
                    match parse_int(field) {
                        Some(n) => params.push(n),
                        None => {
                            self.error(format!("'{}' is not a number", field));
                            return;
                        }
                    }
                }
                self.machine.call(name, params);
                self.status(format!("called {}", name));
            }
            PendingCommand::Loop => match parse_int(input) {
                Some(n) => {
                    self.machine.simulate_loop(n);
                    self.trace_scroll = usize::MAX; // auto-scroll to the newest lines
                    self.status(format!("simulated {} loop iteration(s)", n.max(0)));
                }
                None => self.error(format!("'{}' is not a number", input)),
            },
            PendingCommand::Load => match parse_int(input) {
                Some(offset) => {
                    let value = self.machine.load_from_memory(offset);
                    let base = self.machine.registers().int(Register::Ebx);
                    self.status(format!("[0x{:X} + {}] = {}", base, offset, value));
                }
                None => self.error(format!("'{}' is not a number", input)),
            },
            PendingCommand::SetBase => match parse_int(input) {
                Some(address) => {
                    self.machine.registers_mut().set(Register::Ebx, address);
                    self.status(format!("EBX = 0x{:X}", address));
                }
                None => self.error(format!("'{}' is not a number", input)),
            },
        }
    }

    /// Scroll the focused pane by one line
    fn scroll_focused(&mut self, delta: i64) {
        let offset = match self.focused_pane {
            FocusedPane::Stack => &mut self.stack_scroll,
            FocusedPane::Memory => &mut self.memory_scroll,
            FocusedPane::Trace => &mut self.trace_scroll,
            FocusedPane::Registers => return, // four fixed rows, nothing to scroll
        };
        if delta < 0 {
            *offset = offset.saturating_sub(1);
        } else {
            *offset = offset.saturating_add(1);
        }
    }
}
