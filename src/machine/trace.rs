// Diagnostic trace buffer for loop simulation output

use std::fmt;

/// Append-only buffer of diagnostic lines
///
/// The loop simulation reports each iteration here instead of printing, so
/// the UI can render the countdown in a pane and tests can inspect it. The
/// trace is advisory output for the learner — no machine semantics depend on
/// its contents.
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    lines: Vec<String>,
}

impl TraceLog {
    pub fn new() -> Self {
        TraceLog { lines: Vec::new() }
    }

    /// Append one line
    pub fn record(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// All recorded lines, oldest first
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for TraceLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
