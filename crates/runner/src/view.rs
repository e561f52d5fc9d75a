//! Terminal view for the answer

use holiday_ports::AnswerView;
use std::io::{self, Stdout, Write};

/// Writes each new label on its own line
///
/// A label equal to the one last written is skipped, so a once-per-second
/// stream of identical answers prints a single line.
pub struct LineView<W: Write + Send> {
    out: W,
    last: Option<String>,
}

impl LineView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> LineView<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    /// Text currently displayed
    pub fn current(&self) -> Option<&str> {
        self.last.as_deref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> AnswerView for LineView<W> {
    fn show(&mut self, text: &str) {
        if self.last.as_deref() == Some(text) {
            return;
        }

        if let Err(e) = writeln!(self.out, "{}", text).and_then(|_| self.out.flush()) {
            log::warn!("Failed to write answer: {}", e);
            return;
        }
        self.last = Some(text.to_string());
    }
}
