// Mock terminal capturing builtin output

use crate::parser::ast::Position;

/// Mock terminal for capturing `print` / `println` output
#[derive(Debug, Clone)]
pub struct MockTerminal {
    pub lines: Vec<TerminalLine>,
    /// Whether the last write ended its line
    line_closed: bool,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal {
            lines: Vec::new(),
            line_closed: true,
        }
    }

    /// Print without newline; continues the current line if it is open
    pub fn print(&mut self, text: &str, position: Position) {
        for (i, piece) in text.split('\n').enumerate() {
            if i > 0 {
                self.line_closed = true;
            }
            if piece.is_empty() {
                continue;
            }
            match self.lines.last_mut() {
                Some(last) if !self.line_closed => last.text.push_str(piece),
                _ => self.lines.push(TerminalLine {
                    text: piece.to_string(),
                    position,
                }),
            }
            self.line_closed = false;
        }
    }

    /// Print followed by a line break
    pub fn println(&mut self, text: &str, position: Position) {
        if text.is_empty() && self.line_closed {
            self.lines.push(TerminalLine {
                text: String::new(),
                position,
            });
        } else {
            self.print(text, position);
        }
        self.line_closed = true;
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        self.lines.iter().map(|tl| tl.text.clone()).collect()
    }
}

impl Default for MockTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// A line of terminal output with the position of the call that started it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub text: String,
    pub position: Position,
}
