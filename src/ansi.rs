//! ANSI escape sequence stripping.
//!
//! Raw terminal output mixes text with CSI/OSC/DCS sequences. The virtual
//! console only understands `\r`, `\b` and `\n`, so everything else has to
//! go first. A `vte` parser does the tokenizing, which keeps sequences that
//! are split across output chunks intact.

use vte::{Parser, Perform};

/// Streaming escape-sequence stripper.
///
/// Parser state survives between [`push`](Self::push) calls.
pub struct AnsiStripper {
    parser: Parser,
    performer: PlainText,
}

impl AnsiStripper {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
            performer: PlainText::default(),
        }
    }

    /// Feed raw bytes, returning the plain text they produced.
    ///
    /// Printable characters and the `\n`, `\r`, `\b`, `\t` controls are kept.
    pub fn push(&mut self, bytes: &[u8]) -> String {
        self.parser.advance(&mut self.performer, bytes);
        std::mem::take(&mut self.performer.out)
    }

    /// Strip a complete string in one go.
    pub fn strip(text: &str) -> String {
        Self::new().push(text.as_bytes())
    }
}

impl Default for AnsiStripper {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Default)]
struct PlainText {
    out: String,
}

impl Perform for PlainText {
    fn print(&mut self, c: char) {
        self.out.push(c);
    }

    fn execute(&mut self, byte: u8) {
        match byte {
            b'\n' | b'\r' | b'\t' | 0x08 => self.out.push(byte as char),
            _ => {}
        }
    }
}
