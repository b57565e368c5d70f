//! Virtual console for rendering raw process output.
//!
//! Programs that draw progress bars or spinners rewrite the same line over
//! and over with `\r` and `\b`. Dumping that output verbatim shows every
//! intermediate frame. [`VirtualConsole`] replays the stream into a text
//! buffer the way a terminal would, so only the final state remains.
//!
//! Only `\r`, `\b` and `\n` are interpreted. Escape sequences should be
//! removed beforehand (see [`crate::ansi`]).

mod control;

pub use control::{ControlChar, Segments, CONTROL_CHARS};

use std::fmt;

/// A line-oriented text buffer with a write cursor.
///
/// Positions are counted in `char`s. The cursor always satisfies
/// `0 <= cursor <= len`.
#[derive(Debug, Clone, Default)]
pub struct VirtualConsole {
    buffer: Vec<char>,
    cursor: usize,
}

impl VirtualConsole {
    /// Create an empty console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a chunk of output.
    ///
    /// Plain text overwrites the buffer at the cursor, extending it when the
    /// write runs past the end. Control characters move the cursor or delete
    /// content. Empty input is a no-op.
    pub fn submit(&mut self, data: &str) {
        if data.is_empty() {
            return;
        }

        for (text, control) in Segments::new(data) {
            // If we passed over any plain text on the way to this control
            // character, write it first
            self.text(text);

            let Some(c) = control else {
                continue;
            };

            match ControlChar::from_char(c) {
                Some(ControlChar::CarriageReturn) => self.carriage_return(),
                Some(ControlChar::Backspace) => self.backspace(),
                Some(ControlChar::Newline) => self.newline(),
                None => {
                    if cfg!(debug_assertions) {
                        unreachable!("unclassified control char {:?}", c);
                    }
                    tracing::warn!(char = ?c, "unclassified control char, writing as text");
                    let mut tmp = [0u8; 4];
                    self.text(c.encode_utf8(&mut tmp));
                }
            }
        }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Discard all content and reset the cursor.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Render a single string through a fresh console.
    pub fn consolify(text: &str) -> String {
        let mut console = Self::new();
        console.submit(text);
        console.to_string()
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.buffer.remove(self.cursor);
    }

    fn carriage_return(&mut self) {
        while self.cursor > 0 && self.buffer[self.cursor - 1] != '\n' {
            self.cursor -= 1;
        }
        // Now at the start of the buffer or just past a '\n'
    }

    fn newline(&mut self) {
        while self.cursor < self.buffer.len() && self.buffer[self.cursor] != '\n' {
            self.cursor += 1;
        }
        // Now at the end of the buffer or on top of a '\n'
        self.text("\n");
    }

    fn text(&mut self, text: &str) {
        debug_assert!(!text.contains(['\r', '\u{8}']));

        for c in text.chars() {
            if self.cursor < self.buffer.len() {
                self.buffer[self.cursor] = c;
            } else {
                self.buffer.push(c);
            }
            self.cursor += 1;
        }
    }
}

impl fmt::Display for VirtualConsole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: String = self.buffer.iter().collect();
        f.write_str(&rendered)
    }
}

/// Shorthand for [`VirtualConsole::consolify`].
pub fn consolify(text: &str) -> String {
    VirtualConsole::consolify(text)
}
