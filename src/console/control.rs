//! Control characters interpreted by the virtual console.

/// Characters the console scans for. Everything else is plain text.
pub const CONTROL_CHARS: [char; 3] = ['\r', '\u{8}', '\n'];

/// A control character with console semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlChar {
    /// `\r`: return to the start of the current line
    CarriageReturn,
    /// `\b`: delete the character before the cursor
    Backspace,
    /// `\n`: move to the end of the line and start a new one
    Newline,
}

impl ControlChar {
    /// Classify a character, returning `None` for plain text.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\r' => Some(ControlChar::CarriageReturn),
            '\u{8}' => Some(ControlChar::Backspace),
            '\n' => Some(ControlChar::Newline),
            _ => None,
        }
    }
}

/// Splits input into plain text runs and the control characters between them.
///
/// Yields `(text, Some(control))` for every control character found, where
/// `text` is the plain run before it, then a final `(text, None)` for the
/// trailing run (which may be empty).
pub struct Segments<'a> {
    data: &'a str,
    tail: usize,
    done: bool,
}

impl<'a> Segments<'a> {
    pub fn new(data: &'a str) -> Self {
        Self {
            data,
            tail: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = (&'a str, Option<char>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let rest = &self.data[self.tail..];
        match rest.find(CONTROL_CHARS) {
            Some(offset) => {
                let pos = self.tail + offset;
                let text = &self.data[self.tail..pos];
                // All control chars are single-byte ASCII
                let c = self.data[pos..].chars().next()?;
                self.tail = pos + c.len_utf8();
                Some((text, Some(c)))
            }
            None => {
                self.done = true;
                Some((rest, None))
            }
        }
    }
}
