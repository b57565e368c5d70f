//! Greedy word wrapping.
//!
//! [`WordWrap`] accepts logical lines one at a time and packs them into
//! output lines no longer than a maximum width, breaking at the last space
//! that fits. Consecutive non-blank lines are joined into one paragraph;
//! blank lines end the paragraph.
//!
//! Widths are counted in `char`s.
//!
//! ```
//! use vcon::wrap::WordWrap;
//!
//! let mut wrap = WordWrap::new(10, false);
//! wrap.append_line("hello world foo");
//! assert_eq!(wrap.output(), "hello\nworld foo");
//! ```

mod hooks;

pub use hooks::{is_blank, BlankLineBreaks, ChunkWritten, OffsetTracker, WrapBreak, WrapHooks};

use tracing::trace;

/// Incremental greedy word wrapper.
#[derive(Debug, Clone)]
pub struct WordWrap<H = BlankLineBreaks> {
    output: String,
    line_length: usize,
    max_line_length: usize,
    hard_wrap: bool,
    indent: String,
    indent_length: usize,
    hooks: H,
}

impl WordWrap<BlankLineBreaks> {
    /// Create a wrapper with the default blank-line hooks.
    ///
    /// With `hard_wrap` set, a token longer than the available width is
    /// split mid-token; otherwise it is kept whole and overflows.
    pub fn new(max_line_length: usize, hard_wrap: bool) -> Self {
        Self::with_hooks(max_line_length, hard_wrap, BlankLineBreaks)
    }
}

impl<H: WrapHooks> WordWrap<H> {
    /// Create a wrapper with custom hooks.
    pub fn with_hooks(max_line_length: usize, hard_wrap: bool, hooks: H) -> Self {
        Self {
            output: String::new(),
            line_length: 0,
            max_line_length,
            hard_wrap,
            indent: String::new(),
            indent_length: 0,
            hooks,
        }
    }

    /// Set the prefix written before the first content of each output line.
    ///
    /// Takes effect from the next output line that is started.
    pub fn set_indent(&mut self, indent: impl Into<String>) {
        self.indent = indent.into();
        self.indent_length = self.indent.chars().count();
    }

    pub fn indent(&self) -> &str {
        &self.indent
    }

    pub fn max_line_length(&self) -> usize {
        self.max_line_length
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Append one logical line.
    ///
    /// `line` must not contain `'\n'`; split multi-line text first (see
    /// [`wrap_text`]).
    pub fn append_line(&mut self, line: &str) {
        if self.hooks.force_wrap_before(line) && !self.at_beginning_of_line() {
            self.wrap();
        }

        self.process_line(line);

        if self.hooks.force_wrap_after(line) {
            self.append_raw("\n");
        }
    }

    /// End the current output line if it has content.
    ///
    /// The next appended line starts fresh instead of joining this one.
    pub fn end_line(&mut self) {
        if !self.at_beginning_of_line() {
            self.wrap();
        }
    }

    /// The wrapped text produced so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consume the wrapper, returning the output and the hooks.
    pub fn into_parts(self) -> (String, H) {
        (self.output, self.hooks)
    }

    pub fn into_output(self) -> String {
        self.output
    }

    fn at_beginning_of_line(&self) -> bool {
        self.line_length == 0
    }

    fn process_line(&mut self, line: &str) {
        debug_assert!(!line.contains('\n'), "line must not contain a newline");

        let mut line = trim_blank(line);

        if !line.is_empty() && self.line_length > 0 && self.line_length < self.max_line_length {
            // About to append content mid-line
            self.append_raw(" ");
        }

        // Loop while the line doesn't fit in what's left of the output line
        while !line.is_empty() {
            let chars_left = if self.line_length == 0 {
                self.max_line_length.saturating_sub(self.indent_length)
            } else {
                self.max_line_length.saturating_sub(self.line_length)
            };

            let length = line.chars().count();
            trace!(line, length, line_length = self.line_length, chars_left, "wrapping");

            if length <= chars_left {
                break;
            }

            let mut break_chars = 1;

            // Look for the last space that fits on the current line
            let mut index = last_space_at_or_before(line, chars_left);
            if index.is_none() && self.line_length == 0 {
                let mut forward = next_space_after(line, chars_left).unwrap_or(length);
                if self.hard_wrap && forward > chars_left {
                    // Always consume something, even when the indent leaves no room
                    forward = chars_left.max(1);
                    break_chars = 0;
                }
                index = Some(forward);
            }

            let column = self.line_length;
            let output_offset = self.output.len();
            if let Some(i) = index.filter(|&i| i > 0) {
                self.append_raw_with_indent(char_prefix(line, i));
            }
            self.wrap();
            self.hooks.on_chunk_written(&ChunkWritten {
                line,
                break_index: index,
                column,
                output_offset,
            });

            let consumed = index.map_or(0, |i| (i + break_chars).min(length));
            line = trim_blank(char_suffix(line, consumed));
        }

        // Append the rest of the line. At line start this writes the indent
        // even when nothing is left
        self.append_raw_with_indent(line);
    }

    fn wrap(&mut self) {
        if !self.output.is_empty() {
            self.append_raw("\n");
        }
    }

    fn append_raw_with_indent(&mut self, value: &str) {
        debug_assert!(!value.contains('\n'));
        if self.line_length == 0 && !self.indent.is_empty() {
            let indent = std::mem::take(&mut self.indent);
            self.append_raw(&indent);
            self.indent = indent;
        }
        self.append_raw(value);
    }

    fn append_raw(&mut self, value: &str) {
        if value.is_empty() {
            return;
        }

        self.output.push_str(value);
        match value.rfind('\n') {
            None => self.line_length += value.chars().count(),
            Some(index) => self.line_length = value[index + 1..].chars().count(),
        }
    }
}

/// Wrap every line of `text` with a fresh [`WordWrap`].
pub fn wrap_text(text: &str, max_line_length: usize, hard_wrap: bool) -> String {
    let mut wrap = WordWrap::new(max_line_length, hard_wrap);
    for line in text.lines() {
        wrap.append_line(line);
    }
    wrap.into_output()
}

/// Trim leading and trailing spaces and ASCII control chars.
///
/// Other Unicode whitespace such as U+00A0 is content and stays.
pub(crate) fn trim_blank(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Char index of the last `' '` at or before char index `limit`.
fn last_space_at_or_before(s: &str, limit: usize) -> Option<usize> {
    s.chars()
        .take(limit.saturating_add(1))
        .enumerate()
        .filter(|&(_, c)| c == ' ')
        .map(|(i, _)| i)
        .last()
}

/// Char index of the first `' '` at or after char index `from`.
fn next_space_after(s: &str, from: usize) -> Option<usize> {
    s.chars()
        .enumerate()
        .skip(from)
        .find(|&(_, c)| c == ' ')
        .map(|(i, _)| i)
}

fn char_byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

fn char_prefix(s: &str, chars: usize) -> &str {
    &s[..char_byte_offset(s, chars)]
}

fn char_suffix(s: &str, chars: usize) -> &str {
    &s[char_byte_offset(s, chars)..]
}
