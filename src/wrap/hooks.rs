//! Extension points for [`WordWrap`](super::WordWrap).

/// Details of a wrap break, passed to [`WrapHooks::on_chunk_written`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkWritten<'a> {
    /// The remaining text of the logical line, before the break was applied
    pub line: &'a str,
    /// Char index in `line` where it was broken. `None` when nothing fitted
    /// on the partially filled output line and the text moved to a fresh one.
    pub break_index: Option<usize>,
    /// Column on the output line at which the chunk started
    pub column: usize,
    /// Byte offset into the output at which the chunk started
    pub output_offset: usize,
}

/// Hooks invoked by [`WordWrap`](super::WordWrap) while wrapping.
///
/// All methods have defaults: no break tracking, and forced breaks around
/// blank lines.
pub trait WrapHooks {
    /// Called after every wrap break inserted while processing a line.
    fn on_chunk_written(&mut self, _chunk: &ChunkWritten<'_>) {}

    /// Whether the output line must end before `line` is appended.
    fn force_wrap_before(&self, line: &str) -> bool {
        is_blank(line)
    }

    /// Whether the output line must end after `line` is appended.
    fn force_wrap_after(&self, line: &str) -> bool {
        is_blank(line)
    }
}

/// Default hooks: blank lines separate paragraphs.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlankLineBreaks;

impl WrapHooks for BlankLineBreaks {}

/// An owned record of a wrap break.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapBreak {
    /// Chars of the source line written before the break (0 when deferred)
    pub written: usize,
    /// Whether the break was inside a token rather than at a space
    pub hard: bool,
    /// Column on the output line at which the chunk started
    pub column: usize,
    /// Byte offset into the output at which the chunk started
    pub output_offset: usize,
}

/// Records every wrap break so callers can map source text onto the
/// wrapped output.
#[derive(Debug, Clone, Default)]
pub struct OffsetTracker {
    breaks: Vec<WrapBreak>,
}

impl OffsetTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Breaks recorded so far, in output order.
    pub fn breaks(&self) -> &[WrapBreak] {
        &self.breaks
    }

    /// Number of hard (mid-token) breaks.
    pub fn hard_break_count(&self) -> usize {
        self.breaks.iter().filter(|b| b.hard).count()
    }
}

impl WrapHooks for OffsetTracker {
    fn on_chunk_written(&mut self, chunk: &ChunkWritten<'_>) {
        let written = chunk.break_index.unwrap_or(0);
        // A break at a space consumes the space, so the char at the break
        // index is only a space for soft breaks
        let hard = chunk
            .break_index
            .is_some_and(|i| chunk.line.chars().nth(i).is_some_and(|c| c != ' '));

        self.breaks.push(WrapBreak {
            written,
            hard,
            column: chunk.column,
            output_offset: chunk.output_offset,
        });
    }
}

/// A line is blank when it holds nothing but spaces and ASCII control chars.
pub fn is_blank(line: &str) -> bool {
    super::trim_blank(line).is_empty()
}
