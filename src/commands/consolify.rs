//! `vcon consolify`

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use vcon::ansi::AnsiStripper;
use vcon::console::VirtualConsole;

use super::read_input;

/// Render raw output from a file or stdin and print the final text.
pub fn handle(file: Option<&Path>, keep_ansi: bool) -> Result<()> {
    let raw = read_input(file)?;

    let text = if keep_ansi {
        String::from_utf8_lossy(&raw).into_owned()
    } else {
        AnsiStripper::new().push(&raw)
    };

    let mut console = VirtualConsole::new();
    console.submit(&text);
    tracing::debug!(chars = console.len(), "rendered console");

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", console)?;
    stdout.flush()?;
    Ok(())
}
