//! `vcon wrap`

use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use vcon::cli::WrapArgs;
use vcon::config::Config;

use super::{read_input, wrap_lines};

/// Word-wrap a file or stdin.
pub fn handle(
    file: Option<&Path>,
    args: &WrapArgs,
    keep_lines: bool,
    config: &Config,
) -> Result<()> {
    let raw = read_input(file)?;
    let text = String::from_utf8_lossy(&raw);

    let output = wrap_lines(&text, args, &config.wrap, keep_lines);

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
