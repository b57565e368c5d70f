//! `vcon replay`

use std::io::{self, Write};
use std::path::Path;

use anyhow::{bail, Result};

use vcon::asciicast::AsciicastFile;
use vcon::cli::WrapArgs;
use vcon::config::Config;
use vcon::replay::replay;

use super::wrap_lines;

/// Options for a replay run, gathered from the command line.
pub struct ReplayOptions<'a> {
    pub until: Option<f64>,
    pub keep_ansi: bool,
    pub wrap: &'a WrapArgs,
}

/// Replay a recording and print the rendered console text.
pub fn handle(file: &Path, options: &ReplayOptions<'_>, config: &Config) -> Result<()> {
    if let Some(until) = options.until {
        if !until.is_finite() || until < 0.0 {
            bail!("--until must be a non-negative number of seconds (got {})", until);
        }
    }

    let cast = AsciicastFile::parse(file)?;
    let strip_ansi = config.replay.strip_ansi && !options.keep_ansi;
    let rendered = replay(&cast, options.until, strip_ansi);

    let output = if options.wrap.requests_wrap() {
        // Console lines are independent; never join them into paragraphs
        wrap_lines(&rendered, options.wrap, &config.wrap, true)
    } else {
        rendered
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
