//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod consolify;
pub mod replay;
pub mod wrap;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};

use vcon::cli::WrapArgs;
use vcon::config::WrapConfig;
use vcon::wrap::WordWrap;

/// Read a whole input file, or stdin when `file` is `None`.
fn read_input(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Build a wrapper from CLI flags layered over the config defaults.
fn build_wrapper(args: &WrapArgs, config: &WrapConfig) -> WordWrap {
    let width = config.effective_width(args.width);
    let hard = args.hard_override().unwrap_or(config.hard_wrap);
    let mut wrap = WordWrap::new(width, hard);
    wrap.set_indent(args.indent.as_deref().unwrap_or(config.indent.as_str()));
    tracing::debug!(width, hard, "wrapping output");
    wrap
}

/// Wrap every line of `text`, ending non-empty output with a newline.
///
/// With `keep_lines`, each input line is wrapped on its own instead of being
/// joined into a paragraph with its neighbours.
fn wrap_lines(text: &str, args: &WrapArgs, config: &WrapConfig, keep_lines: bool) -> String {
    let mut wrap = build_wrapper(args, config);
    for line in text.lines() {
        wrap.append_line(line);
        if keep_lines {
            wrap.end_line();
        }
    }
    let mut output = wrap.into_output();
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    output
}
