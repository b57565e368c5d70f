//! vcon - render console output into static text.
//!
//! - [`console`] replays `\r`/`\b`/`\n` output into a text buffer
//! - [`wrap`] greedy word wrapping with hooks for offset tracking
//! - [`ansi`] streaming escape-sequence stripping
//! - [`asciicast`] asciicast v3 reader
//! - [`replay`] recordings rendered through the console
//! - [`config`] TOML configuration

pub mod ansi;
pub mod asciicast;
pub mod cli;
pub mod config;
pub mod console;
pub mod replay;
pub mod wrap;

pub use config::Config;
pub use console::{consolify, VirtualConsole};
pub use wrap::{wrap_text, WordWrap};
