//! CLI definitions for vcon.
//!
//! Lives in the library so the xtask crate can generate the man page from
//! the same definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

/// Build version string: crate version plus git SHA for dev builds.
pub fn version() -> &'static str {
    #[cfg(not(feature = "release"))]
    {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (",
            env!("VERGEN_GIT_SHA"),
            " ",
            env!("VCON_BUILD_DATE"),
            ")"
        )
    }
    #[cfg(feature = "release")]
    {
        concat!(env!("CARGO_PKG_VERSION"), " (", env!("VCON_BUILD_DATE"), ")")
    }
}

#[derive(Parser, Debug)]
#[command(name = "vcon")]
#[command(version = version(), about = "Render console output into static text")]
#[command(long_about = "Render console output into static text.

Programs that draw progress bars rewrite lines with carriage returns and
backspaces. vcon replays such output the way a terminal would and prints
only the final state, optionally word-wrapped.

EXAMPLES:
    some-build 2>&1 | vcon consolify
    vcon wrap notes.txt --width 72
    vcon replay session.cast --until 30 --width 100")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of the default location
    #[arg(long, env = "VCON_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interpret \r, \b and \n in raw output and print the final text
    Consolify {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,

        /// Leave ANSI escape sequences in the output
        #[arg(long)]
        keep_ansi: bool,
    },

    /// Greedy word-wrap text; blank lines separate paragraphs
    Wrap {
        /// Input file (stdin when omitted)
        file: Option<PathBuf>,

        #[command(flatten)]
        wrap: WrapArgs,

        /// Wrap each input line on its own instead of joining paragraphs
        #[arg(long)]
        keep_lines: bool,
    },

    /// Replay an asciicast v3 recording and print the rendered console
    ///
    /// The output is word-wrapped when --width, --hard or --indent is given.
    /// Console lines are wrapped one by one, never joined.
    Replay {
        /// Recording to replay
        file: PathBuf,

        /// Stop after this many seconds of recording
        #[arg(long, value_name = "SECS")]
        until: Option<f64>,

        /// Leave ANSI escape sequences in the output
        #[arg(long)]
        keep_ansi: bool,

        #[command(flatten)]
        wrap: WrapArgs,
    },

    /// Inspect or create the config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(clap::Args, Debug, Default)]
pub struct WrapArgs {
    /// Maximum line length (defaults to config, then terminal width)
    #[arg(short, long)]
    pub width: Option<usize>,

    /// Split words longer than the line
    #[arg(long, overrides_with = "no_hard")]
    pub hard: bool,

    /// Let long words overflow even when the config enables hard wrapping
    #[arg(long, overrides_with = "hard")]
    pub no_hard: bool,

    /// Prefix for every output line
    #[arg(long)]
    pub indent: Option<String>,
}

impl WrapArgs {
    /// `Some` when `--hard` or `--no-hard` was given; the last one wins.
    pub fn hard_override(&self) -> Option<bool> {
        if self.hard {
            Some(true)
        } else if self.no_hard {
            Some(false)
        } else {
            None
        }
    }

    /// Whether any option asks for wrapping. `--no-hard` alone doesn't.
    pub fn requests_wrap(&self) -> bool {
        self.width.is_some() || self.hard || self.indent.is_some()
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
