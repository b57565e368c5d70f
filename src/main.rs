mod commands;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use vcon::cli::{Cli, Commands, ConfigCommands};
use vcon::Config;

/// Log filter env var, in `tracing_subscriber::EnvFilter` syntax.
const LOG_ENV: &str = "VCON_LOG";

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

/// The `--config` path, else the default location.
fn config_path(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::config_path()?),
    }
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    Ok(Config::load_from(&config_path(explicit)?)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let explicit = cli.config.as_deref();

    match cli.command {
        Commands::Consolify { file, keep_ansi } => {
            commands::consolify::handle(file.as_deref(), keep_ansi)
        }
        Commands::Wrap {
            file,
            wrap,
            keep_lines,
        } => {
            let config = load_config(explicit)?;
            commands::wrap::handle(file.as_deref(), &wrap, keep_lines, &config)
        }
        Commands::Replay {
            file,
            until,
            keep_ansi,
            wrap,
        } => {
            let config = load_config(explicit)?;
            let options = commands::replay::ReplayOptions {
                until,
                keep_ansi,
                wrap: &wrap,
            };
            commands::replay::handle(&file, &options, &config)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&load_config(explicit)?),
            ConfigCommands::Path => {
                commands::config::handle_path(&config_path(explicit)?);
                Ok(())
            }
            ConfigCommands::Init { force } => {
                commands::config::handle_init(&config_path(explicit)?, force)
            }
        },
        Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
    }
}
