//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use vcon::config::Config;

/// Show the effective configuration as TOML.
pub fn handle_show(config: &Config) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Print the config file path.
pub fn handle_path(path: &Path) {
    println!("{}", path.display());
}

/// Write a default config file to `path`.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn handle_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
