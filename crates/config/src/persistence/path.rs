//! Path helpers for configuration file locations.
//!
//! Uses the `directories` crate for platform-appropriate paths:
//! - Linux/macOS: `~/.config/gridnav/config.json`
//! - Windows: `%AppData%\gridnav\config.json`

use std::path::PathBuf;

use anyhow::Context;

/// Returns the default path to the configuration file.
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", "gridnav")
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join("config.json"))
}
