//! Configuration persistence for user preferences.
//!
//! Responsibilities:
//! - Load and save `PersistedState` as JSON in the platform config directory.
//! - Write atomically (temp file + rename).
//!
//! Does NOT handle:
//! - Environment variable overrides (see `loader`).
//!
//! Invariants:
//! - A missing config file is not an error; defaults are used.
//! - A corrupt config file is reported by `try_load`; `load` backs it up
//!   to `config.corrupt.{timestamp}` before falling back to defaults.

mod path;
mod results;
mod state;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub use path::default_config_path;
pub use results::{GroupRecord, RESULTS_FILE_NAME, ResultsError, ResultsLog};
pub use state::{ConfigFileError, PersistedState, read_config_file};

/// Manages loading and saving user configuration to disk.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new `ConfigManager` using the platform-standard config path.
    ///
    /// # Errors
    /// Returns an error if the project directories cannot be determined.
    pub fn new() -> Result<Self> {
        Ok(Self::new_with_path(default_config_path()?))
    }

    /// Creates a manager for an explicit config file path.
    pub fn new_with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The completed-group results log stored next to the config file.
    pub fn results_log(&self) -> ResultsLog {
        ResultsLog::new(self.config_path.with_file_name(RESULTS_FILE_NAME))
    }

    /// Loads persisted state, falling back to defaults on any failure.
    ///
    /// A file that exists but cannot be read or parsed is renamed to
    /// `config.corrupt.{timestamp}` first, so a later `save` never
    /// overwrites the user's only copy.
    pub fn load(&self) -> PersistedState {
        match self.try_load() {
            Ok(state) => state,
            Err(e) => {
                match create_corrupt_backup(&self.config_path) {
                    Ok(backup_path) => {
                        tracing::warn!(
                            path = %self.config_path.display(),
                            backup_path = %backup_path.display(),
                            error = %e,
                            "Config file is corrupt, backed up and using defaults"
                        );
                    }
                    Err(backup_err) => {
                        tracing::error!(
                            path = %self.config_path.display(),
                            error = %e,
                            backup_error = %backup_err,
                            "Config file is corrupt and backup failed, using defaults"
                        );
                    }
                }
                PersistedState::default()
            }
        }
    }

    /// Loads persisted state, returning defaults only when the file is absent.
    pub fn try_load(&self) -> Result<PersistedState, ConfigFileError> {
        if !self.config_path.exists() {
            tracing::debug!(path = %self.config_path.display(), "No config file, using defaults");
            return Ok(PersistedState::default());
        }
        read_config_file(&self.config_path)
    }

    /// Saves persisted state to disk.
    ///
    /// # Errors
    /// Returns an error if the parent directory cannot be created
    /// or the file cannot be written.
    pub fn save(&self, state: &PersistedState) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let temp_path = self.config_path.with_extension("tmp");
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&temp_path, content).context("Failed to write temporary config file")?;
        std::fs::rename(&temp_path, &self.config_path)
            .context("Failed to move config file into place")?;

        tracing::debug!(
            path = %self.config_path.display(),
            "Config saved successfully"
        );

        Ok(())
    }
}

/// Move a corrupt config file aside, returning the backup path.
pub(crate) fn create_corrupt_backup(path: &Path) -> Result<PathBuf, std::io::Error> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    // with_extension replaces ".json": config.json -> config.corrupt.{timestamp}
    let backup_path = path.with_extension(format!("corrupt.{}", timestamp));
    std::fs::rename(path, &backup_path)?;

    Ok(backup_path)
}
