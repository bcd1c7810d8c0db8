//! Persisted state type and config file reading.
//!
//! Invariants:
//! - Every field has a default, so older or partial files still load.
//! - Errors carry the file path but never the file contents.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{GridSize, KeybindOverrides};

/// User preferences that persist across application runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedState {
    /// Last selected grid size.
    pub grid_size: GridSize,
    /// Directory images were last loaded from.
    pub image_dir: Option<PathBuf>,
    /// User keybinding overrides.
    pub keybind_overrides: KeybindOverrides,
}

/// Errors reading the config file.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read and parse a config file.
pub fn read_config_file(path: &Path) -> Result<PersistedState, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
