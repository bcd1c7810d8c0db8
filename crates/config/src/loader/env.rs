//! Environment variable parsing for configuration.
//!
//! Invariants:
//! - Empty or whitespace-only variables are treated as unset.
//! - Returned values are trimmed.
//! - Unparseable values return `ConfigError::InvalidValue`.

use std::path::PathBuf;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{ENV_GRID_SIZE, ENV_IMAGE_DIR};
use crate::types::GridSize;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(size) = env_var_or_none(ENV_GRID_SIZE) {
        let size: GridSize = size.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_GRID_SIZE.to_string(),
            message: format!("'{}' is not a number", size),
        })?;
        loader.set_grid_size(Some(size));
    }
    if let Some(dir) = env_var_or_none(ENV_IMAGE_DIR) {
        loader.set_image_dir(Some(PathBuf::from(dir)));
    }
    Ok(())
}
