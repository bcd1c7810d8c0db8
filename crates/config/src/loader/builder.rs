//! `ConfigLoader` builder and the resolved `SelectorConfig`.

use std::path::PathBuf;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_IMAGE_DIR, ENV_DOTENV_DISABLED};
use crate::persistence::PersistedState;
use crate::types::{GridSize, KeybindOverrides};

/// Fully resolved image selector configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorConfig {
    pub grid_size: GridSize,
    pub image_dir: PathBuf,
    pub keybind_overrides: KeybindOverrides,
}

/// Layered configuration builder.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    grid_size: Option<GridSize>,
    image_dir: Option<PathBuf>,
    keybind_overrides: Option<KeybindOverrides>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from `.env` if present.
    ///
    /// Missing `.env` files are silently ignored.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvParse` or `ConfigError::DotenvIo` if the
    /// file exists but cannot be used.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Apply values from the persisted state file.
    pub fn from_persisted(mut self, state: &PersistedState) -> Self {
        self.grid_size = Some(state.grid_size);
        if state.image_dir.is_some() {
            self.image_dir = state.image_dir.clone();
        }
        self.keybind_overrides = Some(state.keybind_overrides.clone());
        self
    }

    /// Apply environment variable overrides.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Explicit grid size, ignored when `None`.
    pub fn with_grid_size(mut self, size: Option<GridSize>) -> Self {
        if size.is_some() {
            self.grid_size = size;
        }
        self
    }

    /// Explicit image directory, ignored when `None`.
    pub fn with_image_dir(mut self, dir: Option<PathBuf>) -> Self {
        if dir.is_some() {
            self.image_dir = dir;
        }
        self
    }

    pub fn build(self) -> SelectorConfig {
        SelectorConfig {
            grid_size: self.grid_size.unwrap_or_default(),
            image_dir: self
                .image_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IMAGE_DIR)),
            keybind_overrides: self.keybind_overrides.unwrap_or_default(),
        }
    }

    pub(crate) fn set_grid_size(&mut self, size: Option<GridSize>) {
        self.grid_size = size;
    }

    pub(crate) fn set_image_dir(&mut self, dir: Option<PathBuf>) {
        self.image_dir = dir;
    }
}
