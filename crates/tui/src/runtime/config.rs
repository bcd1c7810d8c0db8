//! Configuration loading and persistence for the TUI.
//!
//! Responsibilities:
//! - Resolve the config file path and load persisted state.
//! - Layer persisted state, environment variables, and CLI flags.
//! - Save persisted state on application exit.
//!
//! Does NOT handle:
//! - Parsing individual env vars (see `gridnav_config`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Configuration precedence: CLI args > env vars > persisted config > defaults.
//! - `load_dotenv()` is called before reading environment variables.
//! - With `--fresh`, persisted state is neither read nor written.

use anyhow::Result;
use gridnav_config::{ConfigLoader, ConfigManager, PersistedState, SelectorConfig};

use crate::app::App;
use crate::cli::Cli;

/// Everything startup needs from the configuration layers.
#[derive(Debug)]
pub struct LoadedConfig {
    pub manager: ConfigManager,
    pub persisted: PersistedState,
    pub config: SelectorConfig,
}

/// Config manager for the CLI path, or the platform default when the path
/// is absent or blank.
pub fn config_manager(cli: &Cli) -> Result<ConfigManager> {
    match &cli.config_path {
        Some(path) if !path.to_string_lossy().trim().is_empty() => {
            Ok(ConfigManager::new_with_path(path.clone()))
        }
        _ => ConfigManager::new(),
    }
}

/// Load and layer configuration for this session.
///
/// # Errors
///
/// Returns an error if the `.env` file is malformed, an environment
/// variable holds an invalid value, or the config directory cannot be
/// determined.
pub fn load_config(cli: &Cli) -> Result<LoadedConfig> {
    let manager = config_manager(cli)?;
    let persisted = if cli.fresh {
        tracing::info!("--fresh flag set, starting with default state");
        PersistedState::default()
    } else {
        manager.load()
    };

    let config = ConfigLoader::new()
        .load_dotenv()?
        .from_persisted(&persisted)
        .from_env()?
        .with_grid_size(cli.grid_size)
        .with_image_dir(cli.image_dir.clone())
        .build();

    tracing::info!(
        grid_size = %config.grid_size,
        image_dir = %config.image_dir.display(),
        "Configuration resolved"
    );

    Ok(LoadedConfig {
        manager,
        persisted,
        config,
    })
}

/// Write the session's settings back to the config file.
///
/// Skipped entirely when `fresh` is set.
pub fn save_on_quit(
    app: &App,
    manager: &ConfigManager,
    mut persisted: PersistedState,
    fresh: bool,
) -> Result<()> {
    if fresh {
        tracing::debug!("--fresh flag set, not saving state");
        return Ok(());
    }
    app.persist_into(&mut persisted);
    manager.save(&persisted)?;
    tracing::info!(path = %manager.config_path().display(), "Saved state");
    Ok(())
}
