//! Configuration management for gridnav.
//!
//! This crate provides types and loaders for the image selector's grid
//! settings, keybinding overrides, and persisted state, sourced from
//! environment variables and a JSON config file.

pub mod constants;
pub mod keybind;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, SelectorConfig};
pub use persistence::{
    ConfigFileError, ConfigManager, GroupRecord, PersistedState, ResultsError, ResultsLog,
};
pub use types::{GridSize, KeybindAction, KeybindOverrides};
