//! Configuration loader for environment variables and persisted state.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and the persisted state file.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate so tests never pick up a stray `.env`.
//!
//! Does NOT handle:
//! - Persisting configuration changes back to disk (see `persistence`).
//!
//! Invariants / Assumptions:
//! - Layers applied later win: defaults < persisted file < environment < explicit `with_*` calls.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::{ConfigLoader, SelectorConfig};
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
