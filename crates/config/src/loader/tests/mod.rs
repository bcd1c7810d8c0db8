//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests touching the environment are `#[serial]` and use `temp_env` so
//!   variables are restored afterwards.
