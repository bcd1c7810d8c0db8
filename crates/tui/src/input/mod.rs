//! Centralized keybinding definitions for the TUI.
//!
//! Responsibilities:
//! - Define the keybinding catalog used by input resolution and the help popup.
//! - Render help text from that catalog.
//!
//! Non-responsibilities:
//! - Arrow keys, which reach the page keydown listener instead (see `page::keyboard`).
//! - Mutating application state directly (handled by `App` via Actions).
//!
//! Invariants:
//! - Keybinding metadata is the single source of truth for help output.
//! - Input resolution returns Actions only and never mutates App state.

pub mod help;
pub mod keymap;
