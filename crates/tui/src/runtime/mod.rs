//! Runtime components for the TUI application.
//!
//! - Terminal management (TerminalGuard)
//! - Configuration loading and persistence
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `gridnav_tui::app` and `gridnav_tui::ui`).
//!
//! Invariants:
//! - All modules are initialized during application startup in `main()`.

pub mod config;
pub mod terminal;
