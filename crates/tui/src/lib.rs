//! gridnav TUI library
//!
//! Core application state, keyboard dispatch, and rendering for the
//! gridnav image selector.
//!
//! # Example
//!
//! ```rust
//! use crossterm::event::{KeyCode, KeyEvent};
//! use gridnav_config::GridSize;
//! use gridnav_tui::{App, ImageList, KeybindOverrideTable};
//!
//! let mut app = App::new(
//!     GridSize::new(3),
//!     ImageList::from_entries(Vec::new()),
//!     KeybindOverrideTable::default(),
//! );
//! app.handle_input(KeyEvent::from(KeyCode::Right));
//! assert_eq!(app.grid.focus().map(|p| p.col), Some(1));
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod grid;
pub mod images;
pub mod input;
pub mod page;
pub mod runtime;
pub mod ui;

// Re-export commonly used types at the crate root
pub use action::Action;
pub use app::App;
pub use grid::{Direction, FocusGrid, Mark, Position};
pub use images::{ImageEntry, ImageList};
pub use input::keymap::KeybindOverrideTable;
pub use page::Page;
pub use page::keyboard::KeyboardEvent;
