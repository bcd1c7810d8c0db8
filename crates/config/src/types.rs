//! Configuration types for gridnav.

mod grid;
pub mod keybind;

pub use grid::GridSize;
pub use keybind::{KeybindAction, KeybindOverrides};
