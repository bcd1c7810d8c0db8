//! Keybinding configuration types for gridnav.
//!
//! Responsibilities:
//! - Define overridable keybinding action identifiers (`KeybindAction`).
//! - Define `KeybindOverrides` for user-defined keybinding customizations.
//!
//! Does NOT handle:
//! - Keybinding parsing or validation (see `keybind` module at crate root).
//! - Runtime key event matching (see TUI crate).
//!
//! Invariants:
//! - `KeybindAction` uses snake_case serialization for config file consistency.
//! - `KeybindOverrides` uses `BTreeMap` for deterministic serialization.
//! - Directional movement is not an overridable action.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An overridable keybinding action identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum KeybindAction {
    /// Quit the application
    Quit,
    /// Toggle the help popup
    Help,
    /// Press the focused grid cell
    PressCell,
    /// Toggle the keep mark on the focused cell
    Keep,
    /// Toggle the delete mark on the focused cell
    Delete,
    /// Grow the visible grid by one row and column
    GrowGrid,
    /// Shrink the visible grid by one row and column
    ShrinkGrid,
    /// Record the grouped cells as a completed group
    CompleteGroup,
}

impl fmt::Display for KeybindAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quit => write!(f, "quit"),
            Self::Help => write!(f, "help"),
            Self::PressCell => write!(f, "press_cell"),
            Self::Keep => write!(f, "keep"),
            Self::Delete => write!(f, "delete"),
            Self::GrowGrid => write!(f, "grow_grid"),
            Self::ShrinkGrid => write!(f, "shrink_grid"),
            Self::CompleteGroup => write!(f, "complete_group"),
        }
    }
}

/// User-defined keybinding overrides.
///
/// Only actions explicitly listed here override the defaults; all others use
/// built-in bindings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeybindOverrides {
    #[serde(default)]
    pub overrides: BTreeMap<KeybindAction, String>,
}

impl KeybindOverrides {
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    pub fn get(&self, action: KeybindAction) -> Option<&str> {
        self.overrides.get(&action).map(|s| s.as_str())
    }
}
