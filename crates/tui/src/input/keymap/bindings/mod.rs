//! Keybinding definitions grouped by section.
//!
//! Invariants:
//! - Binding order is stable for deterministic help output.

mod global;
mod grid;

use super::Keybinding;

pub(super) fn all() -> Vec<Keybinding> {
    let mut bindings = Vec::new();
    bindings.extend(global::bindings());
    bindings.extend(grid::bindings());
    bindings
}
