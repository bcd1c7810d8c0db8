//! Keybinding catalog and input resolver.
//!
//! Invariants:
//! - Bindings are ordered for stable help rendering.
//! - Overrides are consulted before defaults; defaults stay active.
//! - The resolver returns at most one Action.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;

mod bindings;
pub mod overrides;

pub use overrides::KeybindOverrideTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    Global,
    Grid,
    Navigation,
}

impl Section {
    pub(crate) const ORDER: [Section; 3] = [Section::Global, Section::Grid, Section::Navigation];

    pub(crate) fn title(self) -> &'static str {
        match self {
            Section::Global => "Global",
            Section::Grid => "Grid",
            Section::Navigation => "Navigation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Matcher {
    Key {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
}

#[derive(Debug, Clone)]
pub(crate) struct Keybinding {
    pub(crate) section: Section,
    pub(crate) keys: &'static str,
    pub(crate) description: &'static str,
    pub(crate) matcher: Option<Matcher>,
    pub(crate) action: Option<Action>,
    /// False for documentation-only rows handled elsewhere.
    pub(crate) handles_input: bool,
}

impl Keybinding {
    fn matches(&self, key: KeyEvent) -> bool {
        let Some(Matcher::Key { code, modifiers }) = self.matcher else {
            return false;
        };
        if key.code != code {
            return false;
        }
        // Symbols like '+' and '?' arrive with SHIFT on some terminals.
        let mut pressed = key.modifiers;
        if matches!(code, KeyCode::Char(c) if !c.is_ascii_alphabetic()) {
            pressed.remove(KeyModifiers::SHIFT);
        }
        pressed == modifiers
    }
}

pub(crate) fn keybindings() -> Vec<Keybinding> {
    bindings::all()
}

/// Resolve a key press to an app-level Action.
pub fn resolve_action(overrides: &KeybindOverrideTable, key: KeyEvent) -> Option<Action> {
    if let Some(action) = overrides.resolve(key) {
        return Some(action);
    }
    keybindings()
        .into_iter()
        .filter(|binding| binding.handles_input)
        .find(|binding| binding.matches(key))
        .and_then(|binding| binding.action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Mark;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn resolve(code: KeyCode) -> Option<Action> {
        resolve_action(&KeybindOverrideTable::default(), key(code))
    }

    #[test]
    fn resolves_quit() {
        assert_eq!(resolve(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(
            resolve_action(
                &KeybindOverrideTable::default(),
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn resolves_grid_keys() {
        assert_eq!(resolve(KeyCode::Enter), Some(Action::PressCell));
        assert_eq!(resolve(KeyCode::Char(' ')), Some(Action::PressCell));
        assert_eq!(resolve(KeyCode::Char('k')), Some(Action::ToggleMark(Mark::Keep)));
        assert_eq!(resolve(KeyCode::Char('d')), Some(Action::ToggleMark(Mark::Delete)));
        assert_eq!(resolve(KeyCode::Char('+')), Some(Action::GrowGrid));
        assert_eq!(resolve(KeyCode::Char('-')), Some(Action::ShrinkGrid));
        assert_eq!(resolve(KeyCode::Char('c')), Some(Action::CompleteGroup));
    }

    #[test]
    fn shifted_symbols_still_match() {
        let shifted = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(
            resolve_action(&KeybindOverrideTable::default(), shifted),
            Some(Action::GrowGrid)
        );
        let shifted_letter = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::SHIFT);
        assert_eq!(
            resolve_action(&KeybindOverrideTable::default(), shifted_letter),
            None
        );
    }

    #[test]
    fn arrow_keys_are_not_app_bindings() {
        for code in [KeyCode::Left, KeyCode::Right, KeyCode::Up, KeyCode::Down] {
            assert_eq!(resolve(code), None);
        }
    }

    #[test]
    fn arrow_rows_are_documented() {
        let nav: Vec<_> = keybindings()
            .into_iter()
            .filter(|b| b.section == Section::Navigation)
            .collect();
        assert_eq!(nav.len(), 4);
        assert!(nav.iter().all(|b| !b.handles_input));
    }
}
