//! Keybinding override resolution.
//!
//! Bridges the config crate's `KeybindOverrides` with crossterm key events.
//!
//! Responsibilities:
//! - Convert config keybinding strings into crossterm KeyEvents.
//! - Build a lookup table for override resolution at runtime.
//! - Fall back to defaults (with a warning) when overrides are invalid.
//!
//! Does NOT handle:
//! - Parsing key strings (handled by `gridnav_config::keybind`).
//! - Runtime keybinding changes (overrides are immutable after startup).

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gridnav_config::keybind::{KeyCodeName, ModifierFlags, ParsedKey, parse_key, validate_overrides};
use gridnav_config::{KeybindAction, KeybindOverrides};

use crate::action::Action;
use crate::grid::Mark;

/// Pre-computed override lookup table.
#[derive(Debug, Clone, Default)]
pub struct KeybindOverrideTable {
    overrides: HashMap<(KeyCode, KeyModifiers), Action>,
    /// Original key strings, for help display.
    display_keys: HashMap<KeybindAction, String>,
}

impl KeybindOverrideTable {
    /// Build the override table from config.
    ///
    /// # Errors
    ///
    /// Returns an error if any keybinding cannot be parsed.
    pub fn from_overrides(overrides: &KeybindOverrides) -> Result<Self, String> {
        let mut table = Self::default();

        for (action, key_str) in &overrides.overrides {
            let parsed = parse_key(key_str)
                .map_err(|e| format!("Failed to parse keybinding for '{}': {}", action, e))?;
            let key_event = parsed_key_to_crossterm(&parsed);
            table
                .overrides
                .insert((key_event.code, key_event.modifiers), action_for_keybind(*action));
            table.display_keys.insert(*action, key_str.clone());
        }

        Ok(table)
    }

    /// Validate and build, logging and falling back to an empty table on failure.
    pub fn init(overrides: &KeybindOverrides) -> Self {
        if overrides.is_empty() {
            tracing::debug!("No keybinding overrides configured");
            return Self::default();
        }

        if let Err(e) = validate_overrides(&overrides.overrides) {
            tracing::warn!(
                "Keybinding validation failed: {}. Using default keybindings.",
                e
            );
            return Self::default();
        }

        match Self::from_overrides(overrides) {
            Ok(table) => {
                tracing::info!("Loaded {} keybinding override(s)", table.len());
                table
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to build keybinding override table: {}. Using default keybindings.",
                    e
                );
                Self::default()
            }
        }
    }

    pub fn resolve(&self, key: KeyEvent) -> Option<Action> {
        self.overrides.get(&(key.code, key.modifiers)).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Override key string for an action, if one is configured.
    pub fn key_for(&self, action: KeybindAction) -> Option<&str> {
        self.display_keys.get(&action).map(String::as_str)
    }
}

fn parsed_key_to_crossterm(parsed: &ParsedKey) -> KeyEvent {
    let code = match &parsed.code {
        KeyCodeName::Char(c) => KeyCode::Char(*c),
        KeyCodeName::F(n) => KeyCode::F(*n),
        KeyCodeName::Esc => KeyCode::Esc,
        KeyCodeName::Enter => KeyCode::Enter,
        KeyCodeName::Space => KeyCode::Char(' '),
        KeyCodeName::Tab => KeyCode::Tab,
        KeyCodeName::BackTab => KeyCode::BackTab,
        KeyCodeName::Backspace => KeyCode::Backspace,
        KeyCodeName::Delete => KeyCode::Delete,
        KeyCodeName::Insert => KeyCode::Insert,
        KeyCodeName::Home => KeyCode::Home,
        KeyCodeName::End => KeyCode::End,
        KeyCodeName::PageUp => KeyCode::PageUp,
        KeyCodeName::PageDown => KeyCode::PageDown,
        KeyCodeName::Up => KeyCode::Up,
        KeyCodeName::Down => KeyCode::Down,
        KeyCodeName::Left => KeyCode::Left,
        KeyCodeName::Right => KeyCode::Right,
    };

    KeyEvent::new(code, modifier_flags_to_crossterm(&parsed.modifiers))
}

fn modifier_flags_to_crossterm(flags: &ModifierFlags) -> KeyModifiers {
    let mut modifiers = KeyModifiers::NONE;
    if flags.ctrl {
        modifiers |= KeyModifiers::CONTROL;
    }
    if flags.shift {
        modifiers |= KeyModifiers::SHIFT;
    }
    if flags.alt {
        modifiers |= KeyModifiers::ALT;
    }
    modifiers
}

fn action_for_keybind(action: KeybindAction) -> Action {
    match action {
        KeybindAction::Quit => Action::Quit,
        KeybindAction::Help => Action::ToggleHelp,
        KeybindAction::PressCell => Action::PressCell,
        KeybindAction::Keep => Action::ToggleMark(Mark::Keep),
        KeybindAction::Delete => Action::ToggleMark(Mark::Delete),
        KeybindAction::GrowGrid => Action::GrowGrid,
        KeybindAction::ShrinkGrid => Action::ShrinkGrid,
        KeybindAction::CompleteGroup => Action::CompleteGroup,
    }
}

/// The overridable action an app Action corresponds to, if any.
pub(crate) fn keybind_for_action(action: &Action) -> Option<KeybindAction> {
    match action {
        Action::Quit => Some(KeybindAction::Quit),
        Action::ToggleHelp => Some(KeybindAction::Help),
        Action::PressCell => Some(KeybindAction::PressCell),
        Action::ToggleMark(Mark::Keep) => Some(KeybindAction::Keep),
        Action::ToggleMark(Mark::Delete) => Some(KeybindAction::Delete),
        Action::GrowGrid => Some(KeybindAction::GrowGrid),
        Action::ShrinkGrid => Some(KeybindAction::ShrinkGrid),
        Action::CompleteGroup => Some(KeybindAction::CompleteGroup),
        _ => None,
    }
}
