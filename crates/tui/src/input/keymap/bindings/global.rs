//! Global keybindings.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::action::Action;

use super::super::{Keybinding, Matcher, Section};

pub(super) fn bindings() -> Vec<Keybinding> {
    vec![
        Keybinding {
            section: Section::Global,
            keys: "q",
            description: "Quit",
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::Quit),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "Ctrl+c",
            description: "Quit",
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
            }),
            action: Some(Action::Quit),
            handles_input: true,
        },
        Keybinding {
            section: Section::Global,
            keys: "?",
            description: "Toggle help",
            matcher: Some(Matcher::Key {
                code: KeyCode::Char('?'),
                modifiers: KeyModifiers::NONE,
            }),
            action: Some(Action::ToggleHelp),
            handles_input: true,
        },
    ]
}
