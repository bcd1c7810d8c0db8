//! Grid keybindings.
//!
//! The arrow rows are documentation only: arrow keys are delivered to the
//! page keydown listener, which clicks the matching `move-*` button.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::action::Action;
use crate::grid::Mark;

use super::super::{Keybinding, Matcher, Section};

fn key(code: KeyCode) -> Option<Matcher> {
    Some(Matcher::Key {
        code,
        modifiers: KeyModifiers::NONE,
    })
}

pub(super) fn bindings() -> Vec<Keybinding> {
    vec![
        Keybinding {
            section: Section::Grid,
            keys: "Enter",
            description: "Press cell (group / ungroup)",
            matcher: key(KeyCode::Enter),
            action: Some(Action::PressCell),
            handles_input: true,
        },
        Keybinding {
            section: Section::Grid,
            keys: "Space",
            description: "Press cell (group / ungroup)",
            matcher: key(KeyCode::Char(' ')),
            action: Some(Action::PressCell),
            handles_input: true,
        },
        Keybinding {
            section: Section::Grid,
            keys: "k",
            description: "Toggle keep mark",
            matcher: key(KeyCode::Char('k')),
            action: Some(Action::ToggleMark(Mark::Keep)),
            handles_input: true,
        },
        Keybinding {
            section: Section::Grid,
            keys: "d",
            description: "Toggle delete mark",
            matcher: key(KeyCode::Char('d')),
            action: Some(Action::ToggleMark(Mark::Delete)),
            handles_input: true,
        },
        Keybinding {
            section: Section::Grid,
            keys: "+",
            description: "Grow grid",
            matcher: key(KeyCode::Char('+')),
            action: Some(Action::GrowGrid),
            handles_input: true,
        },
        Keybinding {
            section: Section::Grid,
            keys: "-",
            description: "Shrink grid",
            matcher: key(KeyCode::Char('-')),
            action: Some(Action::ShrinkGrid),
            handles_input: true,
        },
        Keybinding {
            section: Section::Grid,
            keys: "c",
            description: "Complete group",
            matcher: key(KeyCode::Char('c')),
            action: Some(Action::CompleteGroup),
            handles_input: true,
        },
        Keybinding {
            section: Section::Navigation,
            keys: "Left",
            description: "Click move-left",
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Navigation,
            keys: "Right",
            description: "Click move-right",
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Navigation,
            keys: "Up",
            description: "Click move-up",
            matcher: None,
            action: None,
            handles_input: false,
        },
        Keybinding {
            section: Section::Navigation,
            keys: "Down",
            description: "Click move-down",
            matcher: None,
            action: None,
            handles_input: false,
        },
    ]
}
