//! Help popup text from the keybinding catalog.
//!
//! Invariants:
//! - Sections render in `Section::ORDER`; rows keep catalog order.
//! - Duplicate (keys, description) rows are shown once.

use crate::input::keymap::overrides::keybind_for_action;
use crate::input::keymap::{KeybindOverrideTable, Section, keybindings};

/// Plain-text help, one section per block, keys column aligned.
pub fn help_text(overrides: &KeybindOverrideTable) -> String {
    let mut out = String::new();
    for section in Section::ORDER {
        let entries = entries(section, overrides);
        if entries.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        out.push_str(section.title());
        out.push('\n');

        let width = entries
            .iter()
            .map(|(keys, _)| keys.chars().count())
            .max()
            .unwrap_or(0);
        for (keys, description) in entries {
            out.push_str(&format!("  {keys:<width$}  {description}\n"));
        }
    }
    out
}

fn entries(section: Section, overrides: &KeybindOverrideTable) -> Vec<(String, &'static str)> {
    let mut seen: Vec<(String, &'static str)> = Vec::new();
    for binding in keybindings().into_iter().filter(|b| b.section == section) {
        let mut keys = binding.keys.to_string();
        if let Some(extra) = binding
            .action
            .as_ref()
            .and_then(keybind_for_action)
            .and_then(|action| overrides.key_for(action))
        {
            keys = format!("{keys} / {extra}");
        }
        let row = (keys, binding.description);
        if !seen.contains(&row) {
            seen.push(row);
        }
    }
    seen
}
