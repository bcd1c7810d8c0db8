//! Keybinding parsing and validation.
//!
//! Responsibilities:
//! - Parse human-readable key strings ("Ctrl+x", "F1", "Space") into structured form.
//! - Validate override sets for syntax errors, reserved keys, and conflicts.
//!
//! Does NOT handle:
//! - Conversion to crossterm events (that's in the TUI crate).
//! - Arrow keys: those belong to the page keydown listener and cannot be rebound.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use thiserror::Error;

use crate::types::keybind::KeybindAction;

/// Errors that can occur when parsing or validating keybindings.
#[derive(Debug, Error, PartialEq)]
pub enum KeybindError {
    #[error("Invalid key syntax: '{key}'. Expected format like 'q', 'Ctrl+x', 'Shift+Tab', 'F1'")]
    InvalidSyntax { key: String },

    #[error("Unknown key name: '{name}'")]
    UnknownKey { name: String },

    #[error("Conflicting keybindings: '{key}' is assigned to both {action1} and {action2}")]
    Conflict {
        key: String,
        action1: String,
        action2: String,
    },

    #[error("Reserved keybinding: '{key}' cannot be overridden")]
    ReservedKey { key: String },
}

/// A parsed key combination.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedKey {
    pub code: KeyCodeName,
    pub modifiers: ModifierFlags,
}

/// Key code names that can be parsed from config strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyCodeName {
    Char(char),
    /// Function key F1-F20
    F(u8),
    Esc,
    Enter,
    Space,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
}

impl KeyCodeName {
    /// Arrow keys are owned by the page keydown listener.
    pub fn is_arrow(&self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }
}

impl fmt::Display for KeyCodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{}", c),
            Self::F(n) => write!(f, "F{}", n),
            Self::Esc => write!(f, "Esc"),
            Self::Enter => write!(f, "Enter"),
            Self::Space => write!(f, "Space"),
            Self::Tab => write!(f, "Tab"),
            Self::BackTab => write!(f, "BackTab"),
            Self::Backspace => write!(f, "Backspace"),
            Self::Delete => write!(f, "Delete"),
            Self::Insert => write!(f, "Insert"),
            Self::Home => write!(f, "Home"),
            Self::End => write!(f, "End"),
            Self::PageUp => write!(f, "PageUp"),
            Self::PageDown => write!(f, "PageDown"),
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// Modifier flags for key combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct ModifierFlags {
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

/// Parse a key string like "Ctrl+x", "F1", "Shift+Tab" into structured form.
///
/// # Examples
///
/// ```
/// use gridnav_config::keybind::{parse_key, KeyCodeName};
///
/// let key = parse_key("Ctrl+x").unwrap();
/// assert!(matches!(key.code, KeyCodeName::Char('x')));
/// assert!(key.modifiers.ctrl);
///
/// let key = parse_key("Space").unwrap();
/// assert!(matches!(key.code, KeyCodeName::Space));
/// ```
pub fn parse_key(key_str: &str) -> Result<ParsedKey, KeybindError> {
    let key_str = key_str.trim();

    if key_str.is_empty() {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    let mut modifiers = ModifierFlags::default();
    let mut key_name = "";

    for part in key_str.split('+').map(str::trim) {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" => modifiers.ctrl = true,
            "shift" => modifiers.shift = true,
            "alt" => modifiers.alt = true,
            _ if key_name.is_empty() => key_name = part,
            _ => {
                return Err(KeybindError::InvalidSyntax {
                    key: key_str.to_string(),
                });
            }
        }
    }

    if key_name.is_empty() {
        return Err(KeybindError::InvalidSyntax {
            key: key_str.to_string(),
        });
    }

    let code = match parse_key_code(key_name)? {
        KeyCodeName::Tab if modifiers.shift => KeyCodeName::BackTab,
        code => code,
    };

    Ok(ParsedKey { code, modifiers })
}

fn parse_key_code(name: &str) -> Result<KeyCodeName, KeybindError> {
    let name_lower = name.to_ascii_lowercase();

    match name_lower.as_str() {
        "esc" | "escape" => return Ok(KeyCodeName::Esc),
        "enter" | "return" => return Ok(KeyCodeName::Enter),
        "space" => return Ok(KeyCodeName::Space),
        "tab" => return Ok(KeyCodeName::Tab),
        "backtab" => return Ok(KeyCodeName::BackTab),
        "backspace" => return Ok(KeyCodeName::Backspace),
        "delete" | "del" => return Ok(KeyCodeName::Delete),
        "insert" | "ins" => return Ok(KeyCodeName::Insert),
        "home" => return Ok(KeyCodeName::Home),
        "end" => return Ok(KeyCodeName::End),
        "pageup" | "page_up" | "pgup" => return Ok(KeyCodeName::PageUp),
        "pagedown" | "page_down" | "pgdn" => return Ok(KeyCodeName::PageDown),
        "up" | "arrowup" => return Ok(KeyCodeName::Up),
        "down" | "arrowdown" => return Ok(KeyCodeName::Down),
        "left" | "arrowleft" => return Ok(KeyCodeName::Left),
        "right" | "arrowright" => return Ok(KeyCodeName::Right),
        _ => {}
    }

    if let Some(num_str) = name_lower.strip_prefix('f')
        && let Ok(num) = num_str.parse::<u8>()
        && (1..=20).contains(&num)
    {
        return Ok(KeyCodeName::F(num));
    }

    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCodeName::Char(c));
    }

    Err(KeybindError::UnknownKey {
        name: name.to_string(),
    })
}

/// Keys that can never be bound to an app action.
pub const RESERVED_KEYS: &[&str] = &["ctrl+c", "ctrl+z"];

/// Validate a set of keybinding overrides.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use gridnav_config::keybind::validate_overrides;
/// use gridnav_config::KeybindAction;
///
/// let mut overrides = BTreeMap::new();
/// overrides.insert(KeybindAction::Quit, "F10".to_string());
/// overrides.insert(KeybindAction::Keep, "y".to_string());
///
/// assert!(validate_overrides(&overrides).is_ok());
/// ```
pub fn validate_overrides(overrides: &BTreeMap<KeybindAction, String>) -> Result<(), KeybindError> {
    let mut key_to_action: HashMap<String, KeybindAction> = HashMap::new();

    for (action, key_str) in overrides {
        let normalized = normalize_key(key_str);
        if RESERVED_KEYS.contains(&normalized.as_str()) {
            return Err(KeybindError::ReservedKey {
                key: key_str.clone(),
            });
        }

        let parsed = parse_key(key_str).map_err(|e| KeybindError::InvalidSyntax {
            key: format!("{} for action '{}': {}", key_str, action, e),
        })?;
        if parsed.code.is_arrow() {
            return Err(KeybindError::ReservedKey {
                key: key_str.clone(),
            });
        }

        if let Some(existing_action) = key_to_action.get(&normalized) {
            return Err(KeybindError::Conflict {
                key: key_str.clone(),
                action1: existing_action.to_string(),
                action2: action.to_string(),
            });
        }
        key_to_action.insert(normalized, *action);
    }

    Ok(())
}

/// Lowercase and strip spaces around '+'.
fn normalize_key(key_str: &str) -> String {
    key_str
        .split('+')
        .map(|s| s.trim().to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_char() {
        let key = parse_key("q").unwrap();
        assert_eq!(key.code, KeyCodeName::Char('q'));
        assert_eq!(key.modifiers, ModifierFlags::default());
    }

    #[test]
    fn test_parse_uppercase_char_is_preserved() {
        assert_eq!(parse_key("K").unwrap().code, KeyCodeName::Char('K'));
    }

    #[test]
    fn test_parse_ctrl_alt_combo() {
        let key = parse_key("Ctrl + Alt + x").unwrap();
        assert_eq!(key.code, KeyCodeName::Char('x'));
        assert!(key.modifiers.ctrl);
        assert!(key.modifiers.alt);
        assert!(!key.modifiers.shift);
    }

    #[test]
    fn test_parse_function_keys() {
        assert_eq!(parse_key("F1").unwrap().code, KeyCodeName::F(1));
        assert_eq!(parse_key("f20").unwrap().code, KeyCodeName::F(20));
        assert!(parse_key("F0").is_err());
        assert!(parse_key("F21").is_err());
    }

    #[test]
    fn test_parse_dom_style_arrow_names() {
        assert_eq!(parse_key("ArrowLeft").unwrap().code, KeyCodeName::Left);
        assert_eq!(parse_key("up").unwrap().code, KeyCodeName::Up);
    }

    #[test]
    fn test_shift_tab_becomes_backtab() {
        assert_eq!(parse_key("Shift+Tab").unwrap().code, KeyCodeName::BackTab);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            parse_key(""),
            Err(KeybindError::InvalidSyntax { .. })
        ));
        assert!(matches!(
            parse_key("Ctrl+"),
            Err(KeybindError::InvalidSyntax { .. })
        ));
        assert!(matches!(
            parse_key("a+b"),
            Err(KeybindError::InvalidSyntax { .. })
        ));
        assert!(matches!(
            parse_key("Hyper"),
            Err(KeybindError::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_reserved() {
        let mut map = BTreeMap::new();
        map.insert(KeybindAction::Quit, "Ctrl+C".to_string());
        assert!(matches!(
            validate_overrides(&map),
            Err(KeybindError::ReservedKey { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_arrow_keys() {
        let mut map = BTreeMap::new();
        map.insert(KeybindAction::PressCell, "Left".to_string());
        assert_eq!(
            validate_overrides(&map),
            Err(KeybindError::ReservedKey {
                key: "Left".to_string()
            })
        );
    }

    #[test]
    fn test_validate_detects_conflict_case_insensitively() {
        let mut map = BTreeMap::new();
        map.insert(KeybindAction::Keep, "Ctrl+K".to_string());
        map.insert(KeybindAction::Delete, "ctrl + k".to_string());
        assert!(matches!(
            validate_overrides(&map),
            Err(KeybindError::Conflict { .. })
        ));
    }

    #[test]
    fn test_validate_wraps_parse_errors() {
        let mut map = BTreeMap::new();
        map.insert(KeybindAction::Help, "NotAKey".to_string());
        let err = validate_overrides(&map).unwrap_err();
        assert!(err.to_string().contains("for action 'help'"));
    }
}
