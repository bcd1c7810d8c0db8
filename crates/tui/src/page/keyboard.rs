//! Arrow-key listener for the page's directional buttons.
//!
//! Responsibilities:
//! - Describe key presses as `KeyboardEvent` (a DOM-style key name).
//! - Map the four arrow key names to the `move-*` element ids.
//! - Activate the matching element on each key press.
//!
//! Does NOT handle:
//! - What the buttons do once activated (bound by whoever built the page).
//! - Any other key; unrecognized names are ignored.
//!
//! Invariants:
//! - Stateless: each key press is handled on its own, with no debouncing or coalescing.
//! - At most one element is activated per key press.
//! - A missing target element is skipped silently and never disables the listener.

use std::fmt;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyEvent};

use super::{MOVE_DOWN, MOVE_LEFT, MOVE_RIGHT, MOVE_UP, Page};

/// Name the move listener is registered under.
pub const MOVE_LISTENER: &str = "arrow-keys";

/// A key-press notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardEvent {
    /// Key name in DOM `KeyboardEvent.key` form, e.g. "ArrowLeft", "a", "Enter".
    pub key: String,
}

impl KeyboardEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl From<KeyEvent> for KeyboardEvent {
    fn from(key: KeyEvent) -> Self {
        let name = match key.code {
            KeyCode::Left => "ArrowLeft".to_string(),
            KeyCode::Right => "ArrowRight".to_string(),
            KeyCode::Up => "ArrowUp".to_string(),
            KeyCode::Down => "ArrowDown".to_string(),
            KeyCode::Char(' ') => " ".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Escape".to_string(),
            KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            KeyCode::Insert => "Insert".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PageUp".to_string(),
            KeyCode::PageDown => "PageDown".to_string(),
            KeyCode::F(n) => format!("F{n}"),
            _ => "Unidentified".to_string(),
        };
        Self::new(name)
    }
}

/// The recognized key names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArrowKey {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

impl ArrowKey {
    pub const ALL: [ArrowKey; 4] = [
        ArrowKey::ArrowLeft,
        ArrowKey::ArrowRight,
        ArrowKey::ArrowUp,
        ArrowKey::ArrowDown,
    ];

    /// Exact, case-sensitive match on the key name.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowDown" => Some(Self::ArrowDown),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ArrowLeft => "ArrowLeft",
            Self::ArrowRight => "ArrowRight",
            Self::ArrowUp => "ArrowUp",
            Self::ArrowDown => "ArrowDown",
        }
    }

    /// Id of the element this key activates.
    pub fn element_id(self) -> &'static str {
        match self {
            Self::ArrowLeft => MOVE_LEFT,
            Self::ArrowRight => MOVE_RIGHT,
            Self::ArrowUp => MOVE_UP,
            Self::ArrowDown => MOVE_DOWN,
        }
    }
}

impl fmt::Display for ArrowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A key name outside the recognized set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized key name: {0:?}")]
pub struct UnrecognizedKey(pub String);

impl FromStr for ArrowKey {
    type Err = UnrecognizedKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnrecognizedKey(s.to_string()))
    }
}

/// Element id targeted by a key name, if the key is recognized.
pub fn resolve(key: &str) -> Option<&'static str> {
    ArrowKey::from_key(key).map(ArrowKey::element_id)
}

/// Keydown handler: activate the `move-*` element matching an arrow key.
pub fn on_keydown(page: &mut Page, event: &KeyboardEvent) {
    let Some(id) = resolve(&event.key) else {
        return;
    };
    if !page.click(id) {
        tracing::debug!(key = %event.key, element = id, "No element for arrow key, skipping");
    }
}

/// Register the arrow-key listener on the page.
///
/// Call once at startup. Returns false (and leaves the page unchanged) if the
/// listener is already installed.
pub fn install(page: &mut Page) -> bool {
    let added = page.add_keydown_listener(MOVE_LISTENER, on_keydown);
    if added {
        tracing::debug!("Arrow-key listener installed");
    } else {
        tracing::warn!("Arrow-key listener already installed");
    }
    added
}
