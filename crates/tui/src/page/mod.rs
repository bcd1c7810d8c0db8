//! In-memory page: uniquely identified buttons plus document-level keydown listeners.
//!
//! Responsibilities:
//! - Own the page's interactive elements, keyed by element id.
//! - Run registered keydown listeners in registration order.
//! - Queue the action bound to each activated button for the app to apply.
//!
//! Does NOT handle:
//! - Deciding what a key press means (see `keyboard`).
//! - Applying queued actions (see `App::update`).
//!
//! Invariants:
//! - Element ids are unique; inserting an existing id replaces the element.
//! - Listener names are unique; a listener is registered at most once.
//! - Activations are drained in the order they were triggered.

pub mod keyboard;

use std::collections::{HashMap, VecDeque};

use crate::action::Action;
use crate::grid::Direction;
use keyboard::KeyboardEvent;

pub const MOVE_LEFT: &str = "move-left";
pub const MOVE_RIGHT: &str = "move-right";
pub const MOVE_UP: &str = "move-up";
pub const MOVE_DOWN: &str = "move-down";

/// A clickable element.
#[derive(Debug, Clone)]
pub struct Button {
    pub id: String,
    pub label: String,
    /// Action queued each time the button is activated.
    pub on_click: Action,
    /// Number of activations so far.
    pub clicks: u64,
}

impl Button {
    pub fn new(id: impl Into<String>, label: impl Into<String>, on_click: Action) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            on_click,
            clicks: 0,
        }
    }
}

/// Signature of a document-level keydown handler.
pub type KeydownHandler = fn(&mut Page, &KeyboardEvent);

#[derive(Clone, Copy)]
struct KeydownListener {
    name: &'static str,
    handler: KeydownHandler,
}

#[derive(Default)]
pub struct Page {
    elements: HashMap<String, Button>,
    keydown_listeners: Vec<KeydownListener>,
    activations: VecDeque<Action>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// A page carrying the four hidden directional buttons.
    pub fn with_move_buttons() -> Self {
        let mut page = Self::new();
        for (id, label, direction) in [
            (MOVE_LEFT, "Move left", Direction::Left),
            (MOVE_RIGHT, "Move right", Direction::Right),
            (MOVE_UP, "Move up", Direction::Up),
            (MOVE_DOWN, "Move down", Direction::Down),
        ] {
            page.insert(Button::new(id, label, Action::Move(direction)));
        }
        page
    }

    /// Insert an element, returning the one it replaced.
    pub fn insert(&mut self, button: Button) -> Option<Button> {
        self.elements.insert(button.id.clone(), button)
    }

    pub fn remove(&mut self, id: &str) -> Option<Button> {
        self.elements.remove(id)
    }

    pub fn get_element_by_id(&mut self, id: &str) -> Option<&mut Button> {
        self.elements.get_mut(id)
    }

    pub fn element(&self, id: &str) -> Option<&Button> {
        self.elements.get(id)
    }

    /// Activate an element as a pointer click would.
    ///
    /// Returns false if no element has this id.
    pub fn click(&mut self, id: &str) -> bool {
        let Some(button) = self.get_element_by_id(id) else {
            return false;
        };
        button.clicks += 1;
        let clicks = button.clicks;
        let action = button.on_click.clone();
        tracing::trace!(element = id, clicks, "element activated");
        self.activations.push_back(action);
        true
    }

    /// Register a keydown listener under a unique name.
    ///
    /// Returns false if a listener with this name is already registered.
    pub fn add_keydown_listener(&mut self, name: &'static str, handler: KeydownHandler) -> bool {
        if self.has_keydown_listener(name) {
            return false;
        }
        self.keydown_listeners.push(KeydownListener { name, handler });
        true
    }

    pub fn has_keydown_listener(&self, name: &str) -> bool {
        self.keydown_listeners.iter().any(|l| l.name == name)
    }

    pub fn keydown_listener_count(&self) -> usize {
        self.keydown_listeners.len()
    }

    /// Deliver a key press to every keydown listener.
    pub fn dispatch_keydown(&mut self, event: &KeyboardEvent) {
        let listeners = self.keydown_listeners.clone();
        for listener in listeners {
            (listener.handler)(self, event);
        }
    }

    /// Take all queued activations, oldest first.
    pub fn drain_activations(&mut self) -> Vec<Action> {
        self.activations.drain(..).collect()
    }
}
