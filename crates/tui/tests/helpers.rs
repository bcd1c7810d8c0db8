//! Test helpers for TUI testing.
//!
//! Provides key event constructors, app fixtures, and a render harness
//! backed by ratatui's `TestBackend`.

#![allow(dead_code)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use gridnav_config::GridSize;
use gridnav_tui::{App, ImageEntry, ImageList, KeybindOverrideTable};
use ratatui::{Terminal, backend::TestBackend};
use std::path::PathBuf;

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

pub fn left_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Left, KeyModifiers::NONE)
}

pub fn right_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Right, KeyModifiers::NONE)
}

pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create a mouse event at a terminal coordinate.
pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn left_click(column: u16, row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

/// Image list with `n` named entries ("img00.png", "img01.png", ...).
pub fn numbered_images(n: usize) -> ImageList {
    ImageList::from_entries(
        (0..n)
            .map(|i| {
                let name = format!("img{i:02}.png");
                ImageEntry {
                    path: Some(PathBuf::from("shots").join(&name)),
                    name,
                }
            })
            .collect(),
    )
}

/// App with an `n x n` grid, numbered images, and default keybindings.
pub fn app_with_grid(n: usize) -> App {
    App::new(
        GridSize::new(n),
        numbered_images(n * n),
        KeybindOverrideTable::default(),
    )
}

/// Send a key press through the app the way the event loop does.
pub fn press(app: &mut App, key: KeyEvent) {
    if let Some(action) = app.handle_input(key) {
        app.update(action);
    }
}

/// Test harness for TUI rendering with a mock terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    pub fn new(width: u16, height: u16, app: App) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create terminal");
        Self { app, terminal }
    }

    /// Render the current app state and return the buffer contents.
    pub fn render(&mut self) -> String {
        let app = &self.app;
        self.terminal
            .draw(|f| gridnav_tui::ui::render(f, app))
            .expect("Failed to render");
        buffer_to_string(self.terminal.backend().buffer())
    }
}

/// Convert a ratatui Buffer to a string, one line per row.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut output = String::new();

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            output.push(cell.symbol().chars().next().unwrap_or(' '));
        }
        if y < area.bottom() - 1 {
            output.push('\n');
        }
    }

    output
}
