//! Application state and action handling.
//!
//! Responsibilities:
//! - Own the page (with its arrow-key listener), the focus grid, and the image list.
//! - Route key presses: every press goes to the page keydown listeners, then
//!   through the app keymap.
//! - Apply actions, including those queued by activated page buttons.
//! - Turn left clicks on grid cells into cell presses.
//! - Record completed groups and hide their images from later grids.
//!
//! Does NOT handle:
//! - Terminal I/O or the event loop (see `main.rs`).
//! - Drawing (see `ui`).
//!
//! Invariants:
//! - Button activations triggered by a key press are applied, in order,
//!   before that key's keymap action.
//! - A completed group's images are masked only after its records were
//!   appended to the results log.

use std::path::PathBuf;

use chrono::Utc;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use gridnav_config::{GridSize, GroupRecord, PersistedState, ResultsLog, SelectorConfig};
use ratatui::layout::Rect;

use crate::action::Action;
use crate::grid::{FocusGrid, Mark};
use crate::images::{ImageEntry, ImageList};
use crate::input::keymap::{KeybindOverrideTable, resolve_action};
use crate::page::Page;
use crate::page::keyboard::{self, KeyboardEvent};
use crate::ui::{FrameLayout, grid_view};

pub struct App {
    pub page: Page,
    pub grid: FocusGrid,
    pub images: ImageList,
    /// Directory `images` was loaded from, if it came from disk.
    pub image_dir: Option<PathBuf>,
    pub overrides: KeybindOverrideTable,
    /// Where completed groups are recorded. `None` disables completion.
    pub results: Option<ResultsLog>,
    /// Terminal size from the last resize, for mouse hit-testing.
    pub last_area: Rect,
    pub show_help: bool,
    pub should_quit: bool,
}

impl App {
    /// Build the app with the move buttons present and the arrow-key listener installed.
    pub fn new(grid_size: GridSize, images: ImageList, overrides: KeybindOverrideTable) -> Self {
        let mut page = Page::with_move_buttons();
        keyboard::install(&mut page);
        Self {
            page,
            grid: FocusGrid::new(grid_size),
            images,
            image_dir: None,
            overrides,
            results: None,
            last_area: Rect::default(),
            show_help: false,
            should_quit: false,
        }
    }

    pub fn from_config(config: &SelectorConfig) -> Self {
        let mut app = Self::new(
            config.grid_size,
            ImageList::load(&config.image_dir),
            KeybindOverrideTable::init(&config.keybind_overrides),
        );
        app.image_dir = Some(config.image_dir.clone());
        app
    }

    /// Record completed groups in `log`, hiding images it already lists
    /// for this app's image directory.
    pub fn with_results_log(mut self, log: ResultsLog) -> Self {
        if let Some(dir) = &self.image_dir {
            match log.read_all() {
                Ok(records) => {
                    self.images.mask_names(
                        records
                            .iter()
                            .filter(|r| &r.directory_name == dir)
                            .map(|r| r.filename.as_str()),
                    );
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Cannot read results log, showing all images");
                }
            }
        }
        self.results = Some(log);
        self
    }

    /// Handle a key press. Returns the keymap action for the key, if any.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        self.page.dispatch_keydown(&KeyboardEvent::from(key));
        for action in self.page.drain_activations() {
            self.update(action);
        }

        if self.show_help && resolve_action(&self.overrides, key) != Some(Action::Quit) {
            self.show_help = false;
            return None;
        }
        resolve_action(&self.overrides, key)
    }

    /// Handle mouse input. Returns the action for the event, if any.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        if self.show_help {
            self.show_help = false;
            return None;
        }
        let layout = FrameLayout::new(self.last_area);
        grid_view::cell_at(layout.grid, &self.grid, mouse.column, mouse.row)
            .map(Action::PressCellAt)
    }

    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Input(key) => {
                if let Some(next) = self.handle_input(key) {
                    self.update(next);
                }
            }
            Action::Mouse(mouse) => {
                if let Some(next) = self.handle_mouse(mouse) {
                    self.update(next);
                }
            }
            Action::Resize(width, height) => self.last_area = Rect::new(0, 0, width, height),
            Action::Tick => {}
            Action::Move(direction) => {
                if !self.grid.move_focus(direction) {
                    tracing::debug!(?direction, "Move ignored, no focused cell");
                }
            }
            Action::PressCell => {
                self.grid.press_cursor();
            }
            Action::PressCellAt(pos) => {
                self.grid.press(pos);
            }
            Action::ToggleMark(mark) => {
                self.grid.toggle_mark(mark);
            }
            Action::GrowGrid => self.grid.resize(self.grid.size().grow()),
            Action::ShrinkGrid => self.grid.resize(self.grid.size().shrink()),
            Action::CompleteGroup => self.complete_group(),
            Action::ToggleHelp => self.show_help = !self.show_help,
        }
    }

    /// Append the grouped cells to the results log, hide their images, and
    /// reset the grid.
    ///
    /// Placeholder cells are ignored. A grouped cell counts as kept only if
    /// it carries the keep mark. On a write failure nothing changes.
    fn complete_group(&mut self) {
        let Some(log) = &self.results else {
            tracing::debug!("Complete group ignored, no results log");
            return;
        };
        let cols = self.grid.cols();
        let mut indices = Vec::new();
        let mut members = Vec::new();
        for pos in self.grid.grouped() {
            let image = self.images.for_cell(pos, cols);
            if image.is_placeholder() {
                continue;
            }
            let keep = self
                .grid
                .cell(pos)
                .is_some_and(|cell| cell.mark == Some(Mark::Keep));
            indices.push(pos.row * cols + pos.col);
            members.push((image.name.clone(), keep));
        }
        if members.is_empty() {
            tracing::debug!("Complete group ignored, no grouped images");
            return;
        }

        let directory = self.image_dir.clone().unwrap_or_default();
        let records = GroupRecord::group(&directory, &members, Utc::now());
        if let Err(e) = log.append(&records) {
            tracing::error!(error = %e, "Failed to record completed group");
            return;
        }
        self.images.mask_visible(&indices);
        self.grid.resize(self.grid.size());
        tracing::info!(
            images = members.len(),
            remaining = self.images.remaining(),
            "Group completed"
        );
    }

    /// Image for the zoom panel: the focused cell, or the last focused one.
    pub fn zoomed_image(&self) -> &ImageEntry {
        let pos = self.grid.focus().unwrap_or(self.grid.last_focus());
        self.images.for_cell(pos, self.grid.cols())
    }

    /// Fold the session's settings back into persisted state.
    pub fn persist_into(&self, state: &mut PersistedState) {
        state.grid_size = self.grid.size();
        if let Some(dir) = &self.image_dir {
            state.image_dir = Some(dir.clone());
        }
    }
}
