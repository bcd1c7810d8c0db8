//! Action protocol for the event loop.
//!
//! Actions flow from the input task and from activated page buttons into
//! `App::update`, where they trigger state mutations.

use crossterm::event::{KeyEvent, MouseEvent};

use crate::grid::{Direction, Mark, Position};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // System
    Quit,
    /// Terminal resized to (width, height)
    Resize(u16, u16),
    /// Periodic redraw
    Tick,

    // Input
    /// Raw keyboard input event
    Input(KeyEvent),
    /// Raw mouse input event
    Mouse(MouseEvent),

    // Grid
    /// Shift focus one cell (bound to the `move-*` buttons)
    Move(Direction),
    /// Press the cursor cell
    PressCell,
    /// Press a specific cell (left click)
    PressCellAt(Position),
    /// Toggle a keep/delete mark on the focused cell
    ToggleMark(Mark),
    GrowGrid,
    ShrinkGrid,
    /// Record the grouped cells as a completed group and clear the grid
    CompleteGroup,

    // Popups
    ToggleHelp,
}
