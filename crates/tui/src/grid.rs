//! Image grid focus and grouping state.
//!
//! Responsibilities:
//! - Track which cells are grouped, their keep/delete marks, and the single focused cell.
//! - Move focus with wrap-around inside the visible area.
//! - Apply the cell press toggle rules.
//!
//! Does NOT handle:
//! - Rendering (see `ui`) or image lookup (see `images`).
//!
//! Invariants:
//! - At most one cell is focused, and it is always visible.
//! - Hidden cells (outside `size x size`) are never mutated by presses or moves.
//! - Keep and Delete are mutually exclusive and only set on grouped cells.

use gridnav_config::GridSize;
use gridnav_config::constants::{COLS_MAX, ROWS_MAX};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Keep,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub grouped: bool,
    pub mark: Option<Mark>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusGrid {
    size: GridSize,
    cells: [[Cell; COLS_MAX]; ROWS_MAX],
    focus: Option<Position>,
    /// Most recent focused cell; drives the zoom panel after focus is cleared.
    last_focus: Position,
}

impl FocusGrid {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: [[Cell::default(); COLS_MAX]; ROWS_MAX],
            focus: Some(Position::default()),
            last_focus: Position::default(),
        }
    }

    /// Change the visible size and reset every cell.
    pub fn resize(&mut self, size: GridSize) {
        tracing::debug!(size = %size, "Resizing grid");
        *self = Self::new(size);
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn rows(&self) -> usize {
        self.size.get()
    }

    pub fn cols(&self) -> usize {
        self.size.get()
    }

    pub fn is_visible(&self, pos: Position) -> bool {
        pos.row < self.rows() && pos.col < self.cols()
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.cells.get(pos.row).and_then(|row| row.get(pos.col))
    }

    pub fn focus(&self) -> Option<Position> {
        self.focus
    }

    pub fn last_focus(&self) -> Position {
        self.last_focus
    }

    pub fn is_focused(&self, pos: Position) -> bool {
        self.focus == Some(pos)
    }

    /// Visible positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.cols()).map(move |col| Position::new(row, col)))
    }

    /// Visible grouped cells in row-major order.
    pub fn grouped(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions().filter(|&p| self.cells[p.row][p.col].grouped)
    }

    fn set_focus(&mut self, pos: Option<Position>) {
        self.focus = pos;
        if let Some(pos) = pos {
            self.last_focus = pos;
        }
    }

    /// Shift focus one cell, wrapping at the visible edges.
    ///
    /// Returns false if no cell is focused.
    pub fn move_focus(&mut self, direction: Direction) -> bool {
        let Some(Position { row, col }) = self.focus else {
            return false;
        };
        let (rows, cols) = (self.rows(), self.cols());
        let next = match direction {
            Direction::Left => Position::new(row, (col + cols - 1) % cols),
            Direction::Right => Position::new(row, (col + 1) % cols),
            Direction::Up => Position::new((row + rows - 1) % rows, col),
            Direction::Down => Position::new((row + 1) % rows, col),
        };
        self.set_focus(Some(next));
        true
    }

    /// Press a cell.
    ///
    /// A press focuses and groups the cell, except pressing the focused
    /// grouped cell, which ungroups it, clears its mark, and leaves no focus.
    /// Returns false if the cell is hidden.
    pub fn press(&mut self, pos: Position) -> bool {
        if !self.is_visible(pos) {
            return false;
        }
        let was_focused = self.is_focused(pos);
        let cell = &mut self.cells[pos.row][pos.col];

        if cell.grouped && was_focused {
            *cell = Cell::default();
            self.focus = None;
            self.last_focus = pos;
        } else {
            cell.grouped = true;
            self.set_focus(Some(pos));
        }
        true
    }

    /// Press the cursor cell: the focused cell, or the last focused one.
    pub fn press_cursor(&mut self) -> bool {
        let pos = self.focus.unwrap_or(self.last_focus);
        self.press(pos)
    }

    /// Toggle a mark on the focused cell if it is grouped.
    ///
    /// Setting one mark replaces the other. Returns false if nothing changed.
    pub fn toggle_mark(&mut self, mark: Mark) -> bool {
        let Some(pos) = self.focus else {
            return false;
        };
        let cell = &mut self.cells[pos.row][pos.col];
        if !cell.grouped {
            return false;
        }
        cell.mark = if cell.mark == Some(mark) {
            None
        } else {
            Some(mark)
        };
        true
    }
}

impl Default for FocusGrid {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}
