//! Visible grid size.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_GRID_SIZE, MIN_GRID_SIZE, ROWS_MAX};

/// Side length of the visible square grid, always within
/// `MIN_GRID_SIZE..=ROWS_MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "usize", into = "usize")]
pub struct GridSize(usize);

impl GridSize {
    /// Clamp `n` into the supported range.
    pub fn new(n: usize) -> Self {
        Self(n.clamp(MIN_GRID_SIZE, ROWS_MAX))
    }

    pub fn get(self) -> usize {
        self.0
    }

    /// One size larger, saturating at the maximum.
    pub fn grow(self) -> Self {
        Self::new(self.0 + 1)
    }

    /// One size smaller, saturating at the minimum.
    pub fn shrink(self) -> Self {
        Self::new(self.0.saturating_sub(1))
    }

    /// Every selectable size, smallest first.
    pub fn all() -> impl Iterator<Item = GridSize> {
        (MIN_GRID_SIZE..=ROWS_MAX).map(GridSize)
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self(DEFAULT_GRID_SIZE)
    }
}

impl From<usize> for GridSize {
    fn from(n: usize) -> Self {
        Self::new(n)
    }
}

impl From<GridSize> for usize {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

impl FromStr for GridSize {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<usize>().map(Self::new)
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.0, self.0)
    }
}
