//! Board coordinates.
//!
//! A `Position` names one cell of the grid: `x` selects the column,
//! `y` selects the row, both zero-based from the top-left corner.
//! Cells are stored row-major, so `(x, y)` maps to index `y * N + x`
//! on an N-by-N board.
//!
//! Positions are plain data - any `(x, y)` pair can be constructed, and
//! bounds are enforced where positions meet a concrete board.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the grid.
///
/// ```
/// use gridmatch::core::Position;
///
/// let corner = Position::new(0, 0);
/// let center = Position::new(1, 1);
///
/// assert_eq!(corner.index(3), 0);
/// assert_eq!(center.index(3), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Column, zero-based.
    pub x: u8,
    /// Row, zero-based.
    pub y: u8,
}

impl Position {
    /// Create a position from column and row.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Row-major cell index on a board of the given dimension.
    ///
    /// The caller is responsible for the position being in bounds;
    /// out-of-range positions produce an index past the cell array.
    #[must_use]
    pub const fn index(self, dimension: u8) -> usize {
        self.y as usize * dimension as usize + self.x as usize
    }

    /// Whether this position sits on the main diagonal (top-left to
    /// bottom-right).
    #[must_use]
    pub const fn on_main_diagonal(self) -> bool {
        self.x == self.y
    }

    /// Whether this position sits on the anti-diagonal (top-right to
    /// bottom-left) of a board of the given dimension.
    #[must_use]
    pub const fn on_anti_diagonal(self, dimension: u8) -> bool {
        self.x as u16 + self.y as u16 + 1 == dimension as u16
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
