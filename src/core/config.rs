//! Board configuration.
//!
//! The board dimension is a deployment-wide setting: one `BoardConfig` is
//! created when the embedding application starts, handed to the engine,
//! and shared by every match it evaluates. It is never a per-match value.
//!
//! The canonical deployment plays on a 3x3 board.

use serde::{Deserialize, Serialize};

use super::position::Position;

/// Dimension used when no explicit configuration is given.
pub const CANONICAL_DIMENSION: u8 = 3;

/// Geometry of the boards a deployment plays on.
///
/// ```
/// use gridmatch::core::{BoardConfig, Position};
///
/// let config = BoardConfig::default();
///
/// assert_eq!(config.dimension(), 3);
/// assert_eq!(config.cell_count(), 9);
/// assert!(config.contains(Position::new(2, 2)));
/// assert!(!config.contains(Position::new(3, 0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    dimension: u8,
}

impl BoardConfig {
    /// Create a configuration for boards of the given dimension.
    ///
    /// Panics if `dimension` is zero; a board needs at least one cell.
    #[must_use]
    pub fn new(dimension: u8) -> Self {
        assert!(dimension >= 1, "Board dimension must be at least 1");
        Self { dimension }
    }

    /// Board side length.
    #[must_use]
    pub const fn dimension(&self) -> u8 {
        self.dimension
    }

    /// Total number of cells; also the move count at which a board is full.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.dimension as usize * self.dimension as usize
    }

    /// Number of winning lines: one per row, one per column, and the two
    /// main diagonals.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        2 * self.dimension as usize + 2
    }

    /// Whether a position falls inside the board.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.dimension && position.y < self.dimension
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(CANONICAL_DIMENSION)
    }
}
