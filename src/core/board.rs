//! The derived board grid.
//!
//! A `Board` is replay output: it is rebuilt from a match's move log
//! whenever an outcome needs evaluating, and is never stored anywhere.
//! It therefore carries no serde support - the move log is the durable
//! representation, the board is a view of it.
//!
//! ## Winning lines
//!
//! An N-by-N board has `2N + 2` winning lines: N rows, N columns, and the
//! two main diagonals. A line is won by a seat only when that seat's moves
//! occupy every cell of the line; a vacant cell matches nothing, not even
//! another vacant cell.

use smallvec::SmallVec;

use super::participant::Seat;
use super::position::Position;

/// The cells of one winning line.
///
/// Inline capacity covers the canonical 3x3 case; wider boards spill to
/// the heap.
pub type Line = SmallVec<[Position; 3]>;

/// An N-by-N grid of seat markers.
///
/// ```
/// use gridmatch::core::{Board, Position, Seat};
///
/// let mut board = Board::empty(3);
/// board.place(Position::new(0, 0), Seat::First);
/// board.place(Position::new(1, 1), Seat::Second);
///
/// assert_eq!(board.cell(Position::new(0, 0)), Some(Seat::First));
/// assert_eq!(board.cell(Position::new(2, 2)), None);
/// assert_eq!(board.winner(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    dimension: u8,
    /// Row-major cells; `None` marks a vacant cell.
    cells: Vec<Option<Seat>>,
}

impl Board {
    /// Create a vacant board of the given dimension.
    ///
    /// Panics if `dimension` is zero.
    #[must_use]
    pub fn empty(dimension: u8) -> Self {
        assert!(dimension >= 1, "Board dimension must be at least 1");
        Self {
            dimension,
            cells: vec![None; dimension as usize * dimension as usize],
        }
    }

    /// Board side length.
    #[must_use]
    pub const fn dimension(&self) -> u8 {
        self.dimension
    }

    /// Whether a position falls inside this board.
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.x < self.dimension && position.y < self.dimension
    }

    /// The seat occupying a cell, or `None` when vacant.
    ///
    /// Panics if the position is outside the board: an out-of-range `x`
    /// would otherwise alias into a cell of the next row.
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<Seat> {
        assert!(
            self.contains(position),
            "{} is outside the {n}x{n} board",
            position,
            n = self.dimension
        );
        self.cells[position.index(self.dimension)]
    }

    /// Whether a cell is vacant.
    #[must_use]
    pub fn is_vacant(&self, position: Position) -> bool {
        self.cell(position).is_none()
    }

    /// Mark a cell for a seat.
    ///
    /// Panics if the position is outside the board or already occupied;
    /// move legality is decided before a board is touched.
    pub fn place(&mut self, position: Position, seat: Seat) {
        assert!(
            self.contains(position),
            "{} is outside the {n}x{n} board",
            position,
            n = self.dimension
        );
        let slot = &mut self.cells[position.index(self.dimension)];
        assert!(slot.is_none(), "{} is already occupied", position);
        *slot = Some(seat);
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// All vacant positions, in row-major order.
    #[must_use]
    pub fn vacant_positions(&self) -> Vec<Position> {
        let mut vacant = Vec::new();
        for y in 0..self.dimension {
            for x in 0..self.dimension {
                let position = Position::new(x, y);
                if self.is_vacant(position) {
                    vacant.push(position);
                }
            }
        }
        vacant
    }

    // === Winning lines ===

    /// Every winning line of the board: rows, then columns, then the main
    /// diagonal, then the anti-diagonal.
    #[must_use]
    pub fn lines(&self) -> Vec<Line> {
        let n = self.dimension;
        let mut lines = Vec::with_capacity(2 * n as usize + 2);
        for y in 0..n {
            lines.push((0..n).map(|x| Position::new(x, y)).collect());
        }
        for x in 0..n {
            lines.push((0..n).map(|y| Position::new(x, y)).collect());
        }
        lines.push((0..n).map(|i| Position::new(i, i)).collect());
        lines.push((0..n).map(|i| Position::new(n - 1 - i, i)).collect());
        lines
    }

    /// The winning lines that pass through a position: its row, its
    /// column, and whichever diagonals it sits on.
    #[must_use]
    pub fn lines_through(&self, position: Position) -> Vec<Line> {
        let n = self.dimension;
        let mut lines = Vec::with_capacity(4);
        lines.push((0..n).map(|x| Position::new(x, position.y)).collect());
        lines.push((0..n).map(|y| Position::new(position.x, y)).collect());
        if position.on_main_diagonal() {
            lines.push((0..n).map(|i| Position::new(i, i)).collect());
        }
        if position.on_anti_diagonal(n) {
            lines.push((0..n).map(|i| Position::new(n - 1 - i, i)).collect());
        }
        lines
    }

    /// The seat that has completed a line, scanning every line.
    ///
    /// On boards reached through legal play at most one seat can own a
    /// line; this returns the owner of the first complete line found.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        for line in self.lines() {
            if let Some(seat) = self.line_owner(&line) {
                return Some(seat);
            }
        }
        None
    }

    /// The seat that has completed a line through the given position.
    ///
    /// Equivalent to [`winner`](Self::winner) on boards reached through
    /// legal play, because a line completed by earlier moves would have
    /// ended the match earlier; checking only the lines touched by the
    /// latest move is the cheap form.
    #[must_use]
    pub fn winner_through(&self, position: Position) -> Option<Seat> {
        for line in self.lines_through(position) {
            if let Some(seat) = self.line_owner(&line) {
                return Some(seat);
            }
        }
        None
    }

    /// The seat owning every cell of a line, if any.
    ///
    /// Vacant cells never match: a line containing one can have no owner.
    fn line_owner(&self, line: &[Position]) -> Option<Seat> {
        let owner = self.cell(line[0])?;
        if line[1..].iter().all(|&p| self.cell(p) == Some(owner)) {
            Some(owner)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Board {
    /// Renders `A` and `B` for the seats and `.` for vacant cells, one
    /// row per output line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.dimension {
            for x in 0..self.dimension {
                let mark = match self.cell(Position::new(x, y)) {
                    Some(Seat::First) => 'A',
                    Some(Seat::Second) => 'B',
                    None => '.',
                };
                write!(f, "{}", mark)?;
            }
            if y + 1 < self.dimension {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
