//! The append-only move log.
//!
//! The log is the source of truth for a match: every accepted move is
//! appended exactly once, nothing is ever rewritten, and the board at any
//! point is recovered by replaying the records in order. Backed by a
//! persistent vector so that appending yields a new log without touching
//! the old one.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::participant::Seat;
use super::position::Position;

/// One accepted move: who moved, where, and an optional remark.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The seat that made the move.
    pub seat: Seat,
    /// The cell the move claimed.
    pub position: Position,
    /// Free-text remark attached by the mover, if any.
    pub comment: Option<String>,
}

impl MoveRecord {
    /// Create a record with no comment.
    #[must_use]
    pub const fn new(seat: Seat, position: Position) -> Self {
        Self {
            seat,
            position,
            comment: None,
        }
    }

    /// Create a record carrying a comment.
    #[must_use]
    pub fn with_comment(seat: Seat, position: Position, comment: impl Into<String>) -> Self {
        Self {
            seat,
            position,
            comment: Some(comment.into()),
        }
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.seat, self.position)
    }
}

/// The ordered history of accepted moves in one match.
///
/// ```
/// use gridmatch::core::{MoveLog, MoveRecord, Position, Seat};
///
/// let log = MoveLog::new()
///     .with(MoveRecord::new(Seat::First, Position::new(0, 0)))
///     .with(MoveRecord::new(Seat::Second, Position::new(1, 1)));
///
/// assert_eq!(log.len(), 2);
/// assert!(log.contains(Position::new(1, 1)));
/// assert_eq!(log.replay(3).occupied_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveLog {
    records: Vector<MoveRecord>,
}

impl MoveLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Vector::new(),
        }
    }

    /// Number of accepted moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no move has been accepted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in the order they were accepted.
    pub fn iter(&self) -> impl Iterator<Item = &MoveRecord> {
        self.records.iter()
    }

    /// The record at the given index, oldest first.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&MoveRecord> {
        self.records.get(index)
    }

    /// The most recently accepted move.
    #[must_use]
    pub fn last(&self) -> Option<&MoveRecord> {
        self.records.back()
    }

    /// Whether any accepted move already claimed this position.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.records.iter().any(|r| r.position == position)
    }

    /// A new log with one more record appended; the original is untouched.
    #[must_use]
    pub fn with(&self, record: MoveRecord) -> Self {
        let mut records = self.records.clone();
        records.push_back(record);
        Self { records }
    }

    /// Rebuild the board this log describes.
    ///
    /// Panics if the log holds moves a board of this dimension could not
    /// have accepted; logs only ever grow through move validation, so a
    /// panic here means records were forged or replayed at the wrong
    /// dimension.
    #[must_use]
    pub fn replay(&self, dimension: u8) -> Board {
        let mut board = Board::empty(dimension);
        for record in self.records.iter() {
            board.place(record.position, record.seat);
        }
        board
    }
}
