//! Typed rejections surfaced by the match engine.
//!
//! Every variant is a refusal of an illegal operation, not an internal
//! failure: nothing here is transient or retryable, and a rejected call
//! leaves no partial state behind. Callers translate these into whatever
//! their surface speaks.

use derive_more::{Display, Error};

use crate::core::participant::ParticipantId;
use crate::core::position::Position;

/// Why a proposed move was refused.
///
/// Checks run in a fixed order, so a move that is wrong in several ways
/// reports the first refusal found: finished match, then turn, then
/// bounds, then occupancy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The match reached a terminal status; no further moves exist.
    #[display("The match has already finished")]
    MatchFinished,
    /// The requester is not the participant whose turn it is. Also the
    /// answer given to participants who are strangers to the match.
    #[display("It is not your turn to move")]
    NotYourTurn,
    /// The position falls outside the board.
    #[display("{position} is outside the {dimension}x{dimension} board")]
    OutOfBounds {
        /// The offending position.
        position: Position,
        /// Board side length the position was checked against.
        dimension: u8,
    },
    /// An earlier accepted move already claimed the position.
    #[display("{position} is already occupied")]
    CellOccupied {
        /// The contested position.
        position: Position,
    },
}

/// Why a match could not be created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum SetupError {
    /// Both seats would be held by the same participant.
    #[display("{participant} cannot hold both seats of one match")]
    InvalidParticipants {
        /// The participant offered for both seats.
        participant: ParticipantId,
    },
}
