//! Failures surfaced by match stores.

use derive_more::{Display, Error, From};

use crate::core::match_state::MatchId;
use crate::rules::error::{MoveError, SetupError};

/// Why a store operation failed.
///
/// Wraps the engine's own refusals so callers see one error type at the
/// storage seam, and adds the failures only a store can produce.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error, From)]
pub enum StoreError {
    /// No match with this identifier exists in the store.
    #[display("{id} does not exist")]
    MatchNotFound {
        /// The identifier that was looked up.
        id: MatchId,
    },
    /// A move comment exceeded the store's length limit.
    #[display("comment of {length} characters exceeds the limit of {limit}")]
    CommentTooLong {
        /// Characters submitted.
        length: usize,
        /// Characters permitted.
        limit: usize,
    },
    /// Match creation refused by the rules.
    #[display("{_0}")]
    #[from]
    Setup(SetupError),
    /// Move refused by the rules.
    #[display("{_0}")]
    #[from]
    Move(MoveError),
    /// A snapshot could not be encoded or decoded.
    #[display("snapshot failed: {message}")]
    Snapshot {
        /// What the codec reported.
        message: String,
    },
}

impl StoreError {
    /// The rules-level refusal behind this error, if that is what it is.
    #[must_use]
    pub const fn as_move_error(&self) -> Option<MoveError> {
        match self {
            Self::Move(err) => Some(*err),
            _ => None,
        }
    }
}
