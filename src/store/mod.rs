//! Durable match records and the storage seam.
//!
//! The engine is pure; something has to remember matches between calls.
//! `MatchStore` is that seam: implementations own match records and move
//! logs, serialize submissions per match, and call into the engine for
//! every legality and outcome decision. [`MemoryStore`] is the reference
//! implementation, a thread-safe in-process map.

pub mod error;
pub mod memory;

pub use error::StoreError;
pub use memory::{MatchEntry, MemoryStore};

use crate::core::log::MoveLog;
use crate::core::match_state::{MatchId, MatchState};
use crate::core::participant::ParticipantId;
use crate::core::position::Position;
use crate::rules::engine::MoveOutcome;

/// Longest move comment a store accepts, in characters.
pub const MAX_COMMENT_LEN: usize = 300;

/// Durable home of matches and their move logs.
///
/// Implementations must serialize submissions per match: two concurrent
/// submissions must never both validate against the same pre-move state,
/// or accepted movers would stop alternating. Distinct matches need no
/// mutual exclusion.
pub trait MatchStore {
    /// Create and record a fresh match between two participants.
    fn create_match(
        &self,
        first: ParticipantId,
        second: ParticipantId,
    ) -> Result<MatchState, StoreError>;

    /// The current state of a match.
    fn match_state(&self, id: MatchId) -> Result<MatchState, StoreError>;

    /// The accepted moves of a match, oldest first.
    fn move_log(&self, id: MatchId) -> Result<MoveLog, StoreError>;

    /// Submit a move on behalf of a participant.
    ///
    /// On acceptance the stored match reflects the returned outcome.
    /// A refused submission changes nothing.
    fn submit_move(
        &self,
        id: MatchId,
        requester: ParticipantId,
        position: Position,
        comment: Option<&str>,
    ) -> Result<MoveOutcome, StoreError>;

    /// Every match this participant plays in, ordered by match id.
    fn matches_for(&self, participant: ParticipantId) -> Result<Vec<MatchState>, StoreError>;

    /// The still-running matches this participant plays in, ordered by
    /// match id.
    fn active_matches_for(
        &self,
        participant: ParticipantId,
    ) -> Result<Vec<MatchState>, StoreError>;
}
