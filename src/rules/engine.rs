//! The match engine: move legality and outcome evaluation.
//!
//! The engine decides three things:
//! - Whether a proposed move is legal right now
//! - What a legal move does to the match status
//! - Which moves are open to the participant on turn
//!
//! It holds no match data of its own. Every call takes the current state
//! and log and returns new values, so callers can wrap submissions in
//! whatever serialization their storage needs.

use crate::core::board::Board;
use crate::core::config::BoardConfig;
use crate::core::log::{MoveLog, MoveRecord};
use crate::core::match_state::{MatchId, MatchState, MatchStatus};
use crate::core::participant::{ParticipantId, Seat};
use crate::core::position::Position;

use super::error::{MoveError, SetupError};

/// The values produced by one accepted move.
///
/// The inputs the move was applied to are untouched; callers persist
/// these replacements or drop them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Match state carrying the status after the move.
    pub state: MatchState,
    /// Move log with the accepted record appended.
    pub log: MoveLog,
    /// The accepted record, mover seat resolved.
    pub record: MoveRecord,
}

/// A pure rules engine for matches of one board dimension.
///
/// The dimension is fixed per engine, not per match; one engine instance
/// serves every match of a deployment. All methods are pure functions of
/// their inputs, so one engine may evaluate any number of matches
/// concurrently. The engine never persists anything; the caller owns
/// serializing submissions per match so two moves cannot both validate
/// against the same pre-move state.
///
/// ```
/// use gridmatch::core::{MatchId, MoveLog, ParticipantId, Position};
/// use gridmatch::rules::MatchEngine;
///
/// let engine = MatchEngine::canonical();
/// let a = ParticipantId::new(1);
/// let b = ParticipantId::new(2);
///
/// let state = engine.new_match(MatchId::new(1), a, b).unwrap();
/// let outcome = engine
///     .make_move(&state, &MoveLog::new(), a, Position::new(0, 0))
///     .unwrap();
///
/// assert_eq!(outcome.state.to_move(), Some(b));
/// assert_eq!(outcome.log.len(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MatchEngine {
    config: BoardConfig,
}

impl MatchEngine {
    /// Create an engine for the given board configuration.
    #[must_use]
    pub const fn new(config: BoardConfig) -> Self {
        Self { config }
    }

    /// An engine for the canonical 3x3 board.
    #[must_use]
    pub fn canonical() -> Self {
        Self::new(BoardConfig::default())
    }

    /// Get the board configuration.
    #[must_use]
    pub const fn config(&self) -> BoardConfig {
        self.config
    }

    /// Start a match between two participants, first seat to move.
    pub fn new_match(
        &self,
        id: MatchId,
        first: ParticipantId,
        second: ParticipantId,
    ) -> Result<MatchState, SetupError> {
        if first == second {
            return Err(SetupError::InvalidParticipants { participant: first });
        }
        Ok(MatchState::new(id, first, second))
    }

    /// Decide whether the requester may play at the position right now.
    ///
    /// Returns the seat the move would belong to. Checks run in a fixed
    /// order: terminal status, then turn, then bounds, then occupancy.
    /// Strangers to the match are refused as `NotYourTurn`. Nothing is
    /// mutated on either path.
    pub fn validate_move(
        &self,
        state: &MatchState,
        log: &MoveLog,
        position: Position,
        requester: ParticipantId,
    ) -> Result<Seat, MoveError> {
        let seat = match state.status().to_move() {
            Some(seat) => seat,
            None => return Err(MoveError::MatchFinished),
        };
        if state.participant(seat) != requester {
            return Err(MoveError::NotYourTurn);
        }
        if !self.config.contains(position) {
            return Err(MoveError::OutOfBounds {
                position,
                dimension: self.config.dimension(),
            });
        }
        if log.contains(position) {
            return Err(MoveError::CellOccupied { position });
        }
        Ok(seat)
    }

    /// Append a validated record and compute the resulting status.
    ///
    /// Assumes [`validate_move`](Self::validate_move) already passed for
    /// this record; feeding an unvalidated record is a caller bug and is
    /// caught by a debug assertion.
    #[must_use]
    pub fn apply_move(&self, state: &MatchState, log: &MoveLog, record: MoveRecord) -> MoveOutcome {
        debug_assert_eq!(
            self.validate_move(state, log, record.position, state.participant(record.seat)),
            Ok(record.seat),
            "apply_move requires a record that validate_move accepted"
        );

        let log = log.with(record.clone());
        let board = log.replay(self.config.dimension());
        let status = self.status_after(&board, record.seat, record.position);
        let state = state.with_status(status);

        MoveOutcome { state, log, record }
    }

    /// Validate and apply in one step.
    pub fn make_move(
        &self,
        state: &MatchState,
        log: &MoveLog,
        requester: ParticipantId,
        position: Position,
    ) -> Result<MoveOutcome, MoveError> {
        let seat = self.validate_move(state, log, position, requester)?;
        Ok(self.apply_move(state, log, MoveRecord::new(seat, position)))
    }

    /// Every position the participant on turn may play.
    ///
    /// Returns empty for a finished match.
    #[must_use]
    pub fn legal_moves(&self, state: &MatchState, log: &MoveLog) -> Vec<Position> {
        if state.status().is_terminal() {
            return Vec::new();
        }
        self.board(log).vacant_positions()
    }

    /// The board a log describes, at this engine's dimension.
    #[must_use]
    pub fn board(&self, log: &MoveLog) -> Board {
        log.replay(self.config.dimension())
    }

    /// Status after a move landed: win beats draw beats turn flip.
    ///
    /// Only lines through the landed position are inspected; a line
    /// elsewhere would have ended the match on an earlier move.
    fn status_after(&self, board: &Board, seat: Seat, position: Position) -> MatchStatus {
        if let Some(winner) = board.winner_through(position) {
            MatchStatus::Won(winner)
        } else if board.is_full() {
            MatchStatus::Drawn
        } else {
            MatchStatus::TurnOf(seat.opponent())
        }
    }
}
