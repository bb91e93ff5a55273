//! Match identity and lifecycle.
//!
//! A `MatchState` records who is playing and where the match stands. It
//! deliberately excludes the grid itself: the board is derived from the
//! move log, so the state stays a handful of copyable words that update
//! only when the status changes.

use serde::{Deserialize, Serialize};

use super::participant::{ParticipantId, Seat};

/// A unique identifier for a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MatchId(pub u64);

impl MatchId {
    /// Create a new match ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "match {}", self.0)
    }
}

/// Where a match stands: whose turn it is, or how it ended.
///
/// A match starts in `TurnOf(Seat::First)` and alternates seats until it
/// reaches `Won` or `Drawn`. The terminal statuses are absorbing; no
/// transition leaves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    /// The match is live and the given seat moves next.
    TurnOf(Seat),
    /// The given seat completed a line.
    Won(Seat),
    /// The board filled with no line completed.
    Drawn,
}

impl MatchStatus {
    /// The status every match starts in: first seat to move.
    #[must_use]
    pub const fn initial() -> Self {
        Self::TurnOf(Seat::First)
    }

    /// Whether the match has ended.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::TurnOf(_))
    }

    /// The seat expected to move, if the match is live.
    #[must_use]
    pub const fn to_move(&self) -> Option<Seat> {
        match self {
            Self::TurnOf(seat) => Some(*seat),
            _ => None,
        }
    }

    /// The winning seat, if the match ended in a win.
    #[must_use]
    pub const fn winner(&self) -> Option<Seat> {
        match self {
            Self::Won(seat) => Some(*seat),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TurnOf(seat) => write!(f, "{} to Move", seat),
            Self::Won(seat) => write!(f, "{} Wins", seat),
            Self::Drawn => write!(f, "Draw"),
        }
    }
}

/// The identity and lifecycle of one match.
///
/// ```
/// use gridmatch::core::{MatchId, MatchState, ParticipantId, Seat};
///
/// let state = MatchState::new(
///     MatchId::new(1),
///     ParticipantId::new(10),
///     ParticipantId::new(20),
/// );
///
/// assert_eq!(state.to_move(), Some(ParticipantId::new(10)));
/// assert_eq!(state.seat_of(ParticipantId::new(20)), Some(Seat::Second));
/// assert!(!state.status().is_terminal());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    id: MatchId,
    first: ParticipantId,
    second: ParticipantId,
    status: MatchStatus,
}

impl MatchState {
    /// Create a fresh match between two participants, first seat to move.
    ///
    /// Panics if both seats would be held by the same participant; callers
    /// that take untrusted pairings validate them first.
    #[must_use]
    pub fn new(id: MatchId, first: ParticipantId, second: ParticipantId) -> Self {
        assert_ne!(
            first, second,
            "A match needs two distinct participants, got {} twice",
            first
        );
        Self {
            id,
            first,
            second,
            status: MatchStatus::initial(),
        }
    }

    /// Get the match ID.
    #[must_use]
    pub const fn id(&self) -> MatchId {
        self.id
    }

    /// The participant holding the first seat.
    #[must_use]
    pub const fn first(&self) -> ParticipantId {
        self.first
    }

    /// The participant holding the second seat.
    #[must_use]
    pub const fn second(&self) -> ParticipantId {
        self.second
    }

    /// Get the current status.
    #[must_use]
    pub const fn status(&self) -> MatchStatus {
        self.status
    }

    /// The same match with a different status.
    #[must_use]
    pub(crate) const fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }

    /// The participant holding a seat.
    #[must_use]
    pub const fn participant(&self, seat: Seat) -> ParticipantId {
        match seat {
            Seat::First => self.first,
            Seat::Second => self.second,
        }
    }

    /// The seat a participant holds, or `None` for a stranger to the
    /// match.
    #[must_use]
    pub fn seat_of(&self, participant: ParticipantId) -> Option<Seat> {
        if participant == self.first {
            Some(Seat::First)
        } else if participant == self.second {
            Some(Seat::Second)
        } else {
            None
        }
    }

    /// Whether a participant plays in this match.
    #[must_use]
    pub fn is_participant(&self, participant: ParticipantId) -> bool {
        self.seat_of(participant).is_some()
    }

    /// The participant expected to move, if the match is live.
    #[must_use]
    pub fn to_move(&self) -> Option<ParticipantId> {
        self.status.to_move().map(|seat| self.participant(seat))
    }

    /// Whether it is this participant's turn right now.
    #[must_use]
    pub fn is_turn_of(&self, participant: ParticipantId) -> bool {
        self.to_move() == Some(participant)
    }
}

impl std::fmt::Display for MatchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} vs {} ({})",
            self.id, self.first, self.second, self.status
        )
    }
}
