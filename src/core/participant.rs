//! Participant identification and seat assignment.
//!
//! ## ParticipantId
//!
//! Opaque identifier for a person (or agent) playing matches. The engine
//! never interprets these values - they come from whatever identity system
//! the embedding application uses, and are only compared for equality.
//!
//! ## Seat
//!
//! Which side of a match a participant occupies. The first seat always
//! moves first; everything turn-related inside the engine is phrased in
//! terms of seats, and participants are resolved to seats at the match
//! boundary.

use serde::{Deserialize, Serialize};

/// Opaque participant identifier.
///
/// Supplied by the identity collaborator; the engine only compares these
/// for equality.
///
/// ```
/// use gridmatch::core::ParticipantId;
///
/// let alice = ParticipantId::new(7);
/// let bob = ParticipantId::new(8);
///
/// assert_ne!(alice, bob);
/// assert_eq!(alice.raw(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(pub u64);

impl ParticipantId {
    /// Create a new participant ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "participant {}", self.0)
    }
}

/// Which side of a match a participant occupies.
///
/// The first seat moves first. Turn order strictly alternates between the
/// two seats until the match reaches a terminal status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The seat that moves first.
    First,
    /// The seat that moves second.
    Second,
}

impl Seat {
    /// The seat across the board.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Whether this is the seat that opens the match.
    #[must_use]
    pub const fn is_first(self) -> bool {
        matches!(self, Seat::First)
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::First => write!(f, "First Player"),
            Seat::Second => write!(f, "Second Player"),
        }
    }
}
