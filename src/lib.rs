//! # gridmatch
//!
//! A deterministic match engine for two-player N-by-N grid games.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: the rules are a function of the inputs. The engine
//!    performs no I/O, reads no clock, and holds no match of its own;
//!    identity and durability are collaborator concerns.
//!
//! 2. **Log as Truth**: a match is its append-only move log. Boards are
//!    replayed from the log on demand and never stored, so state can
//!    never disagree with history.
//!
//! 3. **Configuration Over Convention**: board dimension is engine
//!    configuration, fixed per deployment rather than per match. The
//!    canonical game is 3x3; nothing in the rules assumes it.
//!
//! ## Architecture
//!
//! - **Value-In, Value-Out**: every engine call takes the current state
//!   and log and returns replacements, which makes per-match
//!   serialization the caller's one obligation.
//!
//! - **Persistent Data Structures**: O(1) log snapshots via `im-rs`.
//!
//! - **Storage Seam**: the `MatchStore` trait owns remembering matches;
//!   `MemoryStore` is the in-process reference implementation.
//!
//! ## Modules
//!
//! - `core`: participants, positions, boards, move logs, match state
//! - `rules`: move legality and outcome evaluation
//! - `store`: durable match records behind the `MatchStore` seam

pub mod core;
pub mod rules;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    Board, BoardConfig, Line, MatchId, MatchState, MatchStatus, MoveLog, MoveRecord,
    ParticipantId, Position, Seat, CANONICAL_DIMENSION,
};

pub use crate::rules::{MatchEngine, MoveError, MoveOutcome, SetupError};

pub use crate::store::{MatchEntry, MatchStore, MemoryStore, StoreError, MAX_COMMENT_LEN};
