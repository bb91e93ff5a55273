//! Core match types: participants, positions, boards, logs, match state.
//!
//! This module contains the fundamental building blocks that are pure data.
//! All legality and outcome decisions live in `rules`; nothing here reaches
//! for a clock or any other ambient input.

pub mod participant;
pub mod position;
pub mod config;
pub mod board;
pub mod match_state;
pub mod log;

pub use participant::{ParticipantId, Seat};
pub use position::Position;
pub use config::{BoardConfig, CANONICAL_DIMENSION};
pub use board::{Board, Line};
pub use match_state::{MatchId, MatchState, MatchStatus};
pub use log::{MoveLog, MoveRecord};
