//! Move legality and outcome evaluation.
//!
//! The `MatchEngine` decides:
//! - Whether a proposed move is legal for the requester right now
//! - The status a legal move leaves the match in
//! - Which moves remain open
//!
//! Everything here is a pure function of the state and log the caller
//! passes in; storage and identity stay collaborator concerns.

pub mod engine;
pub mod error;

pub use engine::{MatchEngine, MoveOutcome};
pub use error::{MoveError, SetupError};
