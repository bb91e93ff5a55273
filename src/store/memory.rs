//! Thread-safe in-process match store.
//!
//! The reference `MatchStore`: match records live in a map behind one
//! mutex, and every submission runs validate-then-apply while holding it,
//! so moves against one match are serialized exactly as the engine's
//! caller contract requires. Suitable for servers that keep matches in
//! process; swap in another `MatchStore` for real durability.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::core::config::BoardConfig;
use crate::core::log::{MoveLog, MoveRecord};
use crate::core::match_state::{MatchId, MatchState};
use crate::core::participant::ParticipantId;
use crate::core::position::Position;
use crate::rules::engine::{MatchEngine, MoveOutcome};

use super::error::StoreError;
use super::{MatchStore, MAX_COMMENT_LEN};

/// One stored match: its state, its log, and when it was touched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEntry {
    state: MatchState,
    log: MoveLog,
    created_at: DateTime<Utc>,
    last_move_at: DateTime<Utc>,
}

impl MatchEntry {
    fn new(state: MatchState, now: DateTime<Utc>) -> Self {
        Self {
            state,
            log: MoveLog::new(),
            created_at: now,
            last_move_at: now,
        }
    }

    /// Get the match state.
    #[must_use]
    pub const fn state(&self) -> MatchState {
        self.state
    }

    /// Get the move log.
    #[must_use]
    pub const fn log(&self) -> &MoveLog {
        &self.log
    }

    /// When the match was created.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When the last move was accepted; creation time while the log is
    /// empty.
    #[must_use]
    pub const fn last_move_at(&self) -> DateTime<Utc> {
        self.last_move_at
    }
}

/// Everything a store holds, in serializable form.
#[derive(Serialize, Deserialize)]
struct StoreSnapshot {
    config: BoardConfig,
    next_id: u64,
    matches: Vec<MatchEntry>,
}

#[derive(Debug)]
struct StoreInner {
    next_id: u64,
    matches: FxHashMap<MatchId, MatchEntry>,
}

/// In-memory `MatchStore` backed by a mutex-guarded map.
///
/// Cloning is cheap and every clone shares the same matches, so handlers
/// can each hold one.
///
/// ```
/// use gridmatch::core::{ParticipantId, Position};
/// use gridmatch::store::{MatchStore, MemoryStore};
///
/// let store = MemoryStore::default();
/// let a = ParticipantId::new(1);
/// let b = ParticipantId::new(2);
///
/// let state = store.create_match(a, b).unwrap();
/// let outcome = store
///     .submit_move(state.id(), a, Position::new(0, 0), Some("opening corner"))
///     .unwrap();
///
/// assert_eq!(outcome.state.to_move(), Some(b));
/// assert_eq!(store.move_log(state.id()).unwrap().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct MemoryStore {
    engine: MatchEngine,
    inner: Arc<Mutex<StoreInner>>,
}

impl MemoryStore {
    /// Create an empty store whose matches use the given engine.
    #[instrument]
    #[must_use]
    pub fn new(engine: MatchEngine) -> Self {
        info!(
            dimension = engine.config().dimension(),
            "Creating in-memory match store"
        );
        Self {
            engine,
            inner: Arc::new(Mutex::new(StoreInner {
                next_id: 0,
                matches: FxHashMap::default(),
            })),
        }
    }

    /// Get the engine this store rules matches with.
    #[must_use]
    pub const fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Number of matches stored.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.inner.lock().unwrap().matches.len()
    }

    /// The full stored entry for a match, timestamps included.
    pub fn match_entry(&self, id: MatchId) -> Result<MatchEntry, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner
            .matches
            .get(&id)
            .cloned()
            .ok_or(StoreError::MatchNotFound { id })
    }

    /// Encode the whole store, matches ordered by id.
    pub fn snapshot(&self) -> Result<Vec<u8>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut matches: Vec<MatchEntry> = inner.matches.values().cloned().collect();
        matches.sort_by_key(|entry| entry.state.id());
        let snapshot = StoreSnapshot {
            config: self.engine.config(),
            next_id: inner.next_id,
            matches,
        };
        bincode::serialize(&snapshot).map_err(|err| StoreError::Snapshot {
            message: err.to_string(),
        })
    }

    /// Rebuild a store from [`snapshot`](Self::snapshot) bytes.
    pub fn restore(bytes: &[u8]) -> Result<Self, StoreError> {
        let snapshot: StoreSnapshot =
            bincode::deserialize(bytes).map_err(|err| StoreError::Snapshot {
                message: err.to_string(),
            })?;

        let mut matches = FxHashMap::default();
        for entry in snapshot.matches {
            matches.insert(entry.state.id(), entry);
        }
        info!(matches = matches.len(), "Restored match store from snapshot");

        Ok(Self {
            engine: MatchEngine::new(snapshot.config),
            inner: Arc::new(Mutex::new(StoreInner {
                next_id: snapshot.next_id,
                matches,
            })),
        })
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(MatchEngine::canonical())
    }
}

impl MatchStore for MemoryStore {
    #[instrument(skip(self))]
    fn create_match(
        &self,
        first: ParticipantId,
        second: ParticipantId,
    ) -> Result<MatchState, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let id = MatchId::new(inner.next_id);
        let state = self.engine.new_match(id, first, second)?;
        inner.next_id += 1;
        inner.matches.insert(id, MatchEntry::new(state, Utc::now()));
        info!(%id, %first, %second, "Created match");
        Ok(state)
    }

    fn match_state(&self, id: MatchId) -> Result<MatchState, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner
            .matches
            .get(&id)
            .map(|entry| entry.state)
            .ok_or(StoreError::MatchNotFound { id })
    }

    fn move_log(&self, id: MatchId) -> Result<MoveLog, StoreError> {
        let inner = self.inner.lock().unwrap();
        inner
            .matches
            .get(&id)
            .map(|entry| entry.log.clone())
            .ok_or(StoreError::MatchNotFound { id })
    }

    #[instrument(skip(self, comment))]
    fn submit_move(
        &self,
        id: MatchId,
        requester: ParticipantId,
        position: Position,
        comment: Option<&str>,
    ) -> Result<MoveOutcome, StoreError> {
        if let Some(comment) = comment {
            let length = comment.chars().count();
            if length > MAX_COMMENT_LEN {
                warn!(%id, length, "Refused over-long move comment");
                return Err(StoreError::CommentTooLong {
                    length,
                    limit: MAX_COMMENT_LEN,
                });
            }
        }

        // The lock spans validate and apply, so two submissions can never
        // both validate against the same pre-move state.
        let mut inner = self.inner.lock().unwrap();
        let entry = inner
            .matches
            .get_mut(&id)
            .ok_or(StoreError::MatchNotFound { id })?;

        let seat = match self
            .engine
            .validate_move(&entry.state, &entry.log, position, requester)
        {
            Ok(seat) => seat,
            Err(err) => {
                warn!(%id, %requester, %position, %err, "Refused move");
                return Err(err.into());
            }
        };

        let record = match comment {
            Some(comment) => MoveRecord::with_comment(seat, position, comment),
            None => MoveRecord::new(seat, position),
        };
        let outcome = self.engine.apply_move(&entry.state, &entry.log, record);

        entry.state = outcome.state;
        entry.log = outcome.log.clone();
        entry.last_move_at = Utc::now();
        info!(%id, %position, status = %outcome.state.status(), "Accepted move");

        Ok(outcome)
    }

    fn matches_for(&self, participant: ParticipantId) -> Result<Vec<MatchState>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut matches: Vec<MatchState> = inner
            .matches
            .values()
            .filter(|entry| entry.state.is_participant(participant))
            .map(|entry| entry.state)
            .collect();
        matches.sort_by_key(MatchState::id);
        Ok(matches)
    }

    fn active_matches_for(
        &self,
        participant: ParticipantId,
    ) -> Result<Vec<MatchState>, StoreError> {
        let inner = self.inner.lock().unwrap();
        let mut matches: Vec<MatchState> = inner
            .matches
            .values()
            .filter(|entry| {
                entry.state.is_participant(participant) && !entry.state.status().is_terminal()
            })
            .map(|entry| entry.state)
            .collect();
        matches.sort_by_key(MatchState::id);
        Ok(matches)
    }
}
