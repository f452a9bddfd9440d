//! Progression store: per-game level progress for one user session.
//!
//! The store is an explicit value bound to one (optional) user at construction.
//! It answers unlock and aggregate queries synchronously and mirrors the whole
//! mapping into a single slot after every mutation.
//!
//! Persistence is best effort. A missing or unreadable slot means "no progress
//! yet"; a failed write is logged and the in-memory mapping stays
//! authoritative for the rest of the session. Without a user the store is
//! transient and never touches storage.

use crate::error::EcoQuestError;
use crate::games::GameId;
use crate::progress::GameProgressRecord;
use crate::slot::{slot_key, SlotStorage};
use crate::stats::GlobalStats;
use crate::DEFAULT_KEY_PREFIX;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// What a single `complete_level` call changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelOutcome {
    pub game: GameId,
    pub level: u32,
    /// False when the level had already been completed before
    pub first_completion: bool,
    pub points_awarded: u64,
    /// Plant stage after the call
    pub plant_stage: u8,
    pub stage_advanced: bool,
    /// Whether `level + 1` is now open
    pub unlocked_next: bool,
    /// Whether the follow-up save reached storage
    pub saved: bool,
}

/// Per-user progression across all games
pub struct ProgressionStore<S: SlotStorage> {
    storage: S,
    user_id: Option<String>,
    key_prefix: String,
    games: BTreeMap<GameId, GameProgressRecord>,
}

impl<S: SlotStorage> ProgressionStore<S> {
    /// Start a session for `user_id` with the default key prefix
    pub fn open(storage: S, user_id: Option<&str>) -> Self {
        Self::open_with_prefix(storage, user_id, DEFAULT_KEY_PREFIX)
    }

    /// Start a session, adopting any saved progress found in the user's slot
    pub fn open_with_prefix(storage: S, user_id: Option<&str>, key_prefix: &str) -> Self {
        let mut store = Self {
            storage,
            user_id: user_id.map(str::to_string),
            key_prefix: key_prefix.to_string(),
            games: BTreeMap::new(),
        };
        store.games = store.load();
        store
    }

    /// Build a store from a slot payload. Unlike `open`, a malformed payload
    /// is reported instead of discarded.
    pub fn from_json(storage: S, user_id: Option<&str>, json: &str) -> Result<Self, EcoQuestError> {
        let games = decode_snapshot(json)?;
        Ok(Self {
            storage,
            user_id: user_id.map(str::to_string),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
            games,
        })
    }

    fn load(&self) -> BTreeMap<GameId, GameProgressRecord> {
        let Some(key) = self.slot_key() else {
            debug!("No user, progression is transient");
            return BTreeMap::new();
        };

        match self.storage.read(&key) {
            Ok(Some(json)) => match decode_snapshot(&json) {
                Ok(games) => {
                    info!("Loaded progress for {} games from {}", games.len(), key);
                    games
                }
                Err(e) => {
                    warn!("Discarding unreadable progress in {}: {}", key, e);
                    BTreeMap::new()
                }
            },
            Ok(None) => {
                debug!("No saved progress in {}", key);
                BTreeMap::new()
            }
            Err(e) => {
                warn!("Cannot read progress slot {}: {}", key, e);
                BTreeMap::new()
            }
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    /// Slot this session persists to, if any
    pub fn slot_key(&self) -> Option<String> {
        self.user_id
            .as_deref()
            .map(|user| slot_key(&self.key_prefix, user))
    }

    pub fn is_persistent(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Record for a game; games never played read as the default record
    pub fn get_progress(&self, game: GameId) -> GameProgressRecord {
        self.games.get(&game).cloned().unwrap_or_default()
    }

    /// Level 1 is always open. Any other level opens as soon as its immediate
    /// predecessor has been completed, even if earlier levels were skipped.
    pub fn is_unlocked(&self, game: GameId, level: u32) -> bool {
        match self.games.get(&game) {
            Some(rec) => rec.is_unlocked(level),
            None => level == 1,
        }
    }

    /// Report a level win and persist.
    ///
    /// The completed-level ledger is idempotent but points are not: replaying
    /// a level awards `points_earned` again.
    pub fn complete_level(&mut self, game: GameId, level: u32, points_earned: u64) -> LevelOutcome {
        let rec = self.games.entry(game).or_default();
        let stage_before = rec.plant_stage;
        let first_completion = rec.complete(level, points_earned);
        let plant_stage = rec.plant_stage;
        let unlocked_next = rec.is_unlocked(level.saturating_add(1));

        debug!(
            "{} level {} complete (+{} pts, first={}, stage {} -> {})",
            game, level, points_earned, first_completion, stage_before, plant_stage
        );

        let saved = self.save();

        LevelOutcome {
            game,
            level,
            first_completion,
            points_awarded: points_earned,
            plant_stage,
            stage_advanced: plant_stage > stage_before,
            unlocked_next,
            saved,
        }
    }

    pub fn get_plant_stage(&self, game: GameId) -> u8 {
        self.games.get(&game).map(|r| r.plant_stage).unwrap_or(0)
    }

    /// Number of games whose plant reached the final stage
    pub fn get_total_trees_grown(&self) -> usize {
        self.games.values().filter(|r| r.is_tree()).count()
    }

    pub fn get_global_stats(&self) -> GlobalStats {
        GlobalStats::from_records(self.records())
    }

    /// Stored records in pinned game order. Games never played are skipped.
    pub fn records(&self) -> impl Iterator<Item = (GameId, &GameProgressRecord)> {
        self.games.iter().map(|(g, r)| (*g, r))
    }

    /// Forget all progress, in memory and in the user's slot
    pub fn reset_progress(&mut self) {
        self.games.clear();

        let Some(key) = self.slot_key() else {
            return;
        };
        match self.storage.remove(&key) {
            Ok(()) => info!("Progress reset for {}", key),
            Err(e) => warn!("Failed to clear progress slot {}: {}", key, e),
        }
    }

    /// Write the whole mapping to the user's slot.
    ///
    /// Fire-and-forget: failures are logged, never returned, and not retried.
    /// Returns true only when the slot was actually written.
    pub fn save(&mut self) -> bool {
        let Some(key) = self.slot_key() else {
            return false;
        };

        let json = match self.to_json() {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to encode progress for {}: {}", key, e);
                return false;
            }
        };

        match self.storage.write(&key, &json) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to save progress to {}: {}", key, e);
                false
            }
        }
    }

    /// Slot payload for the current mapping
    pub fn to_json(&self) -> Result<String, EcoQuestError> {
        Ok(serde_json::to_string(&self.games)?)
    }
}

/// Parse a slot payload. Unknown game tags are dropped; cached plant stages
/// are re-derived from the completed levels.
pub fn decode_snapshot(json: &str) -> Result<BTreeMap<GameId, GameProgressRecord>, EcoQuestError> {
    let raw: BTreeMap<String, GameProgressRecord> = serde_json::from_str(json)?;
    let mut games = BTreeMap::new();
    for (tag, mut rec) in raw {
        match tag.parse::<GameId>() {
            Ok(game) => {
                rec.normalize();
                games.insert(game, rec);
            }
            Err(_) => debug!("Dropping progress for unknown game {:?}", tag),
        }
    }
    Ok(games)
}
