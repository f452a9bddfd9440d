//! Shared types and progression logic for EcoQuest.
//!
//! The heart of the crate is [`ProgressionStore`]: per-user, per-game level
//! progress with unlock rules, plant growth, and best-effort local persistence.

pub mod badges;
pub mod config;
pub mod error;
pub mod games;
pub mod progress;
pub mod progress_store;
pub mod slot;
pub mod stats;

pub use config::EcoQuestConfig;
pub use error::EcoQuestError;
pub use games::GameId;
pub use progress::{GameProgressRecord, PlantStage, MAX_PLANT_STAGE};
pub use progress_store::{LevelOutcome, ProgressionStore};
pub use slot::{FileSlotStorage, MemorySlotStorage, SlotStorage};
pub use stats::GlobalStats;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default prefix of per-user progress slot keys
pub const DEFAULT_KEY_PREFIX: &str = "ecoquest_progress";
