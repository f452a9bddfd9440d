//! Per-game progression record.
//!
//! One record per (user, game). Field names are camelCase on the wire so the
//! persisted slot reads as a JSON object of JSON objects.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Highest plant stage; a game at this stage has grown a tree.
pub const MAX_PLANT_STAGE: u8 = 4;

/// Progression state of one game for one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameProgressRecord {
    /// Highest level the player may currently attempt (>= 1)
    pub current_level: u32,
    /// Levels won at least once
    pub levels_completed: BTreeSet<u32>,
    /// Cached `min(4, levels_completed.len())`
    pub plant_stage: u8,
    /// Points accumulated over every completion, replays included
    pub total_points: u64,
}

impl Default for GameProgressRecord {
    fn default() -> Self {
        Self {
            current_level: 1,
            levels_completed: BTreeSet::new(),
            plant_stage: 0,
            total_points: 0,
        }
    }
}

impl GameProgressRecord {
    /// Level 1 is always open; any other level opens once its predecessor is
    /// completed. Earlier levels are not checked.
    pub fn is_unlocked(&self, level: u32) -> bool {
        if level == 1 {
            return true;
        }
        match level.checked_sub(1) {
            Some(prev) => self.levels_completed.contains(&prev),
            None => false,
        }
    }

    /// Apply one level win. Returns true the first time `level` is completed.
    pub fn complete(&mut self, level: u32, points_earned: u64) -> bool {
        let first = self.levels_completed.insert(level);
        self.current_level = self.current_level.max(level.saturating_add(1));
        self.plant_stage = stage_for(self.levels_completed.len());
        self.total_points = self.total_points.saturating_add(points_earned);
        first
    }

    pub fn is_tree(&self) -> bool {
        self.plant_stage == MAX_PLANT_STAGE
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Restore invariants on a record read back from storage
    pub fn normalize(&mut self) {
        self.current_level = self.current_level.max(1);
        self.plant_stage = stage_for(self.levels_completed.len());
    }

    pub fn stage(&self) -> PlantStage {
        PlantStage::from_stage(self.plant_stage)
    }
}

/// Plant stage for a number of distinct completed levels
pub fn stage_for(completed: usize) -> u8 {
    completed.min(MAX_PLANT_STAGE as usize) as u8
}

/// Named growth stages shown next to each game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantStage {
    Seed,
    Sprout,
    Sapling,
    YoungTree,
    Tree,
}

impl PlantStage {
    pub fn from_stage(stage: u8) -> Self {
        match stage {
            0 => Self::Seed,
            1 => Self::Sprout,
            2 => Self::Sapling,
            3 => Self::YoungTree,
            _ => Self::Tree,
        }
    }
}

impl std::fmt::Display for PlantStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Seed => "seed",
            Self::Sprout => "sprout",
            Self::Sapling => "sapling",
            Self::YoungTree => "young tree",
            Self::Tree => "tree",
        };
        write!(f, "{}", s)
    }
}
