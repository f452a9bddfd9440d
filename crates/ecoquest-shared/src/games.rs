//! The EcoQuest game catalogue.
//!
//! Nine mini-games, each identified by a kebab-case tag. The tag is what ends up
//! in persisted progress, so renaming a variant's tag orphans saved data.
//!
//! Pinned ordering for deterministic behavior:
//! WasteSorting, OceanCleanup, EcoWordle, EcoQuiz, BubbleShooter, MemoryMatch,
//! EnergySaver, TreePlanting, WaterConservation

use crate::error::EcoQuestError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier of one mini-game.
/// Order is pinned for deterministic serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameId {
    /// Drag items into the right recycling bin
    WasteSorting,
    /// Collect floating debris before it sinks
    OceanCleanup,
    /// Guess the environmental word of the day
    EcoWordle,
    /// Multiple-choice sustainability quiz
    EcoQuiz,
    /// Hex-grid bubble matcher
    BubbleShooter,
    /// Pair matching with eco facts
    MemoryMatch,
    /// Switch off wasteful appliances in time
    EnergySaver,
    /// Plant the right tree in the right soil
    TreePlanting,
    /// Fix leaks and pick water-saving habits
    WaterConservation,
}

impl GameId {
    /// Every game, in pinned order.
    pub const ALL: [GameId; 9] = [
        GameId::WasteSorting,
        GameId::OceanCleanup,
        GameId::EcoWordle,
        GameId::EcoQuiz,
        GameId::BubbleShooter,
        GameId::MemoryMatch,
        GameId::EnergySaver,
        GameId::TreePlanting,
        GameId::WaterConservation,
    ];

    /// Tag used in persisted progress and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::WasteSorting => "waste-sorting",
            Self::OceanCleanup => "ocean-cleanup",
            Self::EcoWordle => "eco-wordle",
            Self::EcoQuiz => "eco-quiz",
            Self::BubbleShooter => "bubble-shooter",
            Self::MemoryMatch => "memory-match",
            Self::EnergySaver => "energy-saver",
            Self::TreePlanting => "tree-planting",
            Self::WaterConservation => "water-conservation",
        }
    }

    /// Human-facing title
    pub fn title(&self) -> &'static str {
        match self {
            Self::WasteSorting => "Waste Sorting",
            Self::OceanCleanup => "Ocean Cleanup",
            Self::EcoWordle => "Eco Wordle",
            Self::EcoQuiz => "Eco Quiz",
            Self::BubbleShooter => "Bubble Shooter",
            Self::MemoryMatch => "Memory Match",
            Self::EnergySaver => "Energy Saver",
            Self::TreePlanting => "Tree Planting",
            Self::WaterConservation => "Water Conservation",
        }
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GameId {
    type Err = EcoQuestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        GameId::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == tag)
            .ok_or_else(|| EcoQuestError::UnknownGame(s.to_string()))
    }
}
