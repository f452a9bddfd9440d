//! Cross-game aggregates over one user's progression.

use crate::games::GameId;
use crate::progress::GameProgressRecord;
use serde::{Deserialize, Serialize};

/// Totals across every game of one user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalStats {
    /// Sum of per-game total points
    pub total_points: u64,
    /// Games whose plant reached the final stage
    pub trees_grown: usize,
    /// Sum of distinct completed levels over all games
    pub levels_completed: usize,
    /// Games with at least one completed level
    #[serde(default)]
    pub games_played: usize,
}

impl GlobalStats {
    /// Fold per-game records into totals
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = (GameId, &'a GameProgressRecord)>,
    {
        let mut stats = Self::default();
        for (_, rec) in records {
            stats.total_points = stats.total_points.saturating_add(rec.total_points);
            stats.levels_completed += rec.levels_completed.len();
            if rec.is_tree() {
                stats.trees_grown += 1;
            }
            if !rec.levels_completed.is_empty() {
                stats.games_played += 1;
            }
        }
        stats
    }

    /// Fraction of the catalogue grown into trees (0.0-1.0)
    pub fn forest_ratio(&self) -> f32 {
        self.trees_grown as f32 / GameId::ALL.len() as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_stats() {
        let stats = GlobalStats::from_records(std::iter::empty());
        assert_eq!(stats, GlobalStats::default());
        assert_eq!(stats.forest_ratio(), 0.0);
    }

    #[test]
    fn test_fold_records() {
        let mut a = GameProgressRecord::default();
        for level in 1..=4 {
            a.complete(level, 10);
        }
        let mut b = GameProgressRecord::default();
        b.complete(1, 7);
        b.complete(1, 7);
        let c = GameProgressRecord::default();

        let stats = GlobalStats::from_records(vec![
            (GameId::OceanCleanup, &a),
            (GameId::EcoQuiz, &b),
            (GameId::MemoryMatch, &c),
        ]);
        assert_eq!(stats.total_points, 54);
        assert_eq!(stats.trees_grown, 1);
        assert_eq!(stats.levels_completed, 5);
        assert_eq!(stats.games_played, 2);
    }
}
