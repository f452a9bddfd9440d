//! Eco badges earned from cross-game progress.
//!
//! Badges are never stored: they are re-evaluated from `GlobalStats` whenever
//! they are shown, so resetting progress also takes them away.

use crate::games::GameId;
use crate::stats::GlobalStats;
use serde::Serialize;

/// Badge with ASCII symbol and description
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Badge {
    /// Unique identifier
    pub id: &'static str,
    /// ASCII badge symbol (e.g., "[1]", "{T}")
    pub badge: &'static str,
    /// Short name
    pub name: &'static str,
    /// Description of how to earn it
    pub description: &'static str,
    /// Whether it's been earned
    pub earned: bool,
}

impl Badge {
    const fn new(
        id: &'static str,
        badge: &'static str,
        name: &'static str,
        desc: &'static str,
    ) -> Self {
        Self { id, badge, name, description: desc, earned: false }
    }
}

/// All available badges
pub fn all_badges() -> Vec<Badge> {
    vec![
        // Level milestones
        Badge::new("first_level", "[1]", "First Steps", "Complete any level"),
        Badge::new("ten_levels", "[10]", "Eco Explorer", "Complete 10 levels across all games"),
        Badge::new("all_games", "[9g]", "Well-Rounded", "Complete a level in every game"),

        // Growth
        Badge::new("first_tree", "{T}", "Green Thumb", "Grow a tree in any game"),
        Badge::new("three_trees", "{TTT}", "Grove Keeper", "Grow trees in 3 games"),
        Badge::new("forest", "{*T*}", "Forest Guardian", "Grow a tree in every game"),

        // Points
        Badge::new("points_100", "<100>", "Seed Saver", "Earn 100 points"),
        Badge::new("points_500", "<500>", "Planet Helper", "Earn 500 points"),
        Badge::new("points_1000", "<1k>", "Earth Champion", "Earn 1000 points"),
    ]
}

/// Evaluate every badge against the stats
pub fn check_badges(stats: &GlobalStats) -> Vec<Badge> {
    let mut badges = all_badges();
    for badge in &mut badges {
        badge.earned = is_earned(badge.id, stats);
    }
    badges
}

/// Only the earned badges
pub fn earned_badges(stats: &GlobalStats) -> Vec<Badge> {
    check_badges(stats).into_iter().filter(|b| b.earned).collect()
}

/// Badges earned by `after` but not by `before` (for notifications)
pub fn newly_earned(before: &GlobalStats, after: &GlobalStats) -> Vec<Badge> {
    let old: Vec<_> = earned_badges(before).iter().map(|b| b.id).collect();
    earned_badges(after)
        .into_iter()
        .filter(|b| !old.contains(&b.id))
        .collect()
}

fn is_earned(id: &str, stats: &GlobalStats) -> bool {
    let games = GameId::ALL.len();
    match id {
        "first_level" => stats.levels_completed >= 1,
        "ten_levels" => stats.levels_completed >= 10,
        "all_games" => stats.games_played >= games,

        "first_tree" => stats.trees_grown >= 1,
        "three_trees" => stats.trees_grown >= 3,
        "forest" => stats.trees_grown >= games,

        "points_100" => stats.total_points >= 100,
        "points_500" => stats.total_points >= 500,
        "points_1000" => stats.total_points >= 1000,

        _ => false,
    }
}

/// Earned badges on one line, capped at `max_display`
pub fn format_badges(badges: &[Badge], max_display: usize) -> String {
    let earned: Vec<_> = badges.iter().filter(|b| b.earned).collect();
    if earned.is_empty() {
        return String::new();
    }

    let shown: String = earned
        .iter()
        .take(max_display)
        .map(|b| b.badge)
        .collect::<Vec<_>>()
        .join(" ");

    if earned.len() > max_display {
        format!("{} +{} more", shown, earned.len() - max_display)
    } else {
        shown
    }
}

pub fn format_badge_earned(badge: &Badge) -> String {
    format!("{} Badge earned: {} - {}", badge.badge, badge.name, badge.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(points: u64, trees: usize, levels: usize, played: usize) -> GlobalStats {
        GlobalStats {
            total_points: points,
            trees_grown: trees,
            levels_completed: levels,
            games_played: played,
        }
    }

    #[test]
    fn test_nothing_earned_at_start() {
        assert!(earned_badges(&GlobalStats::default()).is_empty());
        assert_eq!(format_badges(&check_badges(&GlobalStats::default()), 5), "");
    }

    #[test]
    fn test_first_tree() {
        let badges = check_badges(&stats(40, 1, 4, 1));
        let tree = badges.iter().find(|b| b.id == "first_tree").unwrap();
        assert!(tree.earned);
        assert_eq!(tree.badge, "{T}");
        assert!(!badges.iter().find(|b| b.id == "forest").unwrap().earned);
    }

    #[test]
    fn test_newly_earned() {
        let before = stats(90, 0, 3, 1);
        let after = stats(110, 1, 4, 1);
        let ids: Vec<_> = newly_earned(&before, &after).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["first_tree", "points_100"]);
    }

    #[test]
    fn test_format_caps_display() {
        let badges = check_badges(&stats(1000, 9, 36, 9));
        assert_eq!(earned_badges(&stats(1000, 9, 36, 9)).len(), 9);
        let line = format_badges(&badges, 3);
        assert!(line.starts_with("[1] [10] [9g]"));
        assert!(line.ends_with("+6 more"));
    }
}
