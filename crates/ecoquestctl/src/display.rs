//! Terminal rendering for ecoquestctl.
//!
//! Renderers return strings so commands can be tested without a terminal.

use ecoquest_shared::badges::{check_badges, format_badge_earned, format_badges, Badge};
use ecoquest_shared::{GameId, GameProgressRecord, GlobalStats, LevelOutcome, MAX_PLANT_STAGE};
use std::collections::BTreeSet;
use std::fmt::Write;

/// ANSI color codes using true color (24-bit)
pub mod colors {
    pub const HEADER: &str = "\x1b[38;2;120;220;140m";
    pub const OK: &str = "\x1b[38;2;120;255;120m";
    pub const WARN: &str = "\x1b[38;2;255;200;100m";
    pub const DIM: &str = "\x1b[38;2;140;140;140m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Horizontal rule
pub const HR: &str = "────────────────────────────────────────────────────────────";

/// Color switch threaded through every renderer
#[derive(Debug, Clone, Copy)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn plain() -> Self {
        Self { color: false }
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, colors::RESET)
        } else {
            text.to_string()
        }
    }

    fn header(&self, out: &mut String, title: &str) {
        let _ = writeln!(out, "{}", self.paint(colors::HEADER, title));
        let _ = writeln!(out, "{}", self.paint(colors::DIM, HR));
    }
}

/// Plant growth bar, e.g. "[##..] sapling"
pub fn plant_bar(rec: &GameProgressRecord) -> String {
    let filled = rec.plant_stage.min(MAX_PLANT_STAGE) as usize;
    let empty = MAX_PLANT_STAGE as usize - filled;
    format!("[{}{}] {}", "#".repeat(filled), ".".repeat(empty), rec.stage())
}

/// Per-game table plus totals
pub fn render_status(
    records: &[(GameId, GameProgressRecord)],
    stats: &GlobalStats,
    user: Option<&str>,
    style: Style,
) -> String {
    let mut out = String::new();
    style.header(&mut out, &format!("EcoQuest progress v{}", ecoquest_shared::VERSION));
    match user {
        Some(user) => {
            let _ = writeln!(out, "player  {}", user);
        }
        None => {
            let guest = style.paint(colors::WARN, "(guest, progress not saved)");
            let _ = writeln!(out, "player  {}", guest);
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "  {:20} {:>5} {:>5} {:>7}  {}",
        "Game", "Level", "Done", "Points", "Plant"
    );
    for (game, rec) in records {
        let _ = writeln!(
            out,
            "  {:20} {:>5} {:>5} {:>7}  {}",
            game.as_str(),
            rec.current_level,
            rec.levels_completed.len(),
            rec.total_points,
            plant_bar(rec)
        );
    }
    let _ = writeln!(out);
    out.push_str(&render_totals(stats, style));
    out
}

/// Global totals and earned badges
pub fn render_totals(stats: &GlobalStats, style: Style) -> String {
    let mut out = String::new();
    let kw = 18;
    let _ = writeln!(out, "{:kw$} {}", "total_points", stats.total_points, kw = kw);
    let _ = writeln!(
        out,
        "{:kw$} {}/{} ({:.0}%)",
        "trees_grown",
        stats.trees_grown,
        GameId::ALL.len(),
        stats.forest_ratio() * 100.0,
        kw = kw
    );
    let _ = writeln!(out, "{:kw$} {}", "levels_completed", stats.levels_completed, kw = kw);

    let badges = format_badges(&check_badges(stats), 6);
    if !badges.is_empty() {
        let _ = writeln!(out, "{:kw$} {}", "badges", style.paint(colors::OK, &badges), kw = kw);
    }
    out
}

/// One game in detail, listing which levels can be played
pub fn render_game(game: GameId, rec: &GameProgressRecord, style: Style) -> String {
    let mut out = String::new();
    style.header(&mut out, &format!("{} ({})", game.title(), game));

    let _ = writeln!(out, "current_level   {}", rec.current_level);
    let done: Vec<String> = rec.levels_completed.iter().map(|l| l.to_string()).collect();
    let _ = writeln!(
        out,
        "completed       {}",
        if done.is_empty() { "-".to_string() } else { done.join(", ") }
    );
    let _ = writeln!(out, "plant           {}", plant_bar(rec));
    let _ = writeln!(out, "total_points    {}", rec.total_points);
    let _ = writeln!(out);

    for level in playable_levels(rec) {
        let state = if rec.levels_completed.contains(&level) {
            style.paint(colors::OK, "completed")
        } else {
            style.paint(colors::BOLD, "unlocked")
        };
        let _ = writeln!(out, "  level {:>3}  {}", level, state);
    }
    out
}

/// Completed levels plus the levels they open, level 1 included.
/// Bounded by the number of completions, not by the level numbers.
fn playable_levels(rec: &GameProgressRecord) -> BTreeSet<u32> {
    let mut levels = BTreeSet::from([1]);
    for &level in &rec.levels_completed {
        levels.insert(level);
        levels.insert(level.saturating_add(1));
    }
    levels
}

/// Feedback after a level win
pub fn render_outcome(outcome: &LevelOutcome, new_badges: &[Badge], style: Style) -> String {
    let mut out = String::new();
    let verb = if outcome.first_completion { "completed" } else { "replayed" };
    let _ = writeln!(
        out,
        "{} {} level {} {} (+{} points)",
        style.paint(colors::OK, "✓"),
        outcome.game,
        outcome.level,
        verb,
        outcome.points_awarded
    );

    if outcome.stage_advanced {
        let _ = writeln!(
            out,
            "  your plant grew: {}",
            ecoquest_shared::PlantStage::from_stage(outcome.plant_stage)
        );
    }
    if outcome.unlocked_next {
        let _ = writeln!(out, "  level {} unlocked", outcome.level.saturating_add(1));
    }
    for badge in new_badges {
        let _ = writeln!(out, "  {}", style.paint(colors::OK, &format_badge_earned(badge)));
    }
    if !outcome.saved {
        let _ = writeln!(out, "  {}", style.paint(colors::DIM, "(progress not saved)"));
    }
    out
}

/// Game tags with titles
pub fn render_games() -> String {
    let mut out = String::new();
    for game in GameId::ALL {
        let _ = writeln!(out, "{:20} {}", game.as_str(), game.title());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(levels: &[u32], points: u64) -> GameProgressRecord {
        let mut rec = GameProgressRecord::default();
        for level in levels {
            rec.complete(*level, 0);
        }
        rec.total_points = points;
        rec
    }

    #[test]
    fn test_plant_bar() {
        assert_eq!(plant_bar(&GameProgressRecord::default()), "[....] seed");
        assert_eq!(plant_bar(&record(&[1, 2], 0)), "[##..] sapling");
        assert_eq!(plant_bar(&record(&[1, 2, 3, 4, 5], 0)), "[####] tree");
    }

    #[test]
    fn test_render_game_lists_levels() {
        let out = render_game(GameId::EcoWordle, &record(&[1], 20), Style::plain());
        assert!(out.contains("Eco Wordle (eco-wordle)"));
        assert!(out.contains("level   1  completed"));
        assert!(out.contains("level   2  unlocked"));
        assert!(!out.contains("level   3"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_render_game_skips_gaps() {
        let out = render_game(GameId::EcoQuiz, &record(&[1, 2, 7], 0), Style::plain());
        let rows: Vec<&str> = out.lines().filter(|l| l.starts_with("  level")).collect();
        assert_eq!(
            rows,
            vec![
                "  level   1  completed",
                "  level   2  completed",
                "  level   3  unlocked",
                "  level   7  completed",
                "  level   8  unlocked",
            ]
        );
    }

    #[test]
    fn test_render_game_huge_level() {
        let mut rec = GameProgressRecord::default();
        rec.complete(4_000_000_000, 0);
        rec.complete(u32::MAX, 0);
        let out = render_game(GameId::EcoQuiz, &rec, Style::plain());

        assert!(out.lines().count() < 20);
        assert!(out.contains("level   1  unlocked"));
        assert!(out.contains("level 4000000000  completed"));
        assert!(out.contains("level 4000000001  unlocked"));
        assert!(out.contains(&format!("level {}  completed", u32::MAX)));
    }

    #[test]
    fn test_render_status_guest() {
        let out = render_status(&[], &GlobalStats::default(), None, Style::plain());
        assert!(out.contains("guest"));
        assert!(out.contains("trees_grown"));
        assert!(!out.contains("badges"));
    }

    #[test]
    fn test_render_outcome_replay() {
        let outcome = LevelOutcome {
            game: GameId::OceanCleanup,
            level: 2,
            first_completion: false,
            points_awarded: 10,
            plant_stage: 2,
            stage_advanced: false,
            unlocked_next: true,
            saved: true,
        };
        let out = render_outcome(&outcome, &[], Style::plain());
        assert!(out.contains("ocean-cleanup level 2 replayed (+10 points)"));
        assert!(out.contains("level 3 unlocked"));
        assert!(!out.contains("not saved"));
    }

    #[test]
    fn test_color_toggle() {
        let games = render_games();
        assert!(games.contains("water-conservation"));
        let style = Style { color: true };
        assert!(style.paint(colors::OK, "x").starts_with('\x1b'));
    }
}
