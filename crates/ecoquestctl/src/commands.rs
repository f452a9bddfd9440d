//! Command handlers for ecoquestctl.
//!
//! Each handler works on an already-open store and returns the text to print
//! plus an exit code, so the same code path runs in tests.

use crate::cli::{Cli, Commands};
use crate::display::{self, Style};
use crate::errors::{EXIT_LOCKED, EXIT_NOT_CONFIRMED, EXIT_SUCCESS};
use anyhow::{Context, Result};
use ecoquest_shared::badges::{earned_badges, newly_earned};
use ecoquest_shared::{EcoQuestConfig, FileSlotStorage, GameId, ProgressionStore, SlotStorage};
use serde::Serialize;
use tracing::{debug, info};

/// Text for stdout and the process exit code
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub text: String,
    pub code: i32,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self { text, code: EXIT_SUCCESS }
    }
}

#[derive(Serialize)]
struct StatsReport<'a> {
    #[serde(flatten)]
    stats: ecoquest_shared::GlobalStats,
    badges: Vec<&'a str>,
}

/// Open the user's file-backed store as configured
pub fn open_store(
    config: &EcoQuestConfig,
    user: Option<&str>,
) -> ProgressionStore<FileSlotStorage> {
    let storage = FileSlotStorage::new(config.data_dir());
    debug!("Progress slots in {}", storage.dir().display());
    ProgressionStore::open_with_prefix(storage, user, &config.storage.key_prefix)
}

/// Run a parsed command against the store
pub fn execute<S: SlotStorage>(
    store: &mut ProgressionStore<S>,
    command: &Commands,
    style: Style,
) -> Result<CommandOutput> {
    let output = match command {
        Commands::Status => {
            let records: Vec<_> =
                GameId::ALL.iter().map(|g| (*g, store.get_progress(*g))).collect();
            CommandOutput::ok(display::render_status(
                &records,
                &store.get_global_stats(),
                store.user_id(),
                style,
            ))
        }

        Commands::Show { game, json } => {
            let rec = store.get_progress(*game);
            if *json {
                let body = serde_json::to_string_pretty(&rec).context("Failed to encode record")?;
                CommandOutput::ok(body + "\n")
            } else {
                CommandOutput::ok(display::render_game(*game, &rec, style))
            }
        }

        Commands::Complete { game, level, points, json } => {
            let before = store.get_global_stats();
            let outcome = store.complete_level(*game, *level, *points);
            let badges = newly_earned(&before, &store.get_global_stats());
            info!("{} level {} reported (+{} points)", game, level, points);

            if *json {
                let body =
                    serde_json::to_string_pretty(&outcome).context("Failed to encode outcome")?;
                CommandOutput::ok(body + "\n")
            } else {
                CommandOutput::ok(display::render_outcome(&outcome, &badges, style))
            }
        }

        Commands::Unlocked { game, level } => {
            let unlocked = store.is_unlocked(*game, *level);
            CommandOutput {
                text: format!("{}\n", unlocked),
                code: if unlocked { EXIT_SUCCESS } else { EXIT_LOCKED },
            }
        }

        Commands::Stats { json } => {
            let stats = store.get_global_stats();
            if *json {
                let badges = earned_badges(&stats);
                let report = StatsReport {
                    stats,
                    badges: badges.iter().map(|b| b.id).collect(),
                };
                let body =
                    serde_json::to_string_pretty(&report).context("Failed to encode stats")?;
                CommandOutput::ok(body + "\n")
            } else {
                CommandOutput::ok(display::render_totals(&stats, style))
            }
        }

        Commands::Reset { yes } => {
            if !*yes {
                CommandOutput {
                    text: "Refusing to reset without --yes\n".to_string(),
                    code: EXIT_NOT_CONFIRMED,
                }
            } else {
                store.reset_progress();
                CommandOutput::ok("Progress reset\n".to_string())
            }
        }

        Commands::Games => CommandOutput::ok(display::render_games()),
    };
    Ok(output)
}

/// Entry point used by main: load config, start logging, open the store, run
pub fn run(cli: &Cli) -> Result<CommandOutput> {
    let config =
        EcoQuestConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    crate::logging::init(&config.logging.level);

    let mut store = open_store(&config, cli.user.as_deref());
    let style = Style {
        color: !cli.no_color && std::io::IsTerminal::is_terminal(&std::io::stdout()),
    };
    execute(&mut store, &cli.command, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecoquest_shared::MemorySlotStorage;

    fn store() -> ProgressionStore<MemorySlotStorage> {
        ProgressionStore::open(MemorySlotStorage::new(), Some("tester"))
    }

    #[test]
    fn test_complete_then_unlocked() {
        let mut store = store();
        let out = execute(
            &mut store,
            &Commands::Complete { game: GameId::EcoWordle, level: 1, points: 20, json: false },
            Style::plain(),
        )
        .unwrap();
        assert_eq!(out.code, EXIT_SUCCESS);
        assert!(out.text.contains("eco-wordle level 1 completed (+20 points)"));
        assert!(out.text.contains("Badge earned: First Steps"));

        let check = |level| Commands::Unlocked { game: GameId::EcoWordle, level };
        let yes = execute(&mut store, &check(2), Style::plain()).unwrap();
        assert_eq!(yes, CommandOutput { text: "true\n".to_string(), code: EXIT_SUCCESS });

        let no = execute(&mut store, &check(3), Style::plain()).unwrap();
        assert_eq!(no.code, EXIT_LOCKED);
    }

    #[test]
    fn test_complete_json() {
        let mut store = store();
        let out = execute(
            &mut store,
            &Commands::Complete { game: GameId::EcoQuiz, level: 1, points: 5, json: true },
            Style::plain(),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out.text).unwrap();
        assert_eq!(value["game"], "eco-quiz");
        assert_eq!(value["first_completion"], true);
        assert_eq!(value["saved"], true);
    }

    #[test]
    fn test_stats_json() {
        let mut store = store();
        for level in 1..=4 {
            store.complete_level(GameId::OceanCleanup, level, 30);
        }
        let out = execute(&mut store, &Commands::Stats { json: true }, Style::plain()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out.text).unwrap();
        assert_eq!(value["total_points"], 120);
        assert_eq!(value["trees_grown"], 1);
        assert_eq!(value["levels_completed"], 4);
        let badges = value["badges"].as_array().unwrap();
        assert!(badges.iter().any(|b| b == "first_tree"));
        assert!(badges.iter().any(|b| b == "points_100"));
    }

    #[test]
    fn test_reset_requires_confirmation() {
        let mut store = store();
        store.complete_level(GameId::EnergySaver, 1, 10);

        let refused = execute(&mut store, &Commands::Reset { yes: false }, Style::plain()).unwrap();
        assert_eq!(refused.code, EXIT_NOT_CONFIRMED);
        assert_eq!(store.get_progress(GameId::EnergySaver).total_points, 10);

        let done = execute(&mut store, &Commands::Reset { yes: true }, Style::plain()).unwrap();
        assert_eq!(done.code, EXIT_SUCCESS);
        assert!(store.get_progress(GameId::EnergySaver).is_default());
        assert!(store.storage().is_empty());
    }

    #[test]
    fn test_status_lists_every_game() {
        let mut store = store();
        let out = execute(&mut store, &Commands::Status, Style::plain()).unwrap();
        for game in GameId::ALL {
            assert!(out.text.contains(game.as_str()));
        }
        assert!(out.text.contains("player  tester"));
    }
}
