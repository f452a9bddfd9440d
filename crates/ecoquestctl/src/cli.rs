//! Command-line surface for ecoquestctl.

use clap::{Parser, Subcommand};
use ecoquest_shared::GameId;
use std::path::PathBuf;

// Version is embedded at build time
const VERSION: &str = env!("ECOQUEST_VERSION");

#[derive(Parser, Debug)]
#[command(name = "ecoquestctl")]
#[command(about = "EcoQuest - level progression for the nine eco mini-games", long_about = None)]
#[command(version = VERSION)]
pub struct Cli {
    /// Config file (defaults to the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Player whose progress to use; without one, progress is not saved
    #[arg(long, global = true, env = "ECOQUEST_USER")]
    pub user: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Per-game progress table and totals
    Status,

    /// Progress and unlocked levels for one game
    Show {
        /// Game tag, e.g. eco-wordle
        game: GameId,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Report a level win
    Complete {
        /// Game tag, e.g. ocean-cleanup
        game: GameId,

        /// Level that was won (1-based)
        level: u32,

        /// Points earned for this win
        #[arg(long, default_value_t = 0)]
        points: u64,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check whether a level may be played (exit code 0 = yes, 1 = no)
    Unlocked {
        game: GameId,
        level: u32,
    },

    /// Totals and badges across all games
    Stats {
        /// Print totals as JSON
        #[arg(long)]
        json: bool,
    },

    /// Forget all progress for the user
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// List game tags
    Games,
}
