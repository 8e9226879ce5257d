//! CLI argument parsing for warren
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config. Subcommands load their map from a positional path.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};

use warren_core::error::WarrenError;
use warren_core::format::OutputFormat;
use warren_core::social::UserId;
use warren_core::world::RoomId;

/// Warren - maze traversal and graph exploration CLI
#[derive(Parser, Debug)]
#[command(name = "warren")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "human",
        value_parser = parse_format
    )]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a warren.toml configuration file
    #[arg(long, global = true, env = "WARREN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk a maze until every room has been visited
    Explore {
        /// Path to the JSON map file
        map: PathBuf,

        /// Starting room (default: smallest room id)
        #[arg(long)]
        start: Option<RoomId>,

        /// Safety bound multiplier over the room count
        #[arg(long, env = "WARREN_BOUND_FACTOR")]
        bound_factor: Option<u32>,

        /// Skip the independent replay check of the produced path
        #[arg(long)]
        no_check: bool,
    },

    /// Replay a move sequence and report room coverage
    Verify {
        /// Path to the JSON map file
        map: PathBuf,

        /// Moves as letters (e.g. "nnesw"); whitespace and commas ignored
        moves: Option<String>,

        /// Read moves from a file, or stdin with "-"
        #[arg(long, conflicts_with = "moves")]
        moves_file: Option<PathBuf>,

        /// Starting room (default: smallest room id)
        #[arg(long)]
        start: Option<RoomId>,
    },

    /// Render a map and its room/exit counts
    Show {
        /// Path to the JSON map file
        map: PathBuf,
    },

    /// Find a shortest route between two rooms
    Route {
        /// Path to the JSON map file
        map: PathBuf,

        /// Origin room id
        from: RoomId,

        /// Destination room id
        to: RoomId,
    },

    /// Populate a random social network and query friendship paths
    Social {
        /// Number of users to create
        #[arg(long)]
        users: Option<usize>,

        /// Average friendships per user
        #[arg(long)]
        avg_friendships: Option<usize>,

        /// Seed for the random population
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Print shortest friendship paths from this user
        #[arg(long)]
        from: Option<UserId>,
    },
}

/// clap value parser for the global `--format` flag
fn parse_format(s: &str) -> Result<OutputFormat, WarrenError> {
    OutputFormat::from_str(s)
}
