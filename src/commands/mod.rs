//! Command dispatch for warren

pub mod explore;
pub mod route;
pub mod show;
pub mod social;
pub mod verify;

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::{Cli, Commands};
use warren_core::config::Config;
use warren_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = load_config(cli)?;
    tracing::debug!(elapsed = ?start.elapsed(), "load_config");

    match &cli.command {
        Commands::Explore {
            map,
            start: start_room,
            bound_factor,
            no_check,
        } => explore::execute(cli, &config, map, *start_room, *bound_factor, *no_check),

        Commands::Verify {
            map,
            moves,
            moves_file,
            start: start_room,
        } => verify::execute(cli, map, moves.as_deref(), moves_file.as_deref(), *start_room),

        Commands::Show { map } => show::execute(cli, map),

        Commands::Route { map, from, to } => route::execute(cli, map, *from, *to),

        Commands::Social {
            users,
            avg_friendships,
            seed,
            from,
        } => social::execute(cli, &config, *users, *avg_friendships, *seed, *from),
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load(path),
        None => {
            let cwd = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            Config::discover(&cwd)
        }
    }
}
