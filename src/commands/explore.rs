//! `warren explore` command - complete maze traversal

use std::path::Path;
use std::time::Instant;

use crate::cli::Cli;
use warren_core::config::Config;
use warren_core::error::{Result, WarrenError};
use warren_core::format::OutputFormat;
use warren_core::maze::{explore, verify, ExploreOptions, Traversal};
use warren_core::world::{RoomId, World};

/// Execute the explore command
pub fn execute(
    cli: &Cli,
    config: &Config,
    map: &Path,
    start: Option<RoomId>,
    bound_factor: Option<u32>,
    no_check: bool,
) -> Result<()> {
    let phase = Instant::now();
    let world = World::load(map)?;
    tracing::debug!(elapsed = ?phase.elapsed(), "load_map");

    let start_room = start.unwrap_or_else(|| world.start_room());
    let opts = ExploreOptions {
        bound_factor: bound_factor.unwrap_or(config.explore.bound_factor),
    };

    let phase = Instant::now();
    let traversal = explore(&world, start_room, &opts)?;
    tracing::debug!(elapsed = ?phase.elapsed(), "explore");

    // Independent replay of the produced path; a mismatch means the
    // engine is wrong, so it is a hard error rather than a report line.
    let checked = if no_check {
        false
    } else {
        let report = verify(&world, start_room, &traversal.moves)?;
        if !report.passed {
            return Err(WarrenError::IncompleteTraversal {
                unvisited: report.unvisited,
            });
        }
        true
    };

    match cli.format {
        OutputFormat::Json => output_json(&traversal, checked),
        OutputFormat::Human => output_human(cli, &traversal, checked),
    }

    Ok(())
}

fn output_json(traversal: &Traversal, checked: bool) {
    println!(
        "{}",
        serde_json::json!({
            "start": traversal.start,
            "moves": traversal.moves_string(),
            "move_count": traversal.moves.len(),
            "rooms_visited": traversal.rooms_visited,
            "frontier_advances": traversal.frontier_advances,
            "backtracks": traversal.backtracks,
            "checked": checked,
        })
    );
}

fn output_human(cli: &Cli, traversal: &Traversal, checked: bool) {
    println!("{}", traversal.moves_string());
    if cli.quiet {
        return;
    }
    println!(
        "all {} rooms visited in {} moves ({} advances, {} backtracks)",
        traversal.rooms_visited,
        traversal.moves.len(),
        traversal.frontier_advances,
        traversal.backtracks
    );
    if checked {
        println!("replay check: ok");
    }
}
