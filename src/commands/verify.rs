//! `warren verify` command - replay a move sequence against a map

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::cli::Cli;
use warren_core::direction::{parse_moves, Direction};
use warren_core::error::{Result, WarrenError};
use warren_core::format::OutputFormat;
use warren_core::maze::{verify, VerifyReport};
use warren_core::world::{RoomId, World};

/// Execute the verify command
pub fn execute(
    cli: &Cli,
    map: &Path,
    moves: Option<&str>,
    moves_file: Option<&Path>,
    start: Option<RoomId>,
) -> Result<()> {
    let world = World::load(map)?;
    let start_room = start.unwrap_or_else(|| world.start_room());
    let moves = read_moves(moves, moves_file)?;

    let report = verify(&world, start_room, &moves)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        OutputFormat::Human => output_human(cli, &report),
    }

    // A failing replay is a data error: report first, then exit 3
    if !report.passed {
        return Err(WarrenError::IncompleteTraversal {
            unvisited: report.unvisited,
        });
    }
    Ok(())
}

fn read_moves(moves: Option<&str>, moves_file: Option<&Path>) -> Result<Vec<Direction>> {
    // clap rejects passing both MOVES and --moves-file
    let raw = if let Some(arg) = moves {
        arg.to_string()
    } else if let Some(path) = moves_file {
        if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(path)?
        }
    } else {
        return Err(WarrenError::UsageError(
            "no moves given: pass MOVES or --moves-file".to_string(),
        ));
    };
    parse_moves(&raw)
}

fn output_human(cli: &Cli, report: &VerifyReport) {
    if report.passed {
        println!(
            "all {} rooms visited in {} moves",
            report.rooms_visited, report.moves
        );
    } else {
        println!(
            "{} of {} rooms visited in {} moves",
            report.rooms_visited, report.rooms_total, report.moves
        );
        if !cli.quiet {
            let ids: Vec<String> = report.unvisited.iter().map(u32::to_string).collect();
            println!("unvisited: {}", ids.join(", "));
        }
    }
}
