//! `warren route` command - shortest route between two rooms

use std::path::Path;

use crate::cli::Cli;
use warren_core::error::Result;
use warren_core::format::OutputFormat;
use warren_core::maze::route;
use warren_core::world::{RoomId, World};

/// Execute the route command
pub fn execute(cli: &Cli, map: &Path, from: RoomId, to: RoomId) -> Result<()> {
    let world = World::load(map)?;
    let route = route(&world, from, to)?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&route)?),
        OutputFormat::Human => {
            if route.found {
                let chain: Vec<String> = route.rooms.iter().map(u32::to_string).collect();
                println!("{}", chain.join(" -> "));
                if !cli.quiet && !route.moves.is_empty() {
                    println!("moves: {}", route.moves_string());
                }
            } else {
                println!("no route found");
            }
        }
    }
    Ok(())
}
