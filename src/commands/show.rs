//! `warren show` command - render a map

use std::path::Path;

use crate::cli::Cli;
use warren_core::error::Result;
use warren_core::format::OutputFormat;
use warren_core::world::World;

/// Execute the show command
pub fn execute(cli: &Cli, map: &Path) -> Result<()> {
    let world = World::load(map)?;

    match cli.format {
        OutputFormat::Json => output_json(&world),
        OutputFormat::Human => {
            println!("{}", world.render());
            if !cli.quiet {
                println!("{} rooms, {} exits", world.room_count(), world.exit_count());
            }
        }
    }
    Ok(())
}

fn output_json(world: &World) {
    let rooms: Vec<serde_json::Value> = world
        .rooms()
        .map(|(id, room)| {
            serde_json::json!({
                "id": id,
                "pos": room.pos,
                "exits": room.exits,
            })
        })
        .collect();
    println!(
        "{}",
        serde_json::json!({
            "room_count": world.room_count(),
            "exit_count": world.exit_count(),
            "rooms": rooms,
        })
    );
}
