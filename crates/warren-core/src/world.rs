//! World (room graph) representation for warren
//!
//! A world is a static mapping from room id to a record of
//! `(grid position, direction -> neighbor id)`. Map files carry the same
//! shape as JSON:
//!
//! ```json
//! {
//!   "0": [[3, 5], {"n": 1}],
//!   "1": [[3, 6], {"s": 0, "n": 2}]
//! }
//! ```
//!
//! The position payload is only used by the ASCII renderer; traversal
//! reads the exit mapping. Worlds are immutable once loaded.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::direction::Direction;
use crate::error::{Result, WarrenError};

/// Identifier of a room, unique within a world
pub type RoomId = u32;

/// A single room: grid position plus labeled exits
#[derive(Debug, Clone, Serialize)]
pub struct Room {
    /// Grid position used by the renderer
    pub pos: (i64, i64),
    /// Outgoing exits, at most one per direction
    pub exits: BTreeMap<Direction, RoomId>,
}

/// An immutable room graph
#[derive(Debug, Clone, Serialize)]
pub struct World {
    rooms: BTreeMap<RoomId, Room>,
}

/// Wire shape of one room record: `[[x, y], {"n": 1, ...}]`
type RawRoom = ((i64, i64), BTreeMap<String, RoomId>);

impl World {
    /// Load a world from a JSON map file
    pub fn load(path: &Path) -> Result<World> {
        if !path.exists() {
            return Err(WarrenError::MapNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)?;
        let world = parse_json(&content).map_err(|reason| WarrenError::InvalidMap {
            path: path.to_path_buf(),
            reason,
        })?;
        tracing::debug!(path = %path.display(), rooms = world.room_count(), "loaded map");
        Ok(world)
    }

    /// Parse a world from a JSON string
    pub fn from_json(json: &str) -> Result<World> {
        parse_json(json).map_err(|reason| WarrenError::InvalidMap {
            path: PathBuf::from("<string>"),
            reason,
        })
    }

    /// Exits of a room, keyed by direction
    pub fn neighbors(&self, room: RoomId) -> Result<&BTreeMap<Direction, RoomId>> {
        self.rooms
            .get(&room)
            .map(|r| &r.exits)
            .ok_or(WarrenError::RoomNotFound { id: room })
    }

    /// Follow one exit; `ExitNotFound` when the room has no such exit
    pub fn step(&self, room: RoomId, direction: Direction) -> Result<RoomId> {
        self.neighbors(room)?
            .get(&direction)
            .copied()
            .ok_or_else(|| WarrenError::ExitNotFound {
                room,
                direction: direction.to_string(),
            })
    }

    /// Whether the world contains a room
    pub fn contains(&self, room: RoomId) -> bool {
        self.rooms.contains_key(&room)
    }

    /// Total number of rooms
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Default starting room: the smallest room id
    pub fn start_room(&self) -> RoomId {
        self.rooms.keys().next().copied().unwrap_or_default()
    }

    /// Iterate rooms in ascending id order
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &Room)> {
        self.rooms.iter().map(|(&id, room)| (id, room))
    }

    /// Total number of exits across all rooms
    pub fn exit_count(&self) -> usize {
        self.rooms.values().map(|r| r.exits.len()).sum()
    }

    /// Render the maze as an ASCII grid from the room positions.
    ///
    /// Each room is a 5-wide cell between `#` separators; `|` and `-`
    /// mark exit openings, room ids are zero-filled to three digits.
    pub fn render(&self) -> String {
        let mut by_row: BTreeMap<i64, BTreeMap<i64, &Room>> = BTreeMap::new();
        let mut ids: BTreeMap<(i64, i64), RoomId> = BTreeMap::new();
        for (&id, room) in &self.rooms {
            by_row.entry(room.pos.1).or_default().insert(room.pos.0, room);
            ids.insert(room.pos, id);
        }
        let min_x = self.rooms.values().map(|r| r.pos.0).min().unwrap_or(0);
        let max_x = self.rooms.values().map(|r| r.pos.0).max().unwrap_or(0);
        let line_width = (max_x - min_x + 1) as usize * 6 + 1;

        let mut out = String::new();
        out.push_str(&"#".repeat(line_width));
        out.push('\n');
        for (&y, row) in by_row.iter().rev() {
            let mut north = String::from("#");
            let mut mid = String::from("#");
            let mut south = String::from("#");
            for x in min_x..=max_x {
                match row.get(&x) {
                    Some(room) => {
                        let id = ids.get(&(x, y)).copied().unwrap_or_default();
                        north.push_str(wall(room, Direction::North));
                        mid.push(if room.exits.contains_key(&Direction::West) {
                            '-'
                        } else {
                            ' '
                        });
                        mid.push_str(&format!("{:03}", id));
                        mid.push(if room.exits.contains_key(&Direction::East) {
                            '-'
                        } else {
                            ' '
                        });
                        south.push_str(wall(room, Direction::South));
                    }
                    None => {
                        north.push_str("     ");
                        mid.push_str("     ");
                        south.push_str("     ");
                    }
                }
                north.push('#');
                mid.push('#');
                south.push('#');
            }
            for line in [north, mid, south] {
                out.push_str(&line);
                out.push('\n');
            }
        }
        out.push_str(&"#".repeat(line_width));
        out
    }
}

fn wall(room: &Room, direction: Direction) -> &'static str {
    if room.exits.contains_key(&direction) {
        "  |  "
    } else {
        "     "
    }
}

fn parse_json(json: &str) -> std::result::Result<World, String> {
    let raw: BTreeMap<RoomId, RawRoom> =
        serde_json::from_str(json).map_err(|e| e.to_string())?;

    if raw.is_empty() {
        return Err("map contains no rooms".to_string());
    }

    let mut rooms: BTreeMap<RoomId, Room> = BTreeMap::new();
    for (id, (pos, raw_exits)) in &raw {
        let mut exits = BTreeMap::new();
        for (label, &dest) in raw_exits {
            let direction: Direction = label
                .parse()
                .map_err(|_| format!("room {}: unknown direction '{}'", id, label))?;
            if exits.insert(direction, dest).is_some() {
                return Err(format!("room {}: duplicate exit '{}'", id, direction));
            }
        }
        rooms.insert(*id, Room { pos: *pos, exits });
    }

    // Every exit must land on a room in the map
    for (id, room) in &rooms {
        for (direction, dest) in &room.exits {
            if !rooms.contains_key(dest) {
                return Err(format!(
                    "room {}: exit '{}' points to unknown room {}",
                    id, direction, dest
                ));
            }
        }
    }

    Ok(World { rooms })
}
