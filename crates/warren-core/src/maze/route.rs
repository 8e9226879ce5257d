//! Shortest route between two rooms
//!
//! Breadth-first search with a predecessor map; exits expand in
//! `Direction::PRIORITY` order so the chosen route is deterministic when
//! several shortest routes exist.

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;

use crate::direction::{format_moves, Direction};
use crate::error::{Result, WarrenError};
use crate::world::{RoomId, World};

/// A shortest route between two rooms
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    /// Whether a route exists
    pub found: bool,
    /// Rooms along the route, from origin to destination inclusive
    pub rooms: Vec<RoomId>,
    /// Moves taken between consecutive rooms
    pub moves: Vec<Direction>,
}

impl Route {
    /// Moves as a compact letter string
    pub fn moves_string(&self) -> String {
        format_moves(&self.moves)
    }
}

/// Find a shortest route from `from` to `to`.
///
/// An unreachable destination is `found: false`, not an error; only
/// unknown endpoints fail.
#[tracing::instrument(skip(world), fields(from = from, to = to))]
pub fn route(world: &World, from: RoomId, to: RoomId) -> Result<Route> {
    if !world.contains(from) {
        return Err(WarrenError::RoomNotFound { id: from });
    }
    if !world.contains(to) {
        return Err(WarrenError::RoomNotFound { id: to });
    }

    if from == to {
        return Ok(Route {
            found: true,
            rooms: vec![from],
            moves: Vec::new(),
        });
    }

    let mut predecessors: HashMap<RoomId, (RoomId, Direction)> = HashMap::new();
    let mut visited: HashSet<RoomId> = HashSet::from([from]);
    let mut queue: VecDeque<RoomId> = VecDeque::from([from]);

    'search: while let Some(current) = queue.pop_front() {
        let exits = world.neighbors(current)?;
        for direction in Direction::PRIORITY {
            if let Some(&dest) = exits.get(&direction) {
                if visited.insert(dest) {
                    predecessors.insert(dest, (current, direction));
                    if dest == to {
                        break 'search;
                    }
                    queue.push_back(dest);
                }
            }
        }
    }

    if !predecessors.contains_key(&to) {
        return Ok(Route {
            found: false,
            rooms: Vec::new(),
            moves: Vec::new(),
        });
    }

    // Walk predecessors back from the destination, then reverse
    let mut rooms = vec![to];
    let mut moves = Vec::new();
    let mut current = to;
    while current != from {
        let &(pred, direction) = &predecessors[&current];
        rooms.push(pred);
        moves.push(direction);
        current = pred;
    }
    rooms.reverse();
    moves.reverse();

    Ok(Route {
        found: true,
        rooms,
        moves,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQUARE: &str = r#"{
        "0": [[0, 0], {"n": 1, "e": 3}],
        "1": [[0, 1], {"s": 0, "e": 2}],
        "2": [[1, 1], {"w": 1, "s": 3}],
        "3": [[1, 0], {"n": 2, "w": 0}]
    }"#;

    #[test]
    fn test_route_to_self() {
        let world = World::from_json(SQUARE).unwrap();
        let r = route(&world, 2, 2).unwrap();
        assert!(r.found);
        assert_eq!(r.rooms, vec![2]);
        assert!(r.moves.is_empty());
    }

    #[test]
    fn test_shortest_route_on_square() {
        let world = World::from_json(SQUARE).unwrap();
        let r = route(&world, 0, 2).unwrap();
        assert!(r.found);
        assert_eq!(r.rooms.len(), 3);
        assert_eq!(r.moves.len(), 2);
        // north beats east in priority, so the route goes through room 1
        assert_eq!(r.rooms, vec![0, 1, 2]);
        assert_eq!(r.moves_string(), "ne");
    }

    #[test]
    fn test_adjacent_rooms() {
        let world = World::from_json(SQUARE).unwrap();
        let r = route(&world, 0, 3).unwrap();
        assert_eq!(r.rooms, vec![0, 3]);
        assert_eq!(r.moves_string(), "e");
    }

    #[test]
    fn test_unreachable_destination_not_an_error() {
        let json = r#"{
            "0": [[0, 0], {"n": 1}],
            "1": [[0, 1], {"s": 0}],
            "9": [[5, 5], {}]
        }"#;
        let world = World::from_json(json).unwrap();
        let r = route(&world, 0, 9).unwrap();
        assert!(!r.found);
        assert!(r.rooms.is_empty());
        assert!(r.moves.is_empty());
    }

    #[test]
    fn test_unknown_endpoints() {
        let world = World::from_json(SQUARE).unwrap();
        assert!(matches!(
            route(&world, 42, 0),
            Err(WarrenError::RoomNotFound { id: 42 })
        ));
        assert!(matches!(
            route(&world, 0, 42),
            Err(WarrenError::RoomNotFound { id: 42 })
        ));
    }

    #[test]
    fn test_deterministic_route() {
        let world = World::from_json(SQUARE).unwrap();
        let first = route(&world, 0, 2).unwrap();
        let second = route(&world, 0, 2).unwrap();
        assert_eq!(first.rooms, second.rooms);
        assert_eq!(first.moves, second.moves);
    }
}
