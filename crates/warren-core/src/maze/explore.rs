//! Exhaustive maze traversal
//!
//! Walks a world from a starting room and produces a move sequence that
//! visits every reachable room: greedy advances into unvisited neighbors
//! in `Direction::PRIORITY` order, backtracking once a room's neighbors
//! are exhausted. Output is deterministic for a given world and start.

use std::collections::HashSet;

use serde::Serialize;

use crate::direction::{format_moves, Direction};
use crate::error::{Result, WarrenError};
use crate::world::{RoomId, World};

/// Options for the traversal engine
#[derive(Debug, Clone)]
pub struct ExploreOptions {
    /// Safety bound multiplier: the engine gives up after
    /// `bound_factor * room_count` steps
    pub bound_factor: u32,
}

impl Default for ExploreOptions {
    fn default() -> Self {
        ExploreOptions { bound_factor: 4 }
    }
}

/// Result of one traversal run
#[derive(Debug, Clone, Serialize)]
pub struct Traversal {
    /// Room the walk started from
    pub start: RoomId,
    /// Moves in execution order
    pub moves: Vec<Direction>,
    /// Rooms visited (the whole world when the run succeeds)
    pub rooms_visited: usize,
    /// Moves that entered a previously unvisited room
    pub frontier_advances: usize,
    /// Moves that reversed an earlier advance
    pub backtracks: usize,
}

impl Traversal {
    /// Moves as a compact letter string
    pub fn moves_string(&self) -> String {
        format_moves(&self.moves)
    }
}

/// State tracked during one traversal run
struct ExploreState {
    current: RoomId,
    visited: HashSet<RoomId>,
    moves: Vec<Direction>,
    backtrack: Vec<Direction>,
}

/// Walk the world from `start` until every room has been visited.
///
/// Fails with `IncompleteTraversal` when backtracking exhausts with rooms
/// still unvisited (disconnected map) or the safety bound trips, and with
/// `ExitNotFound` when a backtrack meets a one-way passage.
#[tracing::instrument(
    skip(world, opts),
    fields(start = start, rooms = world.room_count(), bound_factor = opts.bound_factor)
)]
pub fn explore(world: &World, start: RoomId, opts: &ExploreOptions) -> Result<Traversal> {
    if !world.contains(start) {
        return Err(WarrenError::RoomNotFound { id: start });
    }

    let total = world.room_count();
    let max_steps = total.saturating_mul(opts.bound_factor as usize);
    let mut state = ExploreState {
        current: start,
        visited: HashSet::with_capacity(total),
        moves: Vec::new(),
        backtrack: Vec::new(),
    };
    state.visited.insert(start);

    let mut steps = 0usize;
    while state.visited.len() < total {
        if steps >= max_steps {
            tracing::warn!(
                steps,
                visited = state.visited.len(),
                total,
                "safety bound exceeded"
            );
            return Err(incomplete(world, &state.visited));
        }
        steps += 1;

        match pick_advance(world, &state)? {
            Some((direction, dest)) => {
                state.visited.insert(dest);
                state.moves.push(direction);
                state.backtrack.push(direction);
                state.current = dest;
                tracing::trace!(room = dest, direction = %direction, "advance");
            }
            None => {
                // Every neighbor seen: reverse the most recent advance
                let Some(last) = state.backtrack.pop() else {
                    return Err(incomplete(world, &state.visited));
                };
                let back = last.opposite();
                state.current = world.step(state.current, back)?;
                state.moves.push(back);
                tracing::trace!(room = state.current, direction = %back, "backtrack");
            }
        }
    }

    let frontier_advances = state.visited.len().saturating_sub(1);
    Ok(Traversal {
        start,
        rooms_visited: state.visited.len(),
        frontier_advances,
        backtracks: state.moves.len() - frontier_advances,
        moves: state.moves,
    })
}

/// First exit in priority order whose destination is unvisited
fn pick_advance(world: &World, state: &ExploreState) -> Result<Option<(Direction, RoomId)>> {
    let exits = world.neighbors(state.current)?;
    for direction in Direction::PRIORITY {
        if let Some(&dest) = exits.get(&direction) {
            if !state.visited.contains(&dest) {
                return Ok(Some((direction, dest)));
            }
        }
    }
    Ok(None)
}

fn incomplete(world: &World, visited: &HashSet<RoomId>) -> WarrenError {
    let unvisited: Vec<RoomId> = world
        .rooms()
        .map(|(id, _)| id)
        .filter(|id| !visited.contains(id))
        .collect();
    WarrenError::IncompleteTraversal { unvisited }
}
