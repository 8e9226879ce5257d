//! Independent traversal verification
//!
//! Replays a move sequence against a world and reports whether it visits
//! every room. The verifier keeps its own visited set and walks exits via
//! `World::step`, sharing no state with the traversal engine; it exists
//! to catch engine bugs, so it must stay an independent re-derivation.

use std::collections::HashSet;

use serde::Serialize;

use crate::direction::Direction;
use crate::error::{Result, WarrenError};
use crate::world::{RoomId, World};

/// Outcome of replaying a move sequence
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    /// Room the replay started from
    pub start: RoomId,
    /// Number of moves replayed
    pub moves: usize,
    /// Distinct rooms reached, including the start
    pub rooms_visited: usize,
    /// Total rooms in the world
    pub rooms_total: usize,
    /// Rooms never reached, in ascending id order
    pub unvisited: Vec<RoomId>,
    /// Whether every room was reached
    pub passed: bool,
}

/// Replay `moves` from `start` and report coverage.
///
/// Fails with `RoomNotFound` for an unknown start and `ExitNotFound` when
/// a move names an exit the current room does not have; an incomplete
/// walk is not an error here, just a failing report.
#[tracing::instrument(skip(world, moves), fields(start = start, moves = moves.len()))]
pub fn verify(world: &World, start: RoomId, moves: &[Direction]) -> Result<VerifyReport> {
    if !world.contains(start) {
        return Err(WarrenError::RoomNotFound { id: start });
    }

    let mut visited: HashSet<RoomId> = HashSet::with_capacity(world.room_count());
    visited.insert(start);

    let mut current = start;
    for &mv in moves {
        current = world.step(current, mv)?;
        visited.insert(current);
    }

    let unvisited: Vec<RoomId> = world
        .rooms()
        .map(|(id, _)| id)
        .filter(|id| !visited.contains(id))
        .collect();
    let passed = unvisited.is_empty();
    tracing::debug!(
        visited = visited.len(),
        total = world.room_count(),
        passed,
        "replay finished"
    );

    Ok(VerifyReport {
        start,
        moves: moves.len(),
        rooms_visited: visited.len(),
        rooms_total: world.room_count(),
        unvisited,
        passed,
    })
}
