//! Compass directions for maze traversal
//!
//! The priority rotation and the reversal table are the only traversal
//! policy with behavioral consequences, so both are explicit constants
//! here rather than properties of map iteration order.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WarrenError};

/// A compass direction labeling a room exit
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Direction {
    #[serde(rename = "n")]
    North,
    #[serde(rename = "s")]
    South,
    #[serde(rename = "e")]
    East,
    #[serde(rename = "w")]
    West,
}

impl Direction {
    /// Fixed rotation used when choosing among unvisited neighbors:
    /// clockwise from north. Ties are always broken in this order.
    pub const PRIORITY: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The reverse direction. Involutive: `d.opposite().opposite() == d`.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Single-letter label used in maps and move listings
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::South => 's',
            Direction::East => 'e',
            Direction::West => 'w',
        }
    }
}

impl FromStr for Direction {
    type Err = WarrenError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Ok(Direction::North),
            "s" | "south" => Ok(Direction::South),
            "e" | "east" => Ok(Direction::East),
            "w" | "west" => Ok(Direction::West),
            other => Err(WarrenError::UnknownDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Parse a compact move listing ("nnew", "n e s w", "n,e,s,w")
pub fn parse_moves(input: &str) -> Result<Vec<Direction>> {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c.to_ascii_lowercase() {
            'n' => Ok(Direction::North),
            's' => Ok(Direction::South),
            'e' => Ok(Direction::East),
            'w' => Ok(Direction::West),
            other => Err(WarrenError::UnknownDirection(other.to_string())),
        })
        .collect()
}

/// Render a move sequence as a compact letter string
pub fn format_moves(moves: &[Direction]) -> String {
    moves.iter().map(|m| m.letter()).collect()
}
