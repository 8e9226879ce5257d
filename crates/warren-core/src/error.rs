//! Error types and exit codes for warren
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (malformed map, unknown room, incomplete traversal)

use std::path::PathBuf;
use thiserror::Error;

use crate::world::RoomId;

/// Exit codes reported by the warren binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - malformed map, unknown room, failed traversal (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during warren operations
#[derive(Error, Debug)]
pub enum WarrenError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("unknown direction '{0}' (expected: n, s, e, or w)")]
    UnknownDirection(String),

    #[error("cannot average {avg_friendships} friendships across {num_users} users")]
    NotEnoughUsers {
        num_users: usize,
        avg_friendships: usize,
    },

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("map not found: {path:?}")]
    MapNotFound { path: PathBuf },

    #[error("invalid map {path:?}: {reason}")]
    InvalidMap { path: PathBuf, reason: String },

    #[error("room not found: {id}")]
    RoomNotFound { id: RoomId },

    #[error("vertex not found: {id}")]
    VertexNotFound { id: u32 },

    #[error("user not found: {id}")]
    UserNotFound { id: u32 },

    #[error("room {room} has no {direction} exit")]
    ExitNotFound { room: RoomId, direction: String },

    #[error("traversal incomplete: {} room(s) never reached ({})", unvisited.len(), format_ids(unvisited))]
    IncompleteTraversal { unvisited: Vec<RoomId> },

    #[error("users cannot befriend themselves")]
    SelfFriendship,

    #[error("friendship between {a} and {b} already exists")]
    DuplicateFriendship { a: u32, b: u32 },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl WarrenError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            // Usage errors
            WarrenError::UnknownFormat(_)
            | WarrenError::DuplicateFormat
            | WarrenError::UnknownDirection(_)
            | WarrenError::NotEnoughUsers { .. }
            | WarrenError::UsageError(_) => ExitCode::Usage,

            // Data errors
            WarrenError::MapNotFound { .. }
            | WarrenError::InvalidMap { .. }
            | WarrenError::RoomNotFound { .. }
            | WarrenError::VertexNotFound { .. }
            | WarrenError::UserNotFound { .. }
            | WarrenError::ExitNotFound { .. }
            | WarrenError::IncompleteTraversal { .. }
            | WarrenError::SelfFriendship
            | WarrenError::DuplicateFriendship { .. } => ExitCode::Data,

            // Generic failures
            WarrenError::Io(_) | WarrenError::Json(_) | WarrenError::Toml(_) => ExitCode::Failure,
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            WarrenError::UnknownFormat(_) => "unknown_format",
            WarrenError::DuplicateFormat => "duplicate_format",
            WarrenError::UnknownDirection(_) => "unknown_direction",
            WarrenError::NotEnoughUsers { .. } => "not_enough_users",
            WarrenError::UsageError(_) => "usage_error",
            WarrenError::MapNotFound { .. } => "map_not_found",
            WarrenError::InvalidMap { .. } => "invalid_map",
            WarrenError::RoomNotFound { .. } => "room_not_found",
            WarrenError::VertexNotFound { .. } => "vertex_not_found",
            WarrenError::UserNotFound { .. } => "user_not_found",
            WarrenError::ExitNotFound { .. } => "exit_not_found",
            WarrenError::IncompleteTraversal { .. } => "incomplete_traversal",
            WarrenError::SelfFriendship => "self_friendship",
            WarrenError::DuplicateFriendship { .. } => "duplicate_friendship",
            WarrenError::Io(_) => "io_error",
            WarrenError::Json(_) => "json_error",
            WarrenError::Toml(_) => "toml_error",
        }
    }
}

fn format_ids(ids: &[RoomId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for warren operations
pub type Result<T> = std::result::Result<T, WarrenError>;
