//! Warren Core Library
//!
//! Domain logic for the warren maze and graph exploration tool.

pub mod config;
pub mod direction;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod maze;
pub mod social;
pub mod world;
