//! Maze traversal: exploration engine, verifier, and router

pub mod explore;
pub mod route;
pub mod verify;

pub use explore::{explore, ExploreOptions, Traversal};
pub use route::{route, Route};
pub use verify::{verify, VerifyReport};
