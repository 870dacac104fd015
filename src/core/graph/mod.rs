//! Connectivity Graph Engine
//!
//! Indexes board entities, derives the edges a candidate forms with the
//! board, answers connectability queries against the start pair or the full
//! board, and serves memoized shortest-path queries for the win check.

pub mod connectability;
pub mod discovery;
pub mod index;
pub mod pathfind;

pub use connectability::{ConnectabilityOracle, StartingPair};
pub use discovery::{
    connections_from_movie, connections_from_person, connections_from_show, Connection,
};
pub use index::CatalogIndex;
pub use pathfind::{PathFinder, PathResult};
