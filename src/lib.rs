/// Castlink - connection-discovery and entity-resolution engine
///
/// Core library for a game in which players link two starting people
/// through a chain of shared movie/TV credits: board indexing, edge
/// discovery, connectability checks, memoized shortest paths, and fuzzy
/// local search over a cached entity corpus.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
