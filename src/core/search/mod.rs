//! Fuzzy Entity-Resolution Engine
//!
//! Turns free-text player input into ranked catalog entities, tolerant of
//! typos and partial titles, and re-validates every result against the
//! connectivity graph before it is offered to the player.

pub mod engine;
pub mod normalize;
pub mod orchestrator;

pub use engine::{MatchEngine, MatchOptions, MatchStage, ScoredEntity, SearchOutcome, Suggestion};
pub use orchestrator::{ConnectableItems, GameContext, SearchOrchestrator};
