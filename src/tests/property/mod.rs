//! Property-based tests (proptest).
//!
//! - `search_props`: dedup and score-range invariants of the match engine
//! - `path_props`: validity and symmetry of BFS shortest paths

mod path_props;
mod search_props;
