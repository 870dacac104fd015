//! Property-based tests for the path finder.
//!
//! Invariants:
//! - A found path starts at `start`, ends at `end`, and every consecutive
//!   pair is an edge of the input
//! - A found path never repeats a node
//! - Queries are symmetric: `(a, b)` and `(b, a)` agree

use proptest::prelude::*;
use std::collections::HashSet;

use crate::core::entity::NodeKey;
use crate::core::graph::{Connection, PathFinder};

fn arb_key() -> impl Strategy<Value = NodeKey> {
    (1u64..12).prop_map(NodeKey::person)
}

fn arb_edges() -> impl Strategy<Value = Vec<Connection>> {
    proptest::collection::vec(
        (arb_key(), arb_key()).prop_map(|(a, b)| Connection::new(a, b)),
        0..25,
    )
}

fn adjacent(edges: &[Connection], a: NodeKey, b: NodeKey) -> bool {
    edges
        .iter()
        .any(|e| (e.source == a && e.target == b) || (e.source == b && e.target == a))
}

proptest! {
    #[test]
    fn prop_found_path_is_a_valid_walk(edges in arb_edges(), start in arb_key(), end in arb_key()) {
        let finder = PathFinder::new();
        let result = finder.find_path(start, end, &edges);

        if result.found {
            prop_assert_eq!(*result.path.first().unwrap(), start);
            prop_assert_eq!(*result.path.last().unwrap(), end);
            for pair in result.path.windows(2) {
                prop_assert!(adjacent(&edges, pair[0], pair[1]));
            }
            let unique: HashSet<_> = result.path.iter().collect();
            prop_assert_eq!(unique.len(), result.path.len());
        } else {
            prop_assert!(result.path.is_empty());
        }
    }

    #[test]
    fn prop_queries_are_symmetric(edges in arb_edges(), start in arb_key(), end in arb_key()) {
        // Fresh finders so both directions run a real BFS.
        let forward = PathFinder::new().find_path(start, end, &edges);
        let reverse = PathFinder::new().find_path(end, start, &edges);

        prop_assert_eq!(forward.found, reverse.found);
        prop_assert_eq!(forward.path.len(), reverse.path.len());
    }
}
