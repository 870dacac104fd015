//! Property-based tests for the match engine.
//!
//! Invariants:
//! - No two results share a `(kind, id)` key
//! - Every score lies in `[0, 1]`
//! - Results never exceed `max_results`
//! - Suggestions and exact matches are mutually exclusive

use proptest::prelude::*;
use std::collections::HashSet;

use crate::core::entity::{Entity, Movie, Person, TvShow};
use crate::core::search::{MatchEngine, MatchOptions};

// ============================================================================
// Strategies
// ============================================================================

/// Titles drawn from a small themed pool so queries actually collide with
/// the corpus.
fn arb_title() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Iron Man".to_string()),
        Just("Iron Man 2".to_string()),
        Just("The Avengers".to_string()),
        Just("Avengers: Endgame".to_string()),
        Just("Spider-Man: Homecoming".to_string()),
        Just("Lost".to_string()),
        Just("Lost in Translation".to_string()),
        "[a-z]{3,12}",
    ]
}

fn arb_entity() -> impl Strategy<Value = Entity> {
    (1u64..200, arb_title(), 0u8..3).prop_map(|(id, title, kind)| match kind {
        0 => Entity::Movie(Movie::new(id, &title)),
        1 => Entity::Tv(TvShow::new(id, &title)),
        _ => Entity::Person(Person::new(id, &title)),
    })
}

fn arb_corpus() -> impl Strategy<Value = Vec<Entity>> {
    proptest::collection::vec(arb_entity(), 0..40)
}

fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("iron man".to_string()),
        Just("avengers".to_string()),
        Just("spider man homecoming".to_string()),
        Just("lost".to_string()),
        Just("the".to_string()),
        "[a-z ]{0,20}",
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_results_never_share_a_key(corpus in arb_corpus(), query in arb_query()) {
        let engine = MatchEngine::default();
        let outcome = engine.search(&query, &corpus, &MatchOptions::default());

        let mut seen = HashSet::new();
        for result in &outcome.results {
            prop_assert!(seen.insert(result.entity.key()));
        }
    }

    #[test]
    fn prop_scores_are_in_unit_interval(corpus in arb_corpus(), query in arb_query()) {
        let engine = MatchEngine::default();
        let outcome = engine.search(&query, &corpus, &MatchOptions::default());

        for result in &outcome.results {
            prop_assert!(result.score >= 0.0 && result.score <= 1.0);
        }
    }

    #[test]
    fn prop_results_respect_max(corpus in arb_corpus(), query in arb_query(), max in 1usize..10) {
        let engine = MatchEngine::default();
        let options = MatchOptions { max_results: max, ..Default::default() };
        let outcome = engine.search(&query, &corpus, &options);
        prop_assert!(outcome.results.len() <= max);
    }

    #[test]
    fn prop_suggestions_only_without_exact_match(corpus in arb_corpus(), query in arb_query()) {
        let engine = MatchEngine::default();
        let outcome = engine.search(&query, &corpus, &MatchOptions::default());
        if outcome.exact_match.is_some() {
            prop_assert!(outcome.suggestions.is_empty());
        }
        prop_assert!(outcome.suggestions.len() <= 3);
    }
}
