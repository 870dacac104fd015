//! Parameterized scoring cases: one corpus title, one query, one expected
//! winning score per the stage model.

use rstest::rstest;

use crate::core::entity::{Entity, Movie};
use crate::core::search::{MatchEngine, MatchOptions};

#[rstest]
// Exact, literal and punctuation-normalized.
#[case("iron man", "Iron Man", 1.0)]
#[case("spider man homecoming", "Spider-Man: Homecoming", 1.0)]
// Fuzzy: one substitution over eight characters, weighted 0.9.
#[case("iron mam", "Iron Man", 0.875 * 0.9)]
// Containment: five of eight characters, weighted 0.8.
#[case("aveng", "Avengers", 0.625 * 0.8)]
fn winning_stage_score(#[case] query: &str, #[case] title: &str, #[case] expected: f64) {
    let corpus = vec![Entity::Movie(Movie::new(1, title))];
    let outcome = MatchEngine::default().search(query, &corpus, &MatchOptions::default());
    let top = outcome.results.first().expect("a match");
    assert!(
        (top.score - expected).abs() < 1e-9,
        "query {query:?} against {title:?}: got {}, expected {expected}",
        top.score
    );
}

#[rstest]
#[case("zzzzzz")]
#[case("q")]
#[case("the")]
fn no_result_queries(#[case] query: &str) {
    let corpus = vec![Entity::Movie(Movie::new(1, "Iron Man"))];
    let outcome = MatchEngine::default().search(query, &corpus, &MatchOptions::default());
    assert!(outcome.results.is_empty());
}
