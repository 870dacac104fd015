//! Expectation-based tests for the connectability oracle's catalog traffic:
//! details are fetched lazily, per candidate, and failures stay quiet.

use std::sync::Arc;

use crate::core::catalog::MockCatalogService;
use crate::core::entity::{Entity, NodeKey, Person, TvShow};
use crate::core::error::CatalogError;
use crate::core::graph::{ConnectabilityOracle, StartingPair};
use crate::tests::mocks::{detailed_person, movie_with_cast, FailingCatalog};

#[tokio::test]
async fn test_detailed_starting_people_are_not_refetched() {
    // Both starting people carry credits; no catalog call is allowed.
    let mut mock = MockCatalogService::new();
    mock.expect_get_person_details().times(0);

    let oracle = ConnectabilityOracle::new(Arc::new(mock));
    let pair = StartingPair::new(
        detailed_person(1, "Left", &[10], &[]),
        detailed_person(2, "Right", &[20], &[]),
    );
    let candidate = Entity::Person(detailed_person(3, "Costar", &[10], &[]));
    assert!(oracle.check_initial_connectability(&candidate, &pair).await);
}

#[tokio::test]
async fn test_sparse_starting_person_is_fetched_once() {
    let mut mock = MockCatalogService::new();
    mock.expect_get_person_details()
        .withf(|&id| id == 1)
        .times(1)
        .returning(|_| Ok(detailed_person(1, "Left", &[10], &[])));

    let oracle = ConnectabilityOracle::new(Arc::new(mock));
    // Left arrives without credits and shares movie 10 with the candidate,
    // so the check short-circuits before touching Right.
    let pair = StartingPair::new(Person::new(1, "Left"), Person::new(2, "Right"));
    let candidate = Entity::Person(detailed_person(3, "Costar", &[10], &[]));
    assert!(oracle.check_initial_connectability(&candidate, &pair).await);
}

#[tokio::test]
async fn test_batch_fetches_per_candidate_not_per_board_node() {
    let mut mock = MockCatalogService::new();
    // One candidate movie, three board nodes: exactly one fetch.
    mock.expect_get_movie_details()
        .withf(|&id| id == 10)
        .times(1)
        .returning(|_| Ok(movie_with_cast(10, "Candidate", &[1])));
    mock.expect_get_person_details().times(0);
    mock.expect_get_tv_show_details().times(0);

    let oracle = ConnectabilityOracle::new(Arc::new(mock));
    let board = vec![
        Entity::Person(detailed_person(1, "A", &[], &[])),
        Entity::Person(detailed_person(2, "B", &[], &[])),
        Entity::Tv(TvShow::new(30, "C")),
    ];
    let candidates = vec![Entity::Movie(movie_with_cast(10, "Candidate", &[]))];
    let results = oracle.batch_check_connectability(&candidates, &board).await;
    assert!(results[&NodeKey::movie(10)]);
}

#[tokio::test]
async fn test_guest_appearance_fetch_failure_denies_quietly() {
    let mut mock = MockCatalogService::new();
    mock.expect_get_person_details()
        .returning(|id| Ok(detailed_person(id, "Start", &[], &[])));
    mock.expect_find_person_guest_appearances()
        .times(2)
        .returning(|_| Err(CatalogError::Status(503)));

    let oracle = ConnectabilityOracle::new(Arc::new(mock));
    let pair = StartingPair::new(Person::new(1, "Left"), Person::new(2, "Right"));
    let show = Entity::Tv(TvShow::new(30, "Unreachable"));
    // The failed avenue contributes false rather than an error.
    assert!(!oracle.check_initial_connectability(&show, &pair).await);
}

#[tokio::test]
async fn test_all_fetches_failing_marks_whole_batch_false() {
    let oracle = ConnectabilityOracle::new(Arc::new(FailingCatalog));
    let board = vec![Entity::Person(detailed_person(1, "A", &[10], &[]))];
    let candidates = vec![
        Entity::Movie(movie_with_cast(10, "M", &[1])),
        Entity::Tv(TvShow::new(20, "S")),
        Entity::Person(Person::new(3, "P")),
    ];
    let results = oracle.batch_check_connectability(&candidates, &board).await;
    assert_eq!(results.len(), 3);
    assert!(results.values().all(|&connectable| !connectable));
}
