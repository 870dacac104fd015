//! Shared test fixtures
//!
//! Entity builders used across the unit and property test modules, plus a
//! catalog double whose every call fails, for exercising the absorb-to-false
//! error paths. The mockall-generated `MockCatalogService` (from the
//! `#[automock]` on the trait) covers expectation-based tests.

#![allow(dead_code)]

use async_trait::async_trait;

use crate::core::catalog::CatalogService;
use crate::core::entity::{CastMember, Credit, Entity, Movie, Person, TvShow};
use crate::core::error::{CatalogError, CatalogResult};

/// A person with regular credits attached.
pub fn detailed_person(id: u64, name: &str, movies: &[u64], shows: &[u64]) -> Person {
    let mut p = Person::new(id, name);
    p.profile_path = Some(format!("/profile-{id}.jpg"));
    p.movie_credits = movies.iter().map(|&m| Credit::regular(m)).collect();
    p.tv_credits = shows.iter().map(|&s| Credit::regular(s)).collect();
    p
}

/// A movie with a poster and the given cast ids.
pub fn movie_with_cast(id: u64, title: &str, cast: &[u64]) -> Movie {
    let mut m = Movie::new(id, title);
    m.poster_path = Some(format!("/poster-{id}.jpg"));
    m.cast = cast
        .iter()
        .map(|&p| CastMember::new(p, &format!("Cast {p}")))
        .collect();
    m
}

/// A show with a poster and the given regular cast ids.
pub fn show_with_cast(id: u64, name: &str, cast: &[u64]) -> TvShow {
    let mut s = TvShow::new(id, name);
    s.poster_path = Some(format!("/poster-{id}.jpg"));
    s.cast = cast
        .iter()
        .map(|&p| CastMember::new(p, &format!("Cast {p}")))
        .collect();
    s
}

pub fn board(entities: Vec<Entity>) -> Vec<Entity> {
    entities
}

/// Catalog double that fails every call with a network error.
pub struct FailingCatalog;

#[async_trait]
impl CatalogService for FailingCatalog {
    async fn get_person_details(&self, _id: u64) -> CatalogResult<Person> {
        Err(CatalogError::Network("connection refused".to_string()))
    }

    async fn get_movie_details(&self, _id: u64) -> CatalogResult<Movie> {
        Err(CatalogError::Network("connection refused".to_string()))
    }

    async fn get_tv_show_details(&self, _id: u64) -> CatalogResult<TvShow> {
        Err(CatalogError::Network("connection refused".to_string()))
    }

    async fn find_person_guest_appearances(&self, _id: u64) -> CatalogResult<Vec<Credit>> {
        Err(CatalogError::Network("connection refused".to_string()))
    }
}
