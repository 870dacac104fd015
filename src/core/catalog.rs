//! Catalog Service Interface
//!
//! The engine's only external collaborator: the movie/TV database that serves
//! entity details and credit lists. Modeled as a trait so each environment
//! supplies its own implementation — a real HTTP client in production, an
//! in-memory double in tests. All four calls may fail with a network or HTTP
//! error; callers absorb those failures locally.

use std::collections::HashMap;

use async_trait::async_trait;

use super::entity::{Credit, EntityKind, Movie, Person, TvShow};
use super::error::{CatalogError, CatalogResult};

/// External source of entity and credit details.
///
/// `get_person_details` must return the person with both credit lists
/// attached; `find_person_guest_appearances` returns the guest-star rows the
/// show-side cast endpoints omit.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogService: Send + Sync {
    async fn get_person_details(&self, id: u64) -> CatalogResult<Person>;

    async fn get_movie_details(&self, id: u64) -> CatalogResult<Movie>;

    async fn get_tv_show_details(&self, id: u64) -> CatalogResult<TvShow>;

    async fn find_person_guest_appearances(&self, id: u64) -> CatalogResult<Vec<Credit>>;
}

// ============================================================================
// In-memory implementation
// ============================================================================

/// HashMap-backed catalog for tests and offline fixtures.
///
/// Unknown ids answer with [`CatalogError::NotFound`], which exercises the
/// same absorb-to-false paths a network failure would.
#[derive(Default)]
pub struct InMemoryCatalog {
    people: HashMap<u64, Person>,
    movies: HashMap<u64, Movie>,
    shows: HashMap<u64, TvShow>,
    guest_appearances: HashMap<u64, Vec<Credit>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_person(mut self, person: Person) -> Self {
        self.people.insert(person.id, person);
        self
    }

    pub fn with_movie(mut self, movie: Movie) -> Self {
        self.movies.insert(movie.id, movie);
        self
    }

    pub fn with_show(mut self, show: TvShow) -> Self {
        self.shows.insert(show.id, show);
        self
    }

    pub fn with_guest_appearances(mut self, person_id: u64, rows: Vec<Credit>) -> Self {
        self.guest_appearances.insert(person_id, rows);
        self
    }
}

#[async_trait]
impl CatalogService for InMemoryCatalog {
    async fn get_person_details(&self, id: u64) -> CatalogResult<Person> {
        self.people
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(EntityKind::Person, id))
    }

    async fn get_movie_details(&self, id: u64) -> CatalogResult<Movie> {
        self.movies
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(EntityKind::Movie, id))
    }

    async fn get_tv_show_details(&self, id: u64) -> CatalogResult<TvShow> {
        self.shows
            .get(&id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(EntityKind::Tv, id))
    }

    async fn find_person_guest_appearances(&self, id: u64) -> CatalogResult<Vec<Credit>> {
        Ok(self.guest_appearances.get(&id).cloned().unwrap_or_default())
    }
}
