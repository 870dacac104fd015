//! Connectability Oracle
//!
//! Answers "can this entity legally join the start pair / the board" for
//! single items and in parallel batches. The oracle only reads: it never
//! mutates the board, and every catalog failure is absorbed into a `false`
//! answer for the affected item rather than surfaced to the caller.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::core::catalog::CatalogService;
use crate::core::entity::{Entity, EntityKind, NodeKey, Person};

use super::discovery;
use super::index::CatalogIndex;

/// The two starting people a round is played between.
#[derive(Debug, Clone)]
pub struct StartingPair {
    pub left: Person,
    pub right: Person,
}

impl StartingPair {
    pub fn new(left: Person, right: Person) -> Self {
        Self { left, right }
    }

    pub fn people(&self) -> [&Person; 2] {
        [&self.left, &self.right]
    }

    pub fn contains(&self, person_id: u64) -> bool {
        self.left.id == person_id || self.right.id == person_id
    }
}

/// Read-only connectability queries over a catalog service.
pub struct ConnectabilityOracle {
    catalog: Arc<dyn CatalogService>,
}

impl ConnectabilityOracle {
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self { catalog }
    }

    /// Whether `candidate` can be the first placement between the two
    /// starting people.
    ///
    /// Movies connect via cast membership. TV shows connect via cast
    /// membership or either starting person's TV-credit/guest-appearance
    /// list (guest appearances count fully). A person candidate must differ
    /// from both starting people and share a movie- or TV-credit id with at
    /// least one of them; starting people's credits are lazily fetched when
    /// not already attached.
    pub async fn check_initial_connectability(
        &self,
        candidate: &Entity,
        pair: &StartingPair,
    ) -> bool {
        if candidate.is_malformed() {
            return false;
        }
        match candidate {
            Entity::Movie(movie) => movie.cast.iter().any(|m| pair.contains(m.person_id)),
            Entity::Tv(show) => {
                if show.cast.iter().any(|m| pair.contains(m.person_id)) {
                    return true;
                }
                for person in pair.people() {
                    if self.starting_person_has_show(person, show.id).await {
                        return true;
                    }
                }
                false
            }
            Entity::Person(person) => {
                if pair.contains(person.id) {
                    return false;
                }
                let movie_ids: HashSet<u64> =
                    person.movie_credits.iter().map(|c| c.target_id).collect();
                let tv_ids: HashSet<u64> = person.tv_credits.iter().map(|c| c.target_id).collect();
                for start in pair.people() {
                    let (start_movies, start_tv) = self.starting_credit_sets(start).await;
                    if movie_ids.intersection(&start_movies).next().is_some()
                        || tv_ids.intersection(&start_tv).next().is_some()
                    {
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Whether `candidate` connects to at least one node of a non-empty
    /// board. Board nodes are assumed already detailed; the check is the
    /// same cast/credit rule as discovery, short-circuiting on first match.
    pub async fn check_board_connectability(&self, candidate: &Entity, board: &[Entity]) -> bool {
        if board.is_empty() {
            return false;
        }
        let index = CatalogIndex::build(board);
        discovery::connects(candidate, &index)
    }

    /// Evaluate many candidates against one board snapshot.
    ///
    /// Candidates are grouped by kind and fully fetched per item; the three
    /// kind groups run concurrently, sequentially within each group. A
    /// failed fetch yields `false` for that item without aborting the batch.
    pub async fn batch_check_connectability(
        &self,
        candidates: &[Entity],
        board: &[Entity],
    ) -> HashMap<NodeKey, bool> {
        let mut results: HashMap<NodeKey, bool> = HashMap::new();
        if board.is_empty() {
            for candidate in candidates {
                results.insert(candidate.key(), false);
            }
            return results;
        }

        let index = CatalogIndex::build(board);

        let mut movie_ids = Vec::new();
        let mut tv_ids = Vec::new();
        let mut person_ids = Vec::new();
        for candidate in candidates {
            if candidate.is_malformed() {
                results.insert(candidate.key(), false);
                continue;
            }
            match candidate.kind() {
                EntityKind::Movie => movie_ids.push(candidate.id()),
                EntityKind::Tv => tv_ids.push(candidate.id()),
                EntityKind::Person => person_ids.push(candidate.id()),
            }
        }

        let (movies, shows, people) = futures::join!(
            self.batch_group(EntityKind::Movie, &movie_ids, &index),
            self.batch_group(EntityKind::Tv, &tv_ids, &index),
            self.batch_group(EntityKind::Person, &person_ids, &index),
        );
        results.extend(movies);
        results.extend(shows);
        results.extend(people);
        results
    }

    /// Fetch-and-evaluate loop for one kind group.
    async fn batch_group(
        &self,
        kind: EntityKind,
        ids: &[u64],
        index: &CatalogIndex<'_>,
    ) -> Vec<(NodeKey, bool)> {
        let mut out = Vec::with_capacity(ids.len());
        for &id in ids {
            let fetched = match kind {
                EntityKind::Movie => self.catalog.get_movie_details(id).await.map(Entity::Movie),
                EntityKind::Tv => self.catalog.get_tv_show_details(id).await.map(Entity::Tv),
                EntityKind::Person => self.catalog.get_person_details(id).await.map(Entity::Person),
            };
            let connectable = match fetched {
                Ok(entity) => discovery::connects(&entity, index),
                Err(e) => {
                    tracing::warn!(%kind, id, error = %e, "detail fetch failed, marking non-connectable");
                    false
                }
            };
            out.push((NodeKey::new(kind, id), connectable));
        }
        out
    }

    /// Whether a starting person's TV credits or guest appearances contain
    /// the show, lazily fetching their details when credits are missing.
    async fn starting_person_has_show(&self, person: &Person, show_id: u64) -> bool {
        if person.tv_credits.iter().any(|c| c.target_id == show_id) {
            return true;
        }
        if !person.has_credits() {
            match self.catalog.get_person_details(person.id).await {
                Ok(full) => {
                    if full.tv_credits.iter().any(|c| c.target_id == show_id) {
                        return true;
                    }
                }
                Err(e) => {
                    tracing::warn!(person = person.id, error = %e, "person detail fetch failed");
                }
            }
        }
        match self.catalog.find_person_guest_appearances(person.id).await {
            Ok(rows) => rows.iter().any(|c| c.target_id == show_id),
            Err(e) => {
                tracing::warn!(person = person.id, error = %e, "guest appearance fetch failed");
                false
            }
        }
    }

    /// A starting person's movie/TV credit-id sets, lazily fetched when the
    /// person arrived without credit lists. Fetch failure yields empty sets.
    async fn starting_credit_sets(&self, person: &Person) -> (HashSet<u64>, HashSet<u64>) {
        let collect = |p: &Person| {
            (
                p.movie_credits.iter().map(|c| c.target_id).collect(),
                p.tv_credits.iter().map(|c| c.target_id).collect(),
            )
        };
        if person.has_credits() {
            return collect(person);
        }
        match self.catalog.get_person_details(person.id).await {
            Ok(full) => collect(&full),
            Err(e) => {
                tracing::warn!(person = person.id, error = %e, "person detail fetch failed");
                (HashSet::new(), HashSet::new())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
