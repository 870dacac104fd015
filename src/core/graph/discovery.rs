//! Connection Discovery
//!
//! Derives the edges a fully-detailed entity forms with the current board.
//! Edges are never authored directly: they must be exactly reproducible from
//! the board's nodes and their credits, so every emitted edge has both
//! endpoints present in the index at evaluation time.
//!
//! The central subtlety is TV connectivity. A show's own cast list omits
//! guest stars, so discovering from a show requires a second pass over the
//! board's person nodes, scanning each person's TV credits for the show. That
//! pass recovers guest-star edges the show-side endpoint cannot see.

use indexmap::IndexMap;

use crate::core::entity::{Entity, Movie, NodeKey, Person, TvShow};

use super::index::CatalogIndex;

/// A derived, undirected relationship between two board nodes.
///
/// The guest flag is inherited from the credit that produced the edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Connection {
    pub source: NodeKey,
    pub target: NodeKey,
    pub guest_appearance: bool,
}

impl Connection {
    pub fn new(source: NodeKey, target: NodeKey) -> Self {
        Self {
            source,
            target,
            guest_appearance: false,
        }
    }

    pub fn guest(source: NodeKey, target: NodeKey) -> Self {
        Self {
            source,
            target,
            guest_appearance: true,
        }
    }

    /// Canonical unordered endpoint pair, for dedup and cache keys.
    pub fn endpoints(&self) -> (NodeKey, NodeKey) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

/// Edges a person forms with the board: one per movie/TV credit whose
/// production is on the board. TV edges carry the credit's guest flag; movies
/// have no guest concept.
pub fn connections_from_person(person: &Person, index: &CatalogIndex<'_>) -> Vec<Connection> {
    let source = NodeKey::person(person.id);
    let mut edges = Vec::new();
    for credit in &person.movie_credits {
        if index.movie(credit.target_id).is_some() {
            edges.push(Connection::new(source, NodeKey::movie(credit.target_id)));
        }
    }
    for credit in &person.tv_credits {
        if index.tv(credit.target_id).is_some() {
            edges.push(Connection {
                source,
                target: NodeKey::tv(credit.target_id),
                guest_appearance: credit.guest_appearance,
            });
        }
    }
    edges
}

/// Edges a movie forms with the board: one per cast member who is a board
/// person node.
pub fn connections_from_movie(movie: &Movie, index: &CatalogIndex<'_>) -> Vec<Connection> {
    let source = NodeKey::movie(movie.id);
    movie
        .cast
        .iter()
        .filter(|member| index.person(member.person_id).is_some())
        .map(|member| Connection::new(source, NodeKey::person(member.person_id)))
        .collect()
}

/// Edges a TV show forms with the board, in two passes.
///
/// Pass one matches the show's own cast against board person nodes. Pass two
/// scans every board person's TV credits for this show's id, recovering
/// guest-star connections absent from the show-side cast list. A person found
/// by both passes keeps the regular-cast edge.
pub fn connections_from_show(show: &TvShow, index: &CatalogIndex<'_>) -> Vec<Connection> {
    let source = NodeKey::tv(show.id);
    let mut by_person: IndexMap<u64, Connection> = IndexMap::new();

    for member in &show.cast {
        if index.person(member.person_id).is_some() {
            by_person.insert(
                member.person_id,
                Connection::new(source, NodeKey::person(member.person_id)),
            );
        }
    }

    // Second pass: person-side credits. Sorted by person id so the emitted
    // edge order is deterministic regardless of index map order.
    let mut credited: Vec<(u64, bool)> = index
        .people()
        .filter_map(|node| match node {
            Entity::Person(p) => p
                .tv_credits
                .iter()
                .find(|c| c.target_id == show.id)
                .map(|c| (p.id, c.guest_appearance)),
            _ => None,
        })
        .collect();
    credited.sort_unstable_by_key(|(id, _)| *id);

    for (person_id, guest) in credited {
        by_person.entry(person_id).or_insert(Connection {
            source,
            target: NodeKey::person(person_id),
            guest_appearance: guest,
        });
    }

    by_person.into_values().collect()
}

/// Whether the entity would form at least one edge against the index.
///
/// Short-circuits on the first hit instead of materializing the edge list.
pub fn connects(entity: &Entity, index: &CatalogIndex<'_>) -> bool {
    if entity.is_malformed() {
        return false;
    }
    match entity {
        Entity::Person(p) => {
            p.movie_credits
                .iter()
                .any(|c| index.movie(c.target_id).is_some())
                || p.tv_credits.iter().any(|c| index.tv(c.target_id).is_some())
        }
        Entity::Movie(m) => m
            .cast
            .iter()
            .any(|member| index.person(member.person_id).is_some()),
        Entity::Tv(s) => {
            s.cast
                .iter()
                .any(|member| index.person(member.person_id).is_some())
                || index.people().any(|node| match node {
                    Entity::Person(p) => p.tv_credits.iter().any(|c| c.target_id == s.id),
                    _ => false,
                })
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
