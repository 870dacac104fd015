//! Board Index
//!
//! O(1) lookup tables over the entities currently on the board, split by
//! kind. Rebuilt from scratch whenever the board's node set changes; never
//! persisted, always derivable from the board.

use std::collections::HashMap;

use crate::core::entity::Entity;

/// Three id-to-node maps over a board snapshot.
///
/// Pure and borrow-only: a fresh index is built per call and callers must not
/// assume index identity is stable across board mutations.
#[derive(Debug, Default)]
pub struct CatalogIndex<'a> {
    people: HashMap<u64, &'a Entity>,
    movies: HashMap<u64, &'a Entity>,
    tv: HashMap<u64, &'a Entity>,
}

impl<'a> CatalogIndex<'a> {
    /// Build the index over the given board nodes. Malformed entities are
    /// skipped; an empty board yields empty maps.
    pub fn build(nodes: &'a [Entity]) -> Self {
        let mut index = Self::default();
        for node in nodes {
            if node.is_malformed() {
                tracing::warn!(kind = %node.kind(), "skipping malformed board entity");
                continue;
            }
            match node {
                Entity::Person(p) => {
                    index.people.insert(p.id, node);
                }
                Entity::Movie(m) => {
                    index.movies.insert(m.id, node);
                }
                Entity::Tv(s) => {
                    index.tv.insert(s.id, node);
                }
            }
        }
        index
    }

    pub fn person(&self, id: u64) -> Option<&'a Entity> {
        self.people.get(&id).copied()
    }

    pub fn movie(&self, id: u64) -> Option<&'a Entity> {
        self.movies.get(&id).copied()
    }

    pub fn tv(&self, id: u64) -> Option<&'a Entity> {
        self.tv.get(&id).copied()
    }

    /// Iterate the person nodes on the board (unordered).
    pub fn people(&self) -> impl Iterator<Item = &'a Entity> + '_ {
        self.people.values().copied()
    }

    pub fn len(&self) -> usize {
        self.people.len() + self.movies.len() + self.tv.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
