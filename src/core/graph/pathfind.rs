//! Shortest Path Finder
//!
//! Breadth-first shortest path between two board nodes over the current edge
//! set, memoized in a bounded LRU cache keyed by the symmetric node pair.
//!
//! The cache is an explicit per-session object with an explicit capacity, not
//! a module-level global. It must be cleared wholesale whenever the edge set
//! changes: a single new or removed edge can shorten or create paths between
//! unrelated node pairs, so per-key invalidation is unsafe.

use std::collections::{HashSet, VecDeque};
use std::num::NonZeroUsize;
use std::sync::Mutex;

use indexmap::IndexMap;
use lru::LruCache;

use crate::core::entity::NodeKey;

use super::discovery::Connection;

pub const DEFAULT_PATH_CACHE_CAPACITY: usize = 1000;

/// Outcome of a shortest-path query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResult {
    pub found: bool,
    pub path: Vec<NodeKey>,
}

impl PathResult {
    fn not_found() -> Self {
        Self {
            found: false,
            path: Vec::new(),
        }
    }
}

/// Hit/miss counters for the path cache, mainly for tests and diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathCacheStats {
    pub hits: u64,
    pub misses: u64,
}

struct PathCache {
    entries: LruCache<(NodeKey, NodeKey), PathResult>,
    stats: PathCacheStats,
}

/// Memoizing BFS path finder.
///
/// Pure and synchronous once the edge list is materialized; the mutex only
/// guards the cache so the finder can be shared across a multi-threaded
/// runtime.
pub struct PathFinder {
    cache: Mutex<PathCache>,
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl PathFinder {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_PATH_CACHE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let cap = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(1).unwrap());
        Self {
            cache: Mutex::new(PathCache {
                entries: LruCache::new(cap),
                stats: PathCacheStats::default(),
            }),
        }
    }

    /// Shortest path between `start` and `end` over `edges` (undirected).
    ///
    /// BFS guarantees the returned path has the minimum number of edges.
    /// Results are memoized under the symmetric key `(min, max)`, so the
    /// `(b, a)` query resolves to the `(a, b)` entry.
    pub fn find_path(&self, start: NodeKey, end: NodeKey, edges: &[Connection]) -> PathResult {
        let key = if start <= end { (start, end) } else { (end, start) };

        {
            let mut cache = self.cache.lock().expect("path cache poisoned");
            let PathCache { entries, stats } = &mut *cache;
            if let Some(cached) = entries.get(&key) {
                stats.hits += 1;
                return cached.clone();
            }
            stats.misses += 1;
        }

        let result = bfs(start, end, edges);

        let mut cache = self.cache.lock().expect("path cache poisoned");
        cache.entries.put(key, result.clone());
        result
    }

    /// Drop every cached path. Must be called whenever the board's edge set
    /// changes.
    pub fn clear(&self) {
        let mut cache = self.cache.lock().expect("path cache poisoned");
        cache.entries.clear();
        tracing::debug!("path cache cleared");
    }

    pub fn stats(&self) -> PathCacheStats {
        self.cache.lock().expect("path cache poisoned").stats
    }

    #[cfg(test)]
    pub(crate) fn cached_len(&self) -> usize {
        self.cache.lock().unwrap().entries.len()
    }
}

/// Plain breadth-first search. Neighbor expansion order is edge-list order,
/// which makes tie-breaks between equal-length paths deterministic.
fn bfs(start: NodeKey, end: NodeKey, edges: &[Connection]) -> PathResult {
    if start == end {
        return PathResult {
            found: true,
            path: vec![start],
        };
    }

    let mut adjacency: IndexMap<NodeKey, Vec<NodeKey>> = IndexMap::new();
    for edge in edges {
        adjacency.entry(edge.source).or_default().push(edge.target);
        adjacency.entry(edge.target).or_default().push(edge.source);
    }

    // An endpoint with no incident edge cannot be on any path.
    if !adjacency.contains_key(&start) || !adjacency.contains_key(&end) {
        return PathResult::not_found();
    }

    let mut queue: VecDeque<(NodeKey, Vec<NodeKey>)> = VecDeque::new();
    let mut visited: HashSet<NodeKey> = HashSet::new();
    visited.insert(start);
    queue.push_back((start, vec![start]));

    while let Some((node, path)) = queue.pop_front() {
        if node == end {
            return PathResult { found: true, path };
        }
        if let Some(neighbors) = adjacency.get(&node) {
            for &next in neighbors {
                if visited.insert(next) {
                    let mut next_path = path.clone();
                    next_path.push(next);
                    queue.push_back((next, next_path));
                }
            }
        }
    }

    PathResult::not_found()
}

// ============================================================================
// Tests
// ============================================================================
