//! Search Orchestrator
//!
//! Composes the match engine with the connectability oracle and result-set
//! post-processing: every result must carry its kind-appropriate image, big
//! result sets get capped, and — when a game context is supplied — each
//! result's playability is checked and recorded in a shared connectable-items
//! map so the UI never has to re-query.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use crate::config::EngineConfig;
use crate::core::catalog::CatalogService;
use crate::core::entity::{Entity, NodeKey};
use crate::core::graph::{ConnectabilityOracle, StartingPair};

use super::engine::{MatchEngine, MatchOptions, ScoredEntity, SearchOutcome};

/// What the candidate must connect against: the starting pair before the
/// first placement, the full board afterwards.
#[derive(Debug, Clone)]
pub enum GameContext {
    Initial(StartingPair),
    Board(Vec<Entity>),
}

/// Shared map of connectability outcomes keyed by `(kind, id)`.
///
/// Append/merge only during a session; cleared when a new round starts. An
/// explicit per-session object rather than a module-level global.
#[derive(Default)]
pub struct ConnectableItems {
    inner: Mutex<HashMap<NodeKey, bool>>,
}

impl ConnectableItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, key: NodeKey, connectable: bool) {
        self.inner
            .lock()
            .expect("connectable map poisoned")
            .insert(key, connectable);
    }

    pub fn get(&self, key: NodeKey) -> Option<bool> {
        self.inner
            .lock()
            .expect("connectable map poisoned")
            .get(&key)
            .copied()
    }

    pub fn snapshot(&self) -> HashMap<NodeKey, bool> {
        self.inner.lock().expect("connectable map poisoned").clone()
    }

    pub fn clear(&self) {
        self.inner.lock().expect("connectable map poisoned").clear();
    }
}

/// Front door for player input: match, filter, annotate.
pub struct SearchOrchestrator {
    engine: MatchEngine,
    oracle: ConnectabilityOracle,
    connectable: ConnectableItems,
    small_result_cutoff: usize,
    display_cap: usize,
}

impl SearchOrchestrator {
    pub fn new(config: &EngineConfig, catalog: Arc<dyn CatalogService>) -> Self {
        Self {
            engine: MatchEngine::new(config.search.clone()),
            oracle: ConnectabilityOracle::new(catalog),
            connectable: ConnectableItems::new(),
            small_result_cutoff: config.search.small_result_cutoff,
            display_cap: config.search.display_cap,
        }
    }

    /// Search the cached corpus and prepare the result set for display.
    ///
    /// With a game context, every surviving result is checked for
    /// playability and the boolean is written into the connectable-items
    /// map; the result list itself is not filtered by playability, the UI
    /// renders unplayable entries greyed out.
    pub async fn search_local(
        &self,
        term: &str,
        corpus: &[Entity],
        options: &MatchOptions,
        context: Option<&GameContext>,
    ) -> SearchOutcome {
        let mut outcome = self.engine.search(term, corpus, options);
        outcome.results.retain(|r| r.entity.image_path().is_some());
        outcome.results = self.process_results(outcome.results);

        if let Some(context) = context {
            self.annotate_connectability(&outcome.results, context).await;
        }
        outcome
    }

    /// Read back an annotation for the UI.
    pub fn connectable(&self, key: NodeKey) -> Option<bool> {
        self.connectable.get(key)
    }

    pub fn connectable_items(&self) -> &ConnectableItems {
        &self.connectable
    }

    /// Size-adaptive post-processing: small sets pass through untouched,
    /// larger ones are deduplicated by key and capped for display.
    fn process_results(&self, results: Vec<ScoredEntity>) -> Vec<ScoredEntity> {
        if results.len() <= self.small_result_cutoff {
            return results;
        }
        let mut seen: HashSet<NodeKey> = HashSet::new();
        let mut capped: Vec<ScoredEntity> = results
            .into_iter()
            .filter(|r| seen.insert(r.entity.key()))
            .collect();
        capped.truncate(self.display_cap);
        capped
    }

    async fn annotate_connectability(&self, results: &[ScoredEntity], context: &GameContext) {
        match context {
            GameContext::Initial(pair) => {
                for result in results {
                    let ok = self
                        .oracle
                        .check_initial_connectability(&result.entity, pair)
                        .await;
                    self.connectable.record(result.entity.key(), ok);
                }
            }
            GameContext::Board(board) => {
                let entities: Vec<Entity> =
                    results.iter().map(|r| r.entity.clone()).collect();
                let outcomes = self
                    .oracle
                    .batch_check_connectability(&entities, board)
                    .await;
                for (key, ok) in outcomes {
                    self.connectable.record(key, ok);
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
