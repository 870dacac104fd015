//! Match Engine
//!
//! Multi-stage text search over a cached entity corpus. Each stage scores
//! independently — exact/normalized equality, edit-distance and containment,
//! word overlap — and the per-stage matches are merged, deduplicated by
//! `(kind, id)` keeping the highest score, and ranked. When nothing matches
//! exactly, near-miss titles are offered as typo suggestions.

use std::collections::HashMap;

use crate::config::SearchConfig;
use crate::core::entity::{Entity, EntityKind, NodeKey};

use super::normalize::{is_stop_word, normalize, normalize_punct, significant_words, similarity};

/// Stage weights per the scoring model. Exact primary-title hits score 1.0,
/// alternate-title hits 0.95; the later stages are capped below that so an
/// exact hit always ranks first.
const ALT_EXACT_SCORE: f64 = 0.95;
const FUZZY_WEIGHT: f64 = 0.9;
const CONTAINMENT_WEIGHT: f64 = 0.8;
const CONTAINMENT_RATIO_CAP: f64 = 0.8;
const CONTAINMENT_MIN_QUERY_CHARS: usize = 4;
const WORD_OVERLAP_WEIGHT: f64 = 0.6;
const WORD_OVERLAP_MIN_RATIO: f64 = 0.5;
const MAX_SUGGESTIONS: usize = 3;

// ============================================================================
// Types
// ============================================================================

/// Per-call search options; thresholds and limits live in [`SearchConfig`].
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Restrict results to one entity kind.
    pub kind: Option<EntityKind>,
    /// Restrict results to productions carrying at least one of these genre
    /// ids. People carry no genres and are excluded while this is set.
    pub genres: Option<Vec<u64>>,
    /// Result list cap after merge and ranking.
    pub max_results: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            kind: None,
            genres: None,
            max_results: 50,
        }
    }
}

/// Which stage produced a candidate's winning score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStage {
    Exact,
    Fuzzy,
    WordOverlap,
}

/// An entity with its match score, ephemeral per search call.
#[derive(Debug, Clone)]
pub struct ScoredEntity {
    pub entity: Entity,
    pub score: f64,
    pub stage: MatchStage,
}

/// A near-miss title offered when the query matched nothing exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub title: String,
    pub similarity: f64,
}

/// Everything a search call produces.
#[derive(Debug, Clone, Default)]
pub struct SearchOutcome {
    pub results: Vec<ScoredEntity>,
    pub exact_match: Option<Entity>,
    pub suggestions: Vec<Suggestion>,
}

// ============================================================================
// Engine
// ============================================================================

/// Staged fuzzy matcher over an in-memory corpus. Pure and synchronous.
pub struct MatchEngine {
    config: SearchConfig,
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl MatchEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Run the full pipeline for one query.
    ///
    /// Queries shorter than the configured minimum or consisting of a stop
    /// word short-circuit to an empty outcome before any stage runs.
    pub fn search(&self, term: &str, corpus: &[Entity], options: &MatchOptions) -> SearchOutcome {
        let query = normalize(term);
        if query.chars().count() < self.config.min_term_len || is_stop_word(&query) {
            tracing::debug!(term, "query below minimum signal, skipping search");
            return SearchOutcome::default();
        }
        let query_punct = normalize_punct(&query);

        let mut best: HashMap<NodeKey, ScoredEntity> = HashMap::new();
        let mut exact_hits: Vec<(f64, Entity)> = Vec::new();

        for entity in corpus {
            if !self.passes_filters(entity, options) {
                continue;
            }

            if let Some(score) = exact_score(&query, &query_punct, entity) {
                record(&mut best, entity, score, MatchStage::Exact);
                exact_hits.push((score, entity.clone()));
                // Exact hits skip the remaining stages.
                continue;
            }

            if let Some(score) = self.fuzzy_score(&query_punct, entity) {
                record(&mut best, entity, score, MatchStage::Fuzzy);
            }
            if let Some(score) = word_overlap_score(&query_punct, entity) {
                record(&mut best, entity, score, MatchStage::WordOverlap);
            }
        }

        let exact_match = top_exact(exact_hits);
        let suggestions = if exact_match.is_none() {
            self.suggestions(&query, corpus, options)
        } else {
            Vec::new()
        };

        let mut results: Vec<ScoredEntity> = best.into_values().collect();
        results.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    b.entity
                        .popularity()
                        .partial_cmp(&a.entity.popularity())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.entity.key().cmp(&b.entity.key()))
        });
        results.truncate(options.max_results);

        tracing::debug!(
            term,
            results = results.len(),
            exact = exact_match.is_some(),
            "search complete"
        );
        SearchOutcome {
            results,
            exact_match,
            suggestions,
        }
    }

    fn passes_filters(&self, entity: &Entity, options: &MatchOptions) -> bool {
        if entity.is_malformed() {
            return false;
        }
        if let Some(kind) = options.kind {
            if entity.kind() != kind {
                return false;
            }
        }
        if let Some(genres) = &options.genres {
            if !entity.genre_ids().iter().any(|g| genres.contains(g)) {
                return false;
            }
        }
        true
    }

    /// Edit-distance and containment stage. Scores the best of
    /// `similarity * 0.9` (at or above the fuzzy threshold) and the
    /// containment bonus `min(qlen/tlen, 0.8) * 0.8` for queries of four or
    /// more characters contained in the title.
    fn fuzzy_score(&self, query_punct: &str, entity: &Entity) -> Option<f64> {
        let query_chars = query_punct.chars().count();
        let mut best: Option<f64> = None;

        for title in entity_titles(entity) {
            let title_punct = normalize_punct(title);

            let sim = similarity(query_punct, &title_punct);
            if sim >= self.config.fuzzy_threshold {
                best = max_score(best, sim * FUZZY_WEIGHT);
            }

            if query_chars >= CONTAINMENT_MIN_QUERY_CHARS && title_punct.contains(query_punct) {
                let ratio = query_chars as f64 / title_punct.chars().count().max(1) as f64;
                best = max_score(best, ratio.min(CONTAINMENT_RATIO_CAP) * CONTAINMENT_WEIGHT);
            }
        }
        best
    }

    /// Typo suggestions: titles similar to the raw query (case-folded but
    /// not punctuation-normalized), deduplicated by title, top three.
    fn suggestions(
        &self,
        query: &str,
        corpus: &[Entity],
        options: &MatchOptions,
    ) -> Vec<Suggestion> {
        let cutoff = self.config.suggestion_threshold + 0.1;
        let mut by_title: HashMap<String, f64> = HashMap::new();
        for entity in corpus {
            if !self.passes_filters(entity, options) {
                continue;
            }
            let title = entity.display_title();
            let sim = similarity(query, &normalize(title));
            if sim >= cutoff {
                let slot = by_title.entry(title.to_string()).or_insert(0.0);
                if sim > *slot {
                    *slot = sim;
                }
            }
        }

        let mut suggestions: Vec<Suggestion> = by_title
            .into_iter()
            .map(|(title, similarity)| Suggestion { title, similarity })
            .collect();
        suggestions.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.title.cmp(&b.title))
        });
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}

// ============================================================================
// Stage helpers
// ============================================================================

fn entity_titles(entity: &Entity) -> impl Iterator<Item = &str> {
    std::iter::once(entity.display_title()).chain(entity.alternate_titles())
}

/// Exact stage: 1.0 for literal or punctuation-normalized equality against
/// the primary title, 0.95 against an alternate title/name.
fn exact_score(query: &str, query_punct: &str, entity: &Entity) -> Option<f64> {
    let matches =
        |title: &str| normalize(title) == query || normalize_punct(title) == query_punct;
    if matches(entity.display_title()) {
        return Some(1.0);
    }
    if entity.alternate_titles().into_iter().any(matches) {
        return Some(ALT_EXACT_SCORE);
    }
    None
}

/// Word-overlap stage, multi-word queries only: a query word matches a title
/// word at pairwise similarity ≥ 0.7; the score is the matched ratio times
/// 0.6, kept only at ratio ≥ 0.5.
fn word_overlap_score(query_punct: &str, entity: &Entity) -> Option<f64> {
    let query_words = significant_words(query_punct);
    if query_words.len() < 2 {
        return None;
    }

    let title_punct = normalize_punct(entity.display_title());
    let title_words: Vec<&str> = title_punct.split_whitespace().collect();
    if title_words.is_empty() {
        return None;
    }

    let matched = query_words
        .iter()
        .filter(|qw| title_words.iter().any(|tw| similarity(qw, tw) >= 0.7))
        .count();
    let ratio = matched as f64 / query_words.len() as f64;
    if ratio >= WORD_OVERLAP_MIN_RATIO {
        Some(ratio * WORD_OVERLAP_WEIGHT)
    } else {
        None
    }
}

fn record(best: &mut HashMap<NodeKey, ScoredEntity>, entity: &Entity, score: f64, stage: MatchStage) {
    let key = entity.key();
    match best.get_mut(&key) {
        Some(existing) if existing.score >= score => {}
        Some(existing) => {
            existing.score = score;
            existing.stage = stage;
        }
        None => {
            best.insert(
                key,
                ScoredEntity {
                    entity: entity.clone(),
                    score,
                    stage,
                },
            );
        }
    }
}

fn top_exact(mut hits: Vec<(f64, Entity)>) -> Option<Entity> {
    hits.sort_by(|a, b| {
        b.0.partial_cmp(&a.0)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| {
                b.1.popularity()
                    .partial_cmp(&a.1.popularity())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
    });
    hits.into_iter().next().map(|(_, entity)| entity)
}

fn max_score(current: Option<f64>, candidate: f64) -> Option<f64> {
    match current {
        Some(existing) if existing >= candidate => Some(existing),
        _ => Some(candidate),
    }
}

// ============================================================================
// Tests
// ============================================================================
