//! Core engine modules: the entity model, the catalog interface, the
//! connectivity graph, and local search.

pub mod catalog;
pub mod entity;
pub mod error;
pub mod graph;
pub mod logging;
pub mod search;
