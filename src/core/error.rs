//! Catalog Error Types
//!
//! The only error type that crosses a module boundary in this engine. Per the
//! failure policy, catalog errors are absorbed at the point of use: a failed
//! fetch denies the connection or drops the item, it never propagates to the
//! caller of a public operation.

use thiserror::Error;

use super::entity::EntityKind;

/// Errors from the external catalog service.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("network error: {0}")]
    Network(String),

    #[error("catalog returned HTTP status {0}")]
    Status(u16),

    #[error("{kind} {id} not found in catalog")]
    NotFound { kind: EntityKind, id: u64 },

    #[error("malformed catalog payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl CatalogError {
    pub fn not_found(kind: EntityKind, id: u64) -> Self {
        CatalogError::NotFound { kind, id }
    }
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
