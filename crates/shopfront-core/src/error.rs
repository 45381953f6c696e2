//! Error types for the Shopfront workspace.

use serde::{Deserialize, Serialize};
use shopfront_types::CatalogError;
use thiserror::Error;

/// A shared error type for the whole workspace.
///
/// Navigation transitions are total and never error, and per-viewer
/// refusals (wrong owner, expired view, stale control) are ordinary
/// outcomes modeled by the gateway's `Rejection` type, not errors. These
/// variants cover construction-time validation and genuine failures.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum ShopfrontError {
    /// Catalog construction failed validation (empty catalog, duplicate
    /// item id).
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Page size must be at least 1.
    #[error("invalid page size {given}: must be at least 1")]
    InvalidPageSize { given: usize },

    /// The host messaging interface reported a failure. Stored session
    /// state is never mutated on this path, so a retry is safe.
    #[error("host error: {0}")]
    Host(String),

    /// Internal error (should not happen in normal operation).
    #[error("internal error: {0}")]
    Internal(String),
}

impl ShopfrontError {
    /// Creates a Host error.
    pub fn host(message: impl Into<String>) -> Self {
        Self::Host(message.into())
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Result type alias using [`ShopfrontError`].
pub type Result<T> = std::result::Result<T, ShopfrontError>;
