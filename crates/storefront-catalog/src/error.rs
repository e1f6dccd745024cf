//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while reading or projecting the catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// No product carries this slug.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// No category carries this id.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// A product record breaks a catalog invariant.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    /// Two products share a slug.
    #[error("Duplicate product slug: {0}")]
    DuplicateSlug(String),

    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    /// A sort key string that maps to no sort option.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// An amount too large to represent in minor units.
    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Failure reported by a catalog backend.
    #[error("Catalog backend error: {0}")]
    Backend(String),
}

impl CatalogError {
    /// Check if this error is the normal "nothing here" outcome.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CatalogError::ProductNotFound(_) | CatalogError::CategoryNotFound(_)
        )
    }

    pub(crate) fn invalid(id: impl Into<String>, reason: impl Into<String>) -> Self {
        CatalogError::InvalidProduct {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Backend(e.to_string())
    }
}

/// Result alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
