//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Deterministic failures of domain rules: bad input, broken stock invariants,
/// products missing the data their category needs.
///
/// Collaborator failures (storage, delivery) are not domain errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// Identifier text that does not parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A category-specific attribute (expiry date, season window) is absent.
    #[error("product {product} has no {attribute}")]
    MissingAttribute {
        product: ProductId,
        attribute: &'static str,
    },
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn missing_attribute(product: ProductId, attribute: &'static str) -> Self {
        Self::MissingAttribute { product, attribute }
    }
}
