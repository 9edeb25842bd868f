use thiserror::Error;

use orderflow_core::{DomainError, OrderId};
use orderflow_products::{ProductCategory, UnknownCategory};

use crate::collaborator::CollaboratorError;

/// Error returned by policies, the registry and the engine.
///
/// The variants split by who has to act on them:
///
/// - `OrderNotFound`: the caller asked for an order that does not exist
/// - `UnsupportedCategory` / `InvalidProduct`: the catalog data is malformed
/// - `DuplicatePolicy`: the registry was wired incorrectly at startup
/// - `Collaborator`: a loader, writer or notifier failed
#[derive(Debug, Error)]
pub enum FulfillmentError {
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("Unsupported product type: {0}")]
    UnsupportedCategory(String),

    #[error("a policy is already registered for product type {0}")]
    DuplicatePolicy(ProductCategory),

    #[error("invalid product: {0}")]
    InvalidProduct(#[from] DomainError),

    #[error(transparent)]
    Collaborator(#[from] CollaboratorError),
}

impl From<UnknownCategory> for FulfillmentError {
    fn from(value: UnknownCategory) -> Self {
        FulfillmentError::UnsupportedCategory(value.0)
    }
}
