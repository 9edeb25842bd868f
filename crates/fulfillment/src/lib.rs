//! Order fulfillment: per-category policies, the registry that dispatches to
//! them, and the engine that runs one order through both.
//!
//! Everything here is synchronous and request-scoped. Loading orders, saving
//! products and delivering notifications are collaborator concerns expressed as
//! traits in [`collaborator`]; the `orderflow-infra` crate provides in-memory
//! implementations.

pub mod clock;
pub mod collaborator;
pub mod engine;
pub mod error;
pub mod outcome;
pub mod policy;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_support;

pub use clock::{Clock, FixedClock, SystemClock};
pub use collaborator::{CollaboratorError, Notifier, OrderLoader, ProductWriter};
pub use engine::OrderFulfillmentEngine;
pub use error::FulfillmentError;
pub use outcome::{FulfillmentOutcome, FulfillmentSummary, ItemOutcome};
pub use policy::{
    ExpiringPolicy, FulfillmentContext, FulfillmentPolicy, SeasonalPolicy, StandardPolicy,
};
pub use registry::{PolicyRegistry, PolicyRegistryBuilder};
