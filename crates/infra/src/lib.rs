//! Infrastructure layer: collaborator implementations for the fulfillment core.

pub mod catalog;
pub mod notifier;
pub mod seed;

pub use catalog::InMemoryCatalog;
pub use notifier::{LoggingNotifier, Notification, RecordingNotifier};
pub use seed::{CatalogSeed, OrderSeed, SeedError};
