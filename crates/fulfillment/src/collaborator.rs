//! Capabilities the engine consumes but does not implement.
//!
//! Implementations must be `Send + Sync` so one engine can be shared across
//! request handlers. Every call is synchronous and may fail; the core never
//! retries.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;

use orderflow_core::OrderId;
use orderflow_orders::Order;
use orderflow_products::Product;

/// Failure reported by a collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("order loader failed: {0}")]
    Loader(String),

    #[error("product writer failed: {0}")]
    Writer(String),

    #[error("notifier failed: {0}")]
    Notifier(String),
}

/// Loads an order together with the current state of its products.
pub trait OrderLoader: Send + Sync {
    /// `Ok(None)` when no order has this identifier.
    fn load(&self, order_id: OrderId) -> Result<Option<Order>, CollaboratorError>;
}

/// Persists a product's inventory state. Saving the same state twice is harmless.
pub trait ProductWriter: Send + Sync {
    fn save(&self, product: &Product) -> Result<(), CollaboratorError>;
}

/// Delivers customer-facing notifications.
pub trait Notifier: Send + Sync {
    fn send_delay(&self, lead_time_days: u32, product_name: &str) -> Result<(), CollaboratorError>;

    fn send_expiration(
        &self,
        product_name: &str,
        expiry_date: NaiveDate,
    ) -> Result<(), CollaboratorError>;

    fn send_out_of_stock(&self, product_name: &str) -> Result<(), CollaboratorError>;
}

impl<T> OrderLoader for Arc<T>
where
    T: OrderLoader + ?Sized,
{
    fn load(&self, order_id: OrderId) -> Result<Option<Order>, CollaboratorError> {
        (**self).load(order_id)
    }
}

impl<T> ProductWriter for Arc<T>
where
    T: ProductWriter + ?Sized,
{
    fn save(&self, product: &Product) -> Result<(), CollaboratorError> {
        (**self).save(product)
    }
}

impl<T> Notifier for Arc<T>
where
    T: Notifier + ?Sized,
{
    fn send_delay(&self, lead_time_days: u32, product_name: &str) -> Result<(), CollaboratorError> {
        (**self).send_delay(lead_time_days, product_name)
    }

    fn send_expiration(
        &self,
        product_name: &str,
        expiry_date: NaiveDate,
    ) -> Result<(), CollaboratorError> {
        (**self).send_expiration(product_name, expiry_date)
    }

    fn send_out_of_stock(&self, product_name: &str) -> Result<(), CollaboratorError> {
        (**self).send_out_of_stock(product_name)
    }
}
