//! Fulfillment policies: one decision rule per product category.
//!
//! A policy is applied exactly once per item per order pass. It mutates the
//! borrowed product, persists it through the writer and, depending on the
//! branch, sends one notification. Side effects are committed before `apply`
//! returns and are never rolled back; a failure surfaces to the engine as-is.
//!
//! Every branch saves before it notifies, so a notification is never sent for
//! a stock change that did not persist.

use core::fmt;

use chrono::NaiveDate;

use orderflow_core::Entity;
use orderflow_products::{Product, ProductCategory};

use crate::collaborator::{Notifier, ProductWriter};
use crate::error::FulfillmentError;
use crate::outcome::FulfillmentOutcome;

mod expiring;
mod seasonal;
mod standard;

pub use expiring::ExpiringPolicy;
pub use seasonal::SeasonalPolicy;
pub use standard::StandardPolicy;

/// What a policy may touch while deciding one item.
#[derive(Clone, Copy)]
pub struct FulfillmentContext<'a> {
    today: NaiveDate,
    writer: &'a dyn ProductWriter,
    notifier: &'a dyn Notifier,
}

impl<'a> FulfillmentContext<'a> {
    pub fn new(today: NaiveDate, writer: &'a dyn ProductWriter, notifier: &'a dyn Notifier) -> Self {
        Self {
            today,
            writer,
            notifier,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn writer(&self) -> &'a dyn ProductWriter {
        self.writer
    }

    pub fn notifier(&self) -> &'a dyn Notifier {
        self.notifier
    }
}

impl fmt::Debug for FulfillmentContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FulfillmentContext")
            .field("today", &self.today)
            .finish_non_exhaustive()
    }
}

/// Decision rule for one product category.
///
/// Implementations hold no per-call state, so resolving the same policy twice
/// always yields the same behavior.
pub trait FulfillmentPolicy: Send + Sync + fmt::Debug {
    /// Category this policy serves (its registry key).
    fn category(&self) -> ProductCategory;

    /// Decide and commit the outcome for one item.
    fn apply(
        &self,
        product: &mut Product,
        ctx: &FulfillmentContext<'_>,
    ) -> Result<FulfillmentOutcome, FulfillmentError>;
}

/// Shared branch: take one unit and persist.
fn decrement_and_save(
    product: &mut Product,
    ctx: &FulfillmentContext<'_>,
) -> Result<FulfillmentOutcome, FulfillmentError> {
    product.decrement_available()?;
    ctx.writer().save(product)?;
    tracing::debug!(
        product_id = %product.id(),
        name = product.name(),
        category = %product.category(),
        remaining = product.available_units(),
        "stock available, decremented"
    );
    Ok(FulfillmentOutcome::Decremented)
}

/// Shared branch: persist the lead time and tell the customer about the delay.
fn save_lead_time_and_notify(
    product: &mut Product,
    lead_time_days: u32,
    ctx: &FulfillmentContext<'_>,
) -> Result<FulfillmentOutcome, FulfillmentError> {
    product.set_lead_time_days(lead_time_days);
    ctx.writer().save(product)?;
    ctx.notifier().send_delay(lead_time_days, product.name())?;
    tracing::info!(
        product_id = %product.id(),
        name = product.name(),
        category = %product.category(),
        lead_time_days,
        "out of stock, delay notified"
    );
    Ok(FulfillmentOutcome::DelayNotified { lead_time_days })
}
