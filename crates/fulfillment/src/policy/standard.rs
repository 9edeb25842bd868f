use orderflow_core::Entity;
use orderflow_products::{Product, ProductCategory};

use super::{FulfillmentContext, FulfillmentPolicy, decrement_and_save, save_lead_time_and_notify};
use crate::error::FulfillmentError;
use crate::outcome::FulfillmentOutcome;

/// Plain stock items: sell from stock, otherwise announce the restock delay.
#[derive(Debug, Default, Copy, Clone)]
pub struct StandardPolicy;

impl FulfillmentPolicy for StandardPolicy {
    fn category(&self) -> ProductCategory {
        ProductCategory::Standard
    }

    fn apply(
        &self,
        product: &mut Product,
        ctx: &FulfillmentContext<'_>,
    ) -> Result<FulfillmentOutcome, FulfillmentError> {
        if product.has_stock() {
            return decrement_and_save(product, ctx);
        }

        let lead_time_days = product.lead_time_days();
        if lead_time_days == 0 {
            // Out of stock with no restock lead time: no save, no notification.
            tracing::info!(
                product_id = %product.id(),
                name = product.name(),
                "out of stock with no lead time, nothing to do"
            );
            return Ok(FulfillmentOutcome::Unchanged);
        }

        save_lead_time_and_notify(product, lead_time_days, ctx)
    }
}
