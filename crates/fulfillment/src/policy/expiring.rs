use orderflow_core::{DomainError, Entity};
use orderflow_products::{Product, ProductCategory};

use super::{FulfillmentContext, FulfillmentPolicy, decrement_and_save};
use crate::error::FulfillmentError;
use crate::outcome::FulfillmentOutcome;

/// Perishables: sellable only while in stock and strictly before the expiry date.
///
/// An item expiring today is already expired.
#[derive(Debug, Default, Copy, Clone)]
pub struct ExpiringPolicy;

impl FulfillmentPolicy for ExpiringPolicy {
    fn category(&self) -> ProductCategory {
        ProductCategory::Expiring
    }

    fn apply(
        &self,
        product: &mut Product,
        ctx: &FulfillmentContext<'_>,
    ) -> Result<FulfillmentOutcome, FulfillmentError> {
        let expiry_date = product
            .expiry_date()
            .ok_or_else(|| DomainError::missing_attribute(product.id(), "expiry date"))?;

        if product.has_stock() && expiry_date > ctx.today() {
            return decrement_and_save(product, ctx);
        }

        product.mark_unavailable();
        ctx.writer().save(product)?;
        ctx.notifier().send_expiration(product.name(), expiry_date)?;
        tracing::info!(
            product_id = %product.id(),
            name = product.name(),
            %expiry_date,
            "expired or sold out, expiration notified"
        );
        Ok(FulfillmentOutcome::ExpiredNotified { expiry_date })
    }
}
