use chrono::{Days, NaiveDate};

use orderflow_core::{DomainError, Entity};
use orderflow_products::{Product, ProductCategory, SeasonWindow};

use super::{FulfillmentContext, FulfillmentPolicy, decrement_and_save, save_lead_time_and_notify};
use crate::error::FulfillmentError;
use crate::outcome::FulfillmentOutcome;

/// Seasonal items: sold from stock only inside the season, otherwise delayed
/// if a restock can still arrive before the season closes.
///
/// The two date checks use different bounds and must stay separate:
///
/// - selling from stock needs `start < today < end` (both exclusive)
/// - a delayed delivery needs `start <= today` and `today + lead_time <= end`
#[derive(Debug, Default, Copy, Clone)]
pub struct SeasonalPolicy;

impl SeasonalPolicy {
    fn in_season(season: SeasonWindow, today: NaiveDate) -> bool {
        season.start() < today && today < season.end()
    }

    fn deliverable_with_delay(season: SeasonWindow, today: NaiveDate, lead_time_days: u32) -> bool {
        let season_started = season.start() <= today;
        let arrives_in_season = today
            .checked_add_days(Days::new(u64::from(lead_time_days)))
            .is_some_and(|delivery| delivery <= season.end());
        season_started && arrives_in_season
    }
}

impl FulfillmentPolicy for SeasonalPolicy {
    fn category(&self) -> ProductCategory {
        ProductCategory::Seasonal
    }

    fn apply(
        &self,
        product: &mut Product,
        ctx: &FulfillmentContext<'_>,
    ) -> Result<FulfillmentOutcome, FulfillmentError> {
        let season = product
            .season()
            .ok_or_else(|| DomainError::missing_attribute(product.id(), "season window"))?;
        let today = ctx.today();

        if Self::in_season(season, today) && product.has_stock() {
            return decrement_and_save(product, ctx);
        }

        let lead_time_days = product.lead_time_days();
        if Self::deliverable_with_delay(season, today, lead_time_days) {
            return save_lead_time_and_notify(product, lead_time_days, ctx);
        }

        product.mark_unavailable();
        ctx.writer().save(product)?;
        ctx.notifier().send_out_of_stock(product.name())?;
        tracing::info!(
            product_id = %product.id(),
            name = product.name(),
            season_start = %season.start(),
            season_end = %season.end(),
            "not deliverable within season, out of stock notified"
        );
        Ok(FulfillmentOutcome::OutOfStockNotified)
    }
}
