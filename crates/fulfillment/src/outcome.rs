use chrono::NaiveDate;
use serde::Serialize;

use orderflow_core::{OrderId, ProductId};

/// Which branch a policy took for one item.
///
/// Not persisted; it exists so callers and tests can see what happened.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FulfillmentOutcome {
    /// One unit was taken from stock.
    Decremented,
    /// Out of stock, but deliverable after the lead time; customer notified.
    DelayNotified { lead_time_days: u32 },
    /// Expired (or sold out) perishable; stock zeroed and customer notified.
    ExpiredNotified { expiry_date: NaiveDate },
    /// Not deliverable in its window; stock zeroed and customer notified.
    OutOfStockNotified,
    /// Out of stock with no lead time. Nothing was saved or sent.
    Unchanged,
}

impl FulfillmentOutcome {
    /// Whether this outcome involved a notification.
    pub fn notified(&self) -> bool {
        matches!(
            self,
            FulfillmentOutcome::DelayNotified { .. }
                | FulfillmentOutcome::ExpiredNotified { .. }
                | FulfillmentOutcome::OutOfStockNotified
        )
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct ItemOutcome {
    pub product_id: ProductId,
    #[serde(flatten)]
    pub outcome: FulfillmentOutcome,
}

/// Result of processing one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FulfillmentSummary {
    #[serde(rename = "id")]
    pub order_id: OrderId,
    pub outcomes: Vec<ItemOutcome>,
}

impl FulfillmentSummary {
    pub fn outcome_for(&self, product_id: ProductId) -> Option<FulfillmentOutcome> {
        self.outcomes
            .iter()
            .find(|o| o.product_id == product_id)
            .map(|o| o.outcome)
    }
}
