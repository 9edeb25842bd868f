use std::sync::Arc;

use orderflow_core::OrderId;
use orderflow_fulfillment::{
    Clock, FulfillmentError, FulfillmentSummary, Notifier, OrderFulfillmentEngine, PolicyRegistry,
};
use orderflow_infra::InMemoryCatalog;

type Engine = OrderFulfillmentEngine<
    Arc<InMemoryCatalog>,
    Arc<InMemoryCatalog>,
    Arc<dyn Notifier>,
    Arc<dyn Clock>,
>;

/// Shared request-handling state: one engine over the in-memory catalog.
pub struct AppServices {
    engine: Engine,
}

impl AppServices {
    /// The catalog serves as both order loader and product writer.
    pub fn new(
        catalog: Arc<InMemoryCatalog>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let engine = OrderFulfillmentEngine::with_clock(
            PolicyRegistry::with_defaults(),
            catalog.clone(),
            catalog,
            notifier,
            clock,
        );
        let categories: Vec<String> = engine
            .registry()
            .categories()
            .map(|c| c.to_string())
            .collect();
        tracing::info!(?categories, "fulfillment engine ready");
        Self { engine }
    }

    pub fn process_order(&self, order_id: OrderId) -> Result<FulfillmentSummary, FulfillmentError> {
        self.engine.process(order_id)
    }
}
