//! Order-level orchestration.
//!
//! ```text
//! order id
//!   ↓
//! 1. Load the order (NotFound stops here, nothing else is called)
//!   ↓
//! 2. Read today's date once for the whole pass
//!   ↓
//! 3. For each item: resolve its policy, apply it (save + maybe notify)
//!   ↓
//! 4. Return the summary
//! ```
//!
//! The first failing item aborts the pass. Items processed before it keep their
//! committed side effects; there is no rollback.

use orderflow_core::{AggregateRoot, Entity, OrderId};

use crate::clock::{Clock, SystemClock};
use crate::collaborator::{Notifier, OrderLoader, ProductWriter};
use crate::error::FulfillmentError;
use crate::outcome::{FulfillmentSummary, ItemOutcome};
use crate::policy::FulfillmentContext;
use crate::registry::PolicyRegistry;

/// Runs one order at a time through the policy registry.
///
/// Generic over its collaborators so tests can use in-memory doubles and the
/// HTTP layer can share one engine behind an `Arc`.
#[derive(Debug)]
pub struct OrderFulfillmentEngine<L, W, N, C = SystemClock> {
    registry: PolicyRegistry,
    loader: L,
    writer: W,
    notifier: N,
    clock: C,
}

impl<L, W, N> OrderFulfillmentEngine<L, W, N, SystemClock> {
    pub fn new(registry: PolicyRegistry, loader: L, writer: W, notifier: N) -> Self {
        Self::with_clock(registry, loader, writer, notifier, SystemClock)
    }
}

impl<L, W, N, C> OrderFulfillmentEngine<L, W, N, C> {
    pub fn with_clock(registry: PolicyRegistry, loader: L, writer: W, notifier: N, clock: C) -> Self {
        Self {
            registry,
            loader,
            writer,
            notifier,
            clock,
        }
    }

    pub fn registry(&self) -> &PolicyRegistry {
        &self.registry
    }
}

impl<L, W, N, C> OrderFulfillmentEngine<L, W, N, C>
where
    L: OrderLoader,
    W: ProductWriter,
    N: Notifier,
    C: Clock,
{
    /// Process every item of `order_id` and summarize what happened.
    pub fn process(&self, order_id: OrderId) -> Result<FulfillmentSummary, FulfillmentError> {
        let span = tracing::info_span!("process_order", %order_id);
        let _guard = span.enter();
        tracing::info!("processing order");

        let mut order = self
            .loader
            .load(order_id)?
            .ok_or(FulfillmentError::OrderNotFound(order_id))?;
        tracing::debug!(items = order.len(), "order loaded");

        let ctx = FulfillmentContext::new(self.clock.today(), &self.writer, &self.notifier);
        let mut outcomes = Vec::with_capacity(order.len());

        for product in order.members_mut() {
            tracing::debug!(
                product_id = %product.id(),
                name = product.name(),
                category = %product.category(),
                "processing item"
            );
            let policy = self.registry.resolve(product.category())?;
            let outcome = policy.apply(product, &ctx)?;
            outcomes.push(ItemOutcome {
                product_id: product.id(),
                outcome,
            });
        }

        tracing::info!(items = outcomes.len(), "order processed");
        Ok(FulfillmentSummary { order_id, outcomes })
    }
}
