use std::collections::HashSet;

use orderflow_core::{AggregateRoot, DomainError, DomainResult, Entity, OrderId};
use orderflow_products::Product;

/// Aggregate root: customer Order.
///
/// Items are unique by product identity. Their order is storage order only;
/// processing one item never depends on another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    items: Vec<Product>,
}

impl Order {
    pub fn new(id: OrderId, items: impl IntoIterator<Item = Product>) -> DomainResult<Self> {
        let items: Vec<Product> = items.into_iter().collect();

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(DomainError::validation(format!(
                    "order {id} references product {} more than once",
                    item.id()
                )));
            }
        }

        Ok(Self { id, items })
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Release the items, e.g. to hand them back to a store.
    pub fn into_items(self) -> Vec<Product> {
        self.items
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl AggregateRoot for Order {
    type Member = Product;

    fn members(&self) -> &[Self::Member] {
        &self.items
    }

    fn members_mut(&mut self) -> &mut [Self::Member] {
        &mut self.items
    }
}
