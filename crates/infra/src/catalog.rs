use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use orderflow_core::{Entity, OrderId, ProductId};
use orderflow_fulfillment::{CollaboratorError, OrderLoader, ProductWriter};
use orderflow_orders::Order;
use orderflow_products::Product;

/// In-memory product and order tables for dev/tests.
///
/// Orders store product ids only; loading an order joins the current product
/// rows, so a product saved by one order pass is seen by the next.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    products: RwLock<HashMap<ProductId, Product>>,
    orders: RwLock<HashMap<OrderId, Vec<ProductId>>>,
    writes: AtomicUsize,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a product row (does not count as a write).
    pub fn put_product(&self, product: Product) -> Result<(), CollaboratorError> {
        let mut map = self
            .products
            .write()
            .map_err(|_| CollaboratorError::Writer("product table lock poisoned".to_string()))?;
        map.insert(product.id(), product);
        Ok(())
    }

    /// Insert or replace an order referencing existing product ids.
    pub fn put_order(
        &self,
        order_id: OrderId,
        items: Vec<ProductId>,
    ) -> Result<(), CollaboratorError> {
        let mut map = self
            .orders
            .write()
            .map_err(|_| CollaboratorError::Writer("order table lock poisoned".to_string()))?;
        map.insert(order_id, items);
        Ok(())
    }

    pub fn product(&self, product_id: ProductId) -> Option<Product> {
        let map = self.products.read().ok()?;
        map.get(&product_id).cloned()
    }

    pub fn contains_product(&self, product_id: ProductId) -> bool {
        self.products
            .read()
            .map(|map| map.contains_key(&product_id))
            .unwrap_or(false)
    }

    /// Number of `ProductWriter::save` calls served so far.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl OrderLoader for InMemoryCatalog {
    fn load(&self, order_id: OrderId) -> Result<Option<Order>, CollaboratorError> {
        let orders = self
            .orders
            .read()
            .map_err(|_| CollaboratorError::Loader("order table lock poisoned".to_string()))?;
        let Some(item_ids) = orders.get(&order_id) else {
            return Ok(None);
        };

        let products = self
            .products
            .read()
            .map_err(|_| CollaboratorError::Loader("product table lock poisoned".to_string()))?;
        let items = item_ids
            .iter()
            .map(|id| {
                products.get(id).cloned().ok_or_else(|| {
                    CollaboratorError::Loader(format!(
                        "order {order_id} references unknown product {id}"
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Order::new(order_id, items)
            .map(Some)
            .map_err(|e| CollaboratorError::Loader(e.to_string()))
    }
}

impl ProductWriter for InMemoryCatalog {
    fn save(&self, product: &Product) -> Result<(), CollaboratorError> {
        let mut map = self
            .products
            .write()
            .map_err(|_| CollaboratorError::Writer("product table lock poisoned".to_string()))?;
        map.insert(product.id(), product.clone());
        self.writes.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(
            product_id = %product.id(),
            available = product.available_units(),
            lead_time_days = product.lead_time_days(),
            "product saved"
        );
        Ok(())
    }
}

#[cfg(test)]
impl InMemoryCatalog {
    /// Leave the product table lock poisoned by panicking while holding it.
    pub(crate) fn poison_products(&self) {
        let result = std::thread::scope(|s| {
            s.spawn(|| {
                let _guard = self.products.write().unwrap();
                panic!("writer died mid-update");
            })
            .join()
        });
        assert!(result.is_err());
        assert!(self.products.is_poisoned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cable() -> Product {
        Product::standard(ProductId::new(1), "USB Cable", 10, 15).unwrap()
    }

    #[test]
    fn unknown_order_loads_as_none() {
        let catalog = InMemoryCatalog::new();
        assert_eq!(catalog.load(OrderId::new(1)).unwrap(), None);
    }

    #[test]
    fn load_joins_current_product_rows() {
        let catalog = InMemoryCatalog::new();
        catalog.put_product(cable()).unwrap();
        catalog.put_order(OrderId::new(1), vec![ProductId::new(1)]).unwrap();

        let mut updated = cable();
        updated.decrement_available().unwrap();
        catalog.save(&updated).unwrap();

        let order = catalog.load(OrderId::new(1)).unwrap().unwrap();
        assert_eq!(order.items()[0].available_units(), 9);
        assert_eq!(catalog.write_count(), 1);
    }

    #[test]
    fn dangling_product_reference_is_a_loader_error() {
        let catalog = InMemoryCatalog::new();
        catalog.put_order(OrderId::new(1), vec![ProductId::new(42)]).unwrap();

        let err = catalog.load(OrderId::new(1)).unwrap_err();
        assert_eq!(
            err,
            CollaboratorError::Loader("order 1 references unknown product 42".to_string())
        );
    }

    #[test]
    fn duplicate_reference_is_a_loader_error() {
        let catalog = InMemoryCatalog::new();
        catalog.put_product(cable()).unwrap();
        catalog
            .put_order(OrderId::new(1), vec![ProductId::new(1), ProductId::new(1)])
            .unwrap();

        assert!(matches!(
            catalog.load(OrderId::new(1)),
            Err(CollaboratorError::Loader(_))
        ));
    }

    #[test]
    fn put_product_is_not_counted_as_write() {
        let catalog = InMemoryCatalog::new();
        catalog.put_product(cable()).unwrap();
        assert_eq!(catalog.write_count(), 0);
        assert!(catalog.contains_product(ProductId::new(1)));
        assert_eq!(catalog.product(ProductId::new(1)), Some(cable()));
    }

    #[test]
    fn put_product_reports_a_poisoned_table() {
        let catalog = InMemoryCatalog::new();
        catalog.poison_products();

        let err = catalog.put_product(cable()).unwrap_err();
        assert_eq!(
            err,
            CollaboratorError::Writer("product table lock poisoned".to_string())
        );
    }
}
