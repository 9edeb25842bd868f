//! JSON seed data for the in-memory catalog.
//!
//! ```json
//! {
//!   "products": [
//!     { "id": 1, "name": "USB Cable", "type": "NORMAL", "available": 30, "lead_time": 15 }
//!   ],
//!   "orders": [ { "id": 1, "items": [1] } ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use orderflow_core::{Entity, OrderId, ProductId};
use orderflow_fulfillment::CollaboratorError;
use orderflow_products::Product;

use crate::catalog::InMemoryCatalog;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed seed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("product {0} is defined more than once")]
    DuplicateProduct(ProductId),

    #[error("order {0} is defined more than once")]
    DuplicateOrder(OrderId),

    #[error("failed to store seed rows: {0}")]
    Catalog(#[from] CollaboratorError),

    #[error("order {order_id} references unknown product {product_id}")]
    UnknownProduct {
        order_id: OrderId,
        product_id: ProductId,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderSeed {
    pub id: OrderId,
    pub items: Vec<ProductId>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSeed {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub orders: Vec<OrderSeed>,
}

impl CatalogSeed {
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Check cross-references, then load everything into `catalog`.
    pub fn load_into(self, catalog: &InMemoryCatalog) -> Result<(), SeedError> {
        let mut product_ids = HashSet::with_capacity(self.products.len());
        for product in &self.products {
            if !product_ids.insert(product.id()) {
                return Err(SeedError::DuplicateProduct(product.id()));
            }
        }

        let mut order_ids = HashSet::with_capacity(self.orders.len());
        for order in &self.orders {
            if !order_ids.insert(order.id) {
                return Err(SeedError::DuplicateOrder(order.id));
            }
            if let Some(missing) = order.items.iter().find(|id| !product_ids.contains(*id)) {
                return Err(SeedError::UnknownProduct {
                    order_id: order.id,
                    product_id: *missing,
                });
            }
        }

        let (products, orders) = (self.products.len(), self.orders.len());
        for product in self.products {
            catalog.put_product(product)?;
        }
        for order in self.orders {
            catalog.put_order(order.id, order.items)?;
        }
        tracing::info!(products, orders, "catalog seeded");
        Ok(())
    }
}

impl InMemoryCatalog {
    pub fn from_seed(seed: CatalogSeed) -> Result<Self, SeedError> {
        let catalog = InMemoryCatalog::new();
        seed.load_into(&catalog)?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderflow_fulfillment::OrderLoader;

    const SEED: &str = r#"{
        "products": [
            { "id": 1, "name": "USB Cable", "type": "NORMAL", "available": 30, "lead_time": 15 },
            { "id": 2, "name": "Milk", "type": "EXPIRABLE", "available": 6, "lead_time": 0,
              "expiry_date": "2024-01-10" },
            { "id": 3, "name": "Watermelon", "type": "SEASONAL", "available": 30, "lead_time": 15,
              "season_start_date": "2024-06-01", "season_end_date": "2024-08-31" }
        ],
        "orders": [ { "id": 10, "items": [1, 2, 3] } ]
    }"#;

    #[test]
    fn seed_loads_products_and_orders() {
        let catalog = InMemoryCatalog::from_seed(CatalogSeed::from_json(SEED).unwrap()).unwrap();

        let order = catalog.load(OrderId::new(10)).unwrap().unwrap();
        assert_eq!(order.len(), 3);
        assert_eq!(catalog.product(ProductId::new(2)).unwrap().name(), "Milk");
    }

    #[test]
    fn dangling_order_item_is_rejected() {
        let seed = CatalogSeed::from_json(r#"{"orders": [{"id": 1, "items": [5]}]}"#).unwrap();

        let err = InMemoryCatalog::from_seed(seed).unwrap_err();
        assert!(matches!(
            err,
            SeedError::UnknownProduct { product_id, .. } if product_id == ProductId::new(5)
        ));
    }

    #[test]
    fn duplicate_product_is_rejected() {
        let seed = CatalogSeed::from_json(
            r#"{"products": [
                { "id": 1, "name": "A", "type": "NORMAL", "available": 1, "lead_time": 0 },
                { "id": 1, "name": "B", "type": "NORMAL", "available": 1, "lead_time": 0 }
            ]}"#,
        )
        .unwrap();

        assert!(matches!(
            InMemoryCatalog::from_seed(seed),
            Err(SeedError::DuplicateProduct(_))
        ));
    }

    #[test]
    fn invalid_product_row_fails_to_parse() {
        let err = CatalogSeed::from_json(
            r#"{"products": [{ "id": 1, "name": "A", "type": "BUNDLE", "available": 1, "lead_time": 0 }]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SeedError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = CatalogSeed::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SeedError::Io(_)));
    }

    #[test]
    fn poisoned_catalog_fails_the_seed() {
        let catalog = InMemoryCatalog::new();
        catalog.poison_products();

        let err = CatalogSeed::from_json(SEED).unwrap().load_into(&catalog).unwrap_err();
        assert!(matches!(err, SeedError::Catalog(CollaboratorError::Writer(_))));
        assert_eq!(catalog.load(OrderId::new(10)).unwrap(), None);
    }
}
