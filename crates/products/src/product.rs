use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use orderflow_core::{DomainError, DomainResult, Entity, ProductId};

use crate::category::ProductCategory;

/// Selling window of a seasonal product (`start <= end`).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SeasonWindow {
    start: NaiveDate,
    end: NaiveDate,
}

impl SeasonWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> DomainResult<Self> {
        if start > end {
            return Err(DomainError::validation(format!(
                "season start {start} is after season end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Mutable inventory record: one sellable catalog product.
///
/// Owned by the catalog. Fulfillment borrows it mutably for a single policy
/// application and hands it back to the writer; stock can only move through the
/// methods below, which keep `available_units` non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProductRecord", into = "ProductRecord")]
pub struct Product {
    id: ProductId,
    name: String,
    category: ProductCategory,
    available_units: u32,
    lead_time_days: u32,
    expiry_date: Option<NaiveDate>,
    season: Option<SeasonWindow>,
}

impl Product {
    /// Standard stock item.
    pub fn standard(
        id: ProductId,
        name: impl Into<String>,
        available_units: u32,
        lead_time_days: u32,
    ) -> DomainResult<Self> {
        Self::build(
            id,
            name.into(),
            ProductCategory::Standard,
            available_units,
            lead_time_days,
            None,
            None,
        )
    }

    /// Perishable item with a mandatory expiry date.
    pub fn expiring(
        id: ProductId,
        name: impl Into<String>,
        available_units: u32,
        lead_time_days: u32,
        expiry_date: NaiveDate,
    ) -> DomainResult<Self> {
        Self::build(
            id,
            name.into(),
            ProductCategory::Expiring,
            available_units,
            lead_time_days,
            Some(expiry_date),
            None,
        )
    }

    /// Seasonal item with a mandatory selling window.
    pub fn seasonal(
        id: ProductId,
        name: impl Into<String>,
        available_units: u32,
        lead_time_days: u32,
        season: SeasonWindow,
    ) -> DomainResult<Self> {
        Self::build(
            id,
            name.into(),
            ProductCategory::Seasonal,
            available_units,
            lead_time_days,
            None,
            Some(season),
        )
    }

    fn build(
        id: ProductId,
        name: String,
        category: ProductCategory,
        available_units: u32,
        lead_time_days: u32,
        expiry_date: Option<NaiveDate>,
        season: Option<SeasonWindow>,
    ) -> DomainResult<Self> {
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        match category {
            ProductCategory::Expiring if expiry_date.is_none() => {
                return Err(DomainError::missing_attribute(id, "expiry date"));
            }
            ProductCategory::Seasonal if season.is_none() => {
                return Err(DomainError::missing_attribute(id, "season window"));
            }
            _ => {}
        }

        Ok(Self {
            id,
            name,
            category,
            available_units,
            lead_time_days,
            expiry_date,
            season,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ProductCategory {
        self.category
    }

    pub fn available_units(&self) -> u32 {
        self.available_units
    }

    pub fn lead_time_days(&self) -> u32 {
        self.lead_time_days
    }

    pub fn expiry_date(&self) -> Option<NaiveDate> {
        self.expiry_date
    }

    pub fn season(&self) -> Option<SeasonWindow> {
        self.season
    }

    pub fn has_stock(&self) -> bool {
        self.available_units > 0
    }

    /// Take one unit out of stock.
    pub fn decrement_available(&mut self) -> DomainResult<()> {
        self.available_units = self
            .available_units
            .checked_sub(1)
            .ok_or_else(|| DomainError::invariant("stock cannot go negative"))?;
        Ok(())
    }

    /// Force the product out of stock.
    pub fn mark_unavailable(&mut self) {
        self.available_units = 0;
    }

    pub fn set_lead_time_days(&mut self, lead_time_days: u32) {
        self.lead_time_days = lead_time_days;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Flat storage shape of a [`Product`] (one catalog row).
///
/// Deserializing a `Product` goes through this record so every loaded row is
/// validated by the same rules as the constructors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "type")]
    pub category: ProductCategory,
    pub available: u32,
    pub lead_time: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season_end_date: Option<NaiveDate>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = DomainError;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let season = match (record.season_start_date, record.season_end_date) {
            (Some(start), Some(end)) => Some(SeasonWindow::new(start, end)?),
            (None, None) => None,
            _ => {
                return Err(DomainError::validation(format!(
                    "product {} must set both season dates or neither",
                    record.id
                )));
            }
        };

        Product::build(
            record.id,
            record.name,
            record.category,
            record.available,
            record.lead_time,
            record.expiry_date,
            season,
        )
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            category: product.category,
            available: product.available_units,
            lead_time: product.lead_time_days,
            expiry_date: product.expiry_date,
            season_start_date: product.season.map(|s| s.start),
            season_end_date: product.season.map(|s| s.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn standard_product_exposes_its_state() {
        let product = Product::standard(ProductId::new(1), "USB Cable", 10, 15).unwrap();

        assert_eq!(product.id(), ProductId::new(1));
        assert_eq!(product.name(), "USB Cable");
        assert_eq!(product.category(), ProductCategory::Standard);
        assert_eq!(product.available_units(), 10);
        assert_eq!(product.lead_time_days(), 15);
        assert_eq!(product.expiry_date(), None);
        assert_eq!(product.season(), None);
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = Product::standard(ProductId::new(1), "   ", 1, 1).unwrap_err();
        match err {
            DomainError::Validation(msg) if msg.contains("name cannot be empty") => {}
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn season_start_after_end_is_rejected() {
        let err = SeasonWindow::new(date(2024, 9, 1), date(2024, 6, 1)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn single_day_season_is_allowed() {
        let window = SeasonWindow::new(date(2024, 6, 1), date(2024, 6, 1)).unwrap();
        assert_eq!(window.start(), window.end());
    }

    #[test]
    fn decrement_stops_at_zero() {
        let mut product = Product::standard(ProductId::new(1), "Mouse", 1, 0).unwrap();

        product.decrement_available().unwrap();
        assert_eq!(product.available_units(), 0);

        let err = product.decrement_available().unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) if msg.contains("stock cannot go negative") => {}
            other => panic!("Expected InvariantViolation, got {other:?}"),
        }
        assert_eq!(product.available_units(), 0);
    }

    #[test]
    fn mark_unavailable_zeroes_stock() {
        let mut product =
            Product::expiring(ProductId::new(2), "Milk", 6, 0, date(2024, 1, 1)).unwrap();
        product.mark_unavailable();
        assert_eq!(product.available_units(), 0);
        assert!(!product.has_stock());
    }

    #[test]
    fn deserializes_catalog_row() {
        let json = r#"{
            "id": 3,
            "name": "Watermelon",
            "type": "SEASONAL",
            "available": 30,
            "lead_time": 15,
            "season_start_date": "2024-06-01",
            "season_end_date": "2024-08-31"
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.category(), ProductCategory::Seasonal);
        let season = product.season().unwrap();
        assert_eq!(season.start(), date(2024, 6, 1));
        assert_eq!(season.end(), date(2024, 8, 31));
    }

    #[test]
    fn expiring_row_without_expiry_date_is_rejected() {
        let json = r#"{"id": 4, "name": "Milk", "type": "EXPIRABLE", "available": 6, "lead_time": 0}"#;
        let err = serde_json::from_str::<Product>(json).unwrap_err();
        assert!(err.to_string().contains("has no expiry date"));
    }

    #[test]
    fn row_with_half_a_season_is_rejected() {
        let json = r#"{
            "id": 5, "name": "Peach", "type": "SEASONAL", "available": 1, "lead_time": 1,
            "season_start_date": "2024-06-01"
        }"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn row_with_unknown_type_is_rejected() {
        let json = r#"{"id": 6, "name": "Gift card", "type": "DIGITAL", "available": 1, "lead_time": 0}"#;
        let err = serde_json::from_str::<Product>(json).unwrap_err();
        assert!(err.to_string().contains("unsupported product type: DIGITAL"));
    }

    #[test]
    fn record_round_trip_keeps_optional_fields_absent() {
        let product = Product::standard(ProductId::new(7), "Keyboard", 3, 2).unwrap();
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["type"], "NORMAL");
        assert!(value.get("expiry_date").is_none());
        assert!(value.get("season_start_date").is_none());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: stock never goes below zero, whatever the sequence of decrements.
            #[test]
            fn stock_never_goes_negative(initial in 0u32..50, attempts in 0usize..100) {
                let mut product = Product::standard(ProductId::new(1), "Item", initial, 0).unwrap();
                let mut succeeded = 0u32;
                for _ in 0..attempts {
                    if product.decrement_available().is_ok() {
                        succeeded += 1;
                    }
                }
                prop_assert_eq!(succeeded, initial.min(attempts as u32));
                prop_assert_eq!(product.available_units(), initial - succeeded);
            }

            /// Property: a season window is accepted iff start <= end.
            #[test]
            fn season_window_requires_ordered_bounds(a in 0i64..3650, b in 0i64..3650) {
                let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
                let start = base + chrono::Days::new(a as u64);
                let end = base + chrono::Days::new(b as u64);
                prop_assert_eq!(SeasonWindow::new(start, end).is_ok(), start <= end);
            }
        }
    }
}
