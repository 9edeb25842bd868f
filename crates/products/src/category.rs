use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fulfillment classification of a product.
///
/// Each category is served by exactly one fulfillment policy. New categories are
/// added here and registered with the policy registry; existing policies are not
/// affected.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
#[non_exhaustive]
pub enum ProductCategory {
    /// Plain stock item, replenished after a lead time.
    Standard,
    /// Perishable item that cannot be sold on or after its expiry date.
    Expiring,
    /// Item sold only within a seasonal window.
    Seasonal,
}

impl ProductCategory {
    /// Wire identifier as stored in the catalog.
    pub const fn as_str(self) -> &'static str {
        match self {
            ProductCategory::Standard => "NORMAL",
            ProductCategory::Expiring => "EXPIRABLE",
            ProductCategory::Seasonal => "SEASONAL",
        }
    }
}

impl core::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category identifier that matches no known category.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unsupported product type: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for ProductCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NORMAL" => Ok(ProductCategory::Standard),
            "EXPIRABLE" => Ok(ProductCategory::Expiring),
            "SEASONAL" => Ok(ProductCategory::Seasonal),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl TryFrom<String> for ProductCategory {
    type Error = UnknownCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProductCategory> for &'static str {
    fn from(value: ProductCategory) -> Self {
        value.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_identifiers() {
        assert_eq!("NORMAL".parse(), Ok(ProductCategory::Standard));
        assert_eq!("EXPIRABLE".parse(), Ok(ProductCategory::Expiring));
        assert_eq!("SEASONAL".parse(), Ok(ProductCategory::Seasonal));
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = "FLASH_SALE".parse::<ProductCategory>().unwrap_err();
        assert_eq!(err, UnknownCategory("FLASH_SALE".to_string()));
        assert_eq!(err.to_string(), "unsupported product type: FLASH_SALE");
    }

    #[test]
    fn identifiers_are_case_sensitive() {
        assert!("normal".parse::<ProductCategory>().is_err());
    }

    #[test]
    fn serde_uses_wire_identifiers() {
        let json = serde_json::to_string(&ProductCategory::Expiring).unwrap();
        assert_eq!(json, "\"EXPIRABLE\"");

        let parsed: ProductCategory = serde_json::from_str("\"SEASONAL\"").unwrap();
        assert_eq!(parsed, ProductCategory::Seasonal);

        assert!(serde_json::from_str::<ProductCategory>("\"BUNDLE\"").is_err());
    }
}
