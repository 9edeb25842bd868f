//! Category → policy lookup table.
//!
//! Built once at startup by listing policies explicitly. The engine resolves a
//! policy per item; nothing is registered implicitly.

use std::collections::HashMap;

use orderflow_products::ProductCategory;

use crate::error::FulfillmentError;
use crate::policy::{ExpiringPolicy, FulfillmentPolicy, SeasonalPolicy, StandardPolicy};

#[derive(Debug)]
pub struct PolicyRegistry {
    policies: HashMap<ProductCategory, Box<dyn FulfillmentPolicy>>,
}

impl PolicyRegistry {
    /// Registry with the built-in policy for every known category.
    pub fn with_defaults() -> Self {
        let policies: [Box<dyn FulfillmentPolicy>; 3] = [
            Box::new(StandardPolicy),
            Box::new(ExpiringPolicy),
            Box::new(SeasonalPolicy),
        ];
        Self {
            policies: policies.into_iter().map(|p| (p.category(), p)).collect(),
        }
    }

    pub fn builder() -> PolicyRegistryBuilder {
        PolicyRegistryBuilder::default()
    }

    /// Policy registered for `category`.
    ///
    /// A miss means the registry was built without that category, which is a
    /// wiring defect rather than bad order data.
    pub fn resolve(
        &self,
        category: ProductCategory,
    ) -> Result<&dyn FulfillmentPolicy, FulfillmentError> {
        self.policies
            .get(&category)
            .map(|p| p.as_ref())
            .ok_or_else(|| FulfillmentError::UnsupportedCategory(category.to_string()))
    }

    /// Resolve by wire identifier (e.g. `"SEASONAL"`).
    pub fn resolve_str(&self, category: &str) -> Result<&dyn FulfillmentPolicy, FulfillmentError> {
        let category: ProductCategory = category.parse()?;
        self.resolve(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = ProductCategory> + '_ {
        self.policies.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

impl Default for PolicyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Explicit registration for custom policy sets.
#[derive(Debug, Default)]
pub struct PolicyRegistryBuilder {
    policies: HashMap<ProductCategory, Box<dyn FulfillmentPolicy>>,
    duplicate: Option<ProductCategory>,
}

impl PolicyRegistryBuilder {
    pub fn register<P>(mut self, policy: P) -> Self
    where
        P: FulfillmentPolicy + 'static,
    {
        let category = policy.category();
        if self.policies.insert(category, Box::new(policy)).is_some() && self.duplicate.is_none() {
            self.duplicate = Some(category);
        }
        self
    }

    /// Fails if any category was registered twice.
    pub fn build(self) -> Result<PolicyRegistry, FulfillmentError> {
        if let Some(category) = self.duplicate {
            return Err(FulfillmentError::DuplicatePolicy(category));
        }
        Ok(PolicyRegistry {
            policies: self.policies,
        })
    }
}
