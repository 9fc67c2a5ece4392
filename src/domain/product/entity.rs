use serde::Serialize;

use super::invariants::{validate_name, validate_price};
use crate::domain::DomainResult;

/// Caller-supplied product identifier (e.g. "sku-123")
/// Used verbatim as identity; never reassigned after creation
pub type ProductId = String;

/// A catalog record
/// Immutable once constructed: edits replace the whole value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
}

impl Product {
    /// Build a valid Product from raw input
    ///
    /// The name is trimmed; the id is kept exactly as given.
    /// Checks run name first, then price, so an empty name wins
    /// when both are invalid.
    pub fn new(id: impl Into<ProductId>, raw_name: &str, raw_price: f64) -> DomainResult<Self> {
        let name = validate_name(raw_name)?;
        let price = validate_price(raw_price)?;

        Ok(Self {
            id: id.into(),
            name: name.to_string(),
            price,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) @ {:.2}", self.name, self.id, self.price)
    }
}

/// Factory entry point: raw (id, name, price) into a Product or a rejection
pub fn create_product(id: &str, raw_name: &str, raw_price: f64) -> DomainResult<Product> {
    Product::new(id, raw_name, raw_price)
}
