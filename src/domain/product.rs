//! Product domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::ValidationError;
use super::id::EntityId;

/// A sellable item.
///
/// Valid iff `name` is non-empty and `price > 0`. Instances built through
/// [`Product::create`] start valid; after mutating the public fields call
/// [`Product::validate`] again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create a product with a fresh identifier.
    pub fn create(name: impl Into<String>, price: f64) -> Result<Self, ValidationError> {
        let name = name.into();
        check(&name, price)?;

        Ok(Self {
            id: EntityId::generate(),
            name,
            price,
            created_at: Utc::now(),
        })
    }

    /// Re-check the invariants.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check(&self.name, self.price)
    }

    /// Replace name and price. Does not validate.
    pub fn apply(&mut self, name: String, price: f64) {
        self.name = name;
        self.price = price;
    }
}

fn check(name: &str, price: f64) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if price == 0.0 {
        return Err(ValidationError::PriceRequired);
    }
    if price < 0.0 || !price.is_finite() {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(())
}

/// Product representation returned to clients
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductResponse {
    /// Unique product identifier
    #[schema(value_type = String, example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: EntityId,
    /// Product name
    #[schema(example = "Notebook")]
    pub name: String,
    /// Unit price
    #[schema(example = 100.0)]
    pub price: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            created_at: product.created_at,
        }
    }
}
