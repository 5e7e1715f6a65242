// Product entity and payload validation.
//
// A product is created from a client-supplied payload including its id; the
// store never generates identifiers. Validation checks run in a fixed order
// (name, price, id) and report the first failure only.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// A catalog product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Caller-assigned identifier, must be positive
    pub id: i64,

    /// Display name, must not be empty
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub sku: String,

    /// Unit price, must be strictly greater than zero
    pub price: Decimal,

    #[serde(default)]
    pub is_available: bool,

    /// Referenced category
    pub category_id: i64,
}

impl Product {
    /// Validate a payload on the create path.
    ///
    /// Order: name, price, id. The first failing check is reported.
    pub fn validate_new(&self) -> Result<()> {
        self.validate_name()?;
        self.validate_price()?;

        if self.id <= 0 {
            return Err(AppError::validation("Product ID must be a positive integer."));
        }

        Ok(())
    }

    /// Validate a payload on the update path.
    ///
    /// Order: name, price, id-mismatch against the path id.
    pub fn validate_update(&self, path_id: i64) -> Result<()> {
        self.validate_name()?;
        self.validate_price()?;

        if self.id != path_id {
            return Err(AppError::validation(
                "Product ID in the body does not match the URL.",
            ));
        }

        Ok(())
    }

    fn validate_name(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(AppError::validation("Product name is required."));
        }

        Ok(())
    }

    fn validate_price(&self) -> Result<()> {
        if self.price <= Decimal::ZERO {
            return Err(AppError::validation(
                "Product price must be greater than zero.",
            ));
        }

        Ok(())
    }
}

/// Optional filters applied to product listings, combined with AND
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Inclusive lower price bound
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound
    pub max_price: Option<Decimal>,
    /// Exact SKU match
    pub sku: Option<String>,
    /// Case-insensitive name substring
    pub name: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(min_price) = self.min_price {
            if product.price < min_price {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if product.price > max_price {
                return false;
            }
        }

        if let Some(sku) = &self.sku {
            if product.sku != *sku {
                return false;
            }
        }

        if let Some(name) = &self.name {
            if !product.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }

        true
    }
}
