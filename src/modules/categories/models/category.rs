use serde::{Deserialize, Serialize};

use crate::modules::products::models::Product;

/// A grouping entity referenced by products
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A category together with its products.
///
/// The product list is derived from the product store at read time; it is
/// never stored on the category itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithProducts {
    pub id: i64,
    pub name: String,
    pub products: Vec<Product>,
}

impl CategoryWithProducts {
    pub fn new(category: Category, products: Vec<Product>) -> Self {
        Self {
            id: category.id,
            name: category.name,
            products,
        }
    }
}
