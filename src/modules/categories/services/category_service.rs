// Category read operations. Composes the category and product repositories
// so a category can be returned with its derived product list.

use std::sync::Arc;

use crate::core::{AppError, Result};
use crate::modules::categories::models::{Category, CategoryWithProducts};
use crate::modules::categories::repositories::CategoryRepository;
use crate::modules::products::repositories::ProductRepository;

/// Service for category lookups
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
    products: Arc<dyn ProductRepository>,
}

impl CategoryService {
    pub fn new(
        categories: Arc<dyn CategoryRepository>,
        products: Arc<dyn ProductRepository>,
    ) -> Self {
        Self {
            categories,
            products,
        }
    }

    /// All categories in id order
    pub async fn list(&self) -> Result<Vec<Category>> {
        self.categories.list().await
    }

    /// A category with its products, derived from the product store
    pub async fn get(&self, id: i64) -> Result<CategoryWithProducts> {
        if id <= 0 {
            return Err(AppError::validation(
                "Category ID must be a positive integer.",
            ));
        }

        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Category with id '{}' not found.", id)))?;

        let products = self.products.find_by_category(id).await?;

        Ok(CategoryWithProducts::new(category, products))
    }
}
