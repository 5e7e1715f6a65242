// Product business logic: the CRUD contract over the product store.
//
// Every operation is a single stateless request/response cycle. Validation
// failures are reported before any store mutation is attempted. The service
// takes its repositories at construction time; there is no process-wide
// registry.

use std::sync::Arc;

use crate::core::{AppError, PageRequest, PaginatedResponse, Result};
use crate::modules::categories::repositories::CategoryRepository;
use crate::modules::products::models::{Product, ProductFilter};
use crate::modules::products::repositories::ProductRepository;

/// Service for product CRUD operations
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl ProductService {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Page through the catalog in id order, with optional filters
    pub async fn list(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> Result<PaginatedResponse<Product>> {
        let (items, total) = self.products.find_page(filter, page).await?;

        Ok(PaginatedResponse::new(items, page, total))
    }

    /// Every product currently flagged available, unpaginated
    pub async fn list_available(&self) -> Result<Vec<Product>> {
        self.products.find_available().await
    }

    /// Get a product by id.
    ///
    /// A non-positive id is a client error and never reaches the store.
    pub async fn get(&self, id: i64) -> Result<Product> {
        if id <= 0 {
            return Err(AppError::validation("Product ID must be a positive integer."));
        }

        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product with id '{}' not found.", id)))
    }

    /// Create a product from a client-supplied payload, id included.
    pub async fn create(&self, product: Product) -> Result<Product> {
        product.validate_new()?;
        self.ensure_category_exists(product.category_id).await?;

        let created = self.products.create(product).await?;
        tracing::info!(product_id = created.id, "Product created");

        Ok(created)
    }

    /// Full replace of every mutable field of an existing product.
    pub async fn update(&self, id: i64, product: Product) -> Result<()> {
        product.validate_update(id)?;
        self.ensure_category_exists(product.category_id).await?;

        self.products.update(product).await?;
        tracing::info!(product_id = id, "Product updated");

        Ok(())
    }

    /// Delete a product, returning it to the caller.
    pub async fn delete(&self, id: i64) -> Result<Product> {
        let deleted = self
            .products
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Product with id '{}' not found.", id)))?;

        tracing::info!(product_id = id, "Product deleted");

        Ok(deleted)
    }

    /// Delete every listed id that exists in the store.
    ///
    /// Partial matches succeed: ids with no match are skipped. The operation
    /// fails only when the list is empty (client error) or nothing matched
    /// (not found).
    pub async fn delete_batch(&self, ids: &[i64]) -> Result<Vec<Product>> {
        if ids.is_empty() {
            return Err(AppError::validation("At least one product ID is required."));
        }

        let deleted = self.products.delete_many(ids).await?;
        if deleted.is_empty() {
            return Err(AppError::not_found("No products matched the given IDs."));
        }

        tracing::info!(
            requested = ids.len(),
            deleted = deleted.len(),
            "Products deleted in batch"
        );

        Ok(deleted)
    }

    async fn ensure_category_exists(&self, category_id: i64) -> Result<()> {
        if !self.categories.exists(category_id).await? {
            return Err(AppError::validation(format!(
                "Category {} does not exist.",
                category_id
            )));
        }

        Ok(())
    }
}
