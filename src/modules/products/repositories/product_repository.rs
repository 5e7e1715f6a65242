// Product persistence operations.
//
// The trait is the seam between the service layer and whatever backs the
// catalog; the implementation shipped here works against the in-memory
// `ShopStore`. The product id is a unique, caller-assigned key.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::{AppError, PageRequest, Result};
use crate::modules::products::models::{Product, ProductFilter};
use crate::store::ShopStore;

/// Repository for product store operations
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product. Fails if the id is already taken.
    async fn create(&self, product: Product) -> Result<Product>;

    /// Point lookup by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>>;

    /// Range scan in id order: filtered page plus the filtered total count
    async fn find_page(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> Result<(Vec<Product>, i64)>;

    /// All products currently flagged available, unpaginated
    async fn find_available(&self) -> Result<Vec<Product>>;

    /// All products referencing the given category
    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Product>>;

    /// Replace every mutable field of an existing product in one store call
    async fn update(&self, product: Product) -> Result<()>;

    /// Delete by id, returning the removed product if it existed
    async fn delete(&self, id: i64) -> Result<Option<Product>>;

    /// Delete every listed id present in the store, returning the removed
    /// products. Ids with no match are skipped, not errors.
    async fn delete_many(&self, ids: &[i64]) -> Result<Vec<Product>>;
}

/// `ProductRepository` over the shared in-memory store
pub struct InMemoryProductRepository {
    store: Arc<ShopStore>,
}

impl InMemoryProductRepository {
    pub fn new(store: Arc<ShopStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> Result<Product> {
        let mut products = self.store.products.write().await;

        // Unique-key violation surfaces as a client error, the same way a
        // relational backend's unique constraint would be mapped.
        if products.contains_key(&product.id) {
            return Err(AppError::validation(format!(
                "Product with id '{}' already exists.",
                product.id
            )));
        }

        products.insert(product.id, product.clone());

        Ok(product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>> {
        let products = self.store.products.read().await;

        Ok(products.get(&id).cloned())
    }

    async fn find_page(
        &self,
        filter: &ProductFilter,
        page: PageRequest,
    ) -> Result<(Vec<Product>, i64)> {
        let products = self.store.products.read().await;

        let matching: Vec<&Product> = products.values().filter(|p| filter.matches(p)).collect();
        let total = matching.len() as i64;

        let page_items = matching
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size() as usize)
            .cloned()
            .collect();

        Ok((page_items, total))
    }

    async fn find_available(&self) -> Result<Vec<Product>> {
        let products = self.store.products.read().await;

        Ok(products.values().filter(|p| p.is_available).cloned().collect())
    }

    async fn find_by_category(&self, category_id: i64) -> Result<Vec<Product>> {
        let products = self.store.products.read().await;

        Ok(products
            .values()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect())
    }

    async fn update(&self, product: Product) -> Result<()> {
        let mut products = self.store.products.write().await;

        match products.get_mut(&product.id) {
            Some(existing) => {
                *existing = product;
                Ok(())
            }
            None => Err(AppError::not_found(format!(
                "Product with id '{}' not found.",
                product.id
            ))),
        }
    }

    async fn delete(&self, id: i64) -> Result<Option<Product>> {
        let mut products = self.store.products.write().await;

        Ok(products.remove(&id))
    }

    async fn delete_many(&self, ids: &[i64]) -> Result<Vec<Product>> {
        let mut products = self.store.products.write().await;

        Ok(ids.iter().filter_map(|id| products.remove(id)).collect())
    }
}
