// Category store operations. Read-only: categories are managed through
// seeding, not through the HTTP surface.

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::Result;
use crate::modules::categories::models::Category;
use crate::store::ShopStore;

/// Repository for category lookups
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories in id order
    async fn list(&self) -> Result<Vec<Category>>;

    /// Point lookup by id
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>>;

    /// Existence check used for product referential-integrity validation
    async fn exists(&self, id: i64) -> Result<bool>;
}

/// `CategoryRepository` over the shared in-memory store
pub struct InMemoryCategoryRepository {
    store: Arc<ShopStore>,
}

impl InMemoryCategoryRepository {
    pub fn new(store: Arc<ShopStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn list(&self) -> Result<Vec<Category>> {
        let categories = self.store.categories.read().await;

        Ok(categories.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>> {
        let categories = self.store.categories.read().await;

        Ok(categories.get(&id).cloned())
    }

    async fn exists(&self, id: i64) -> Result<bool> {
        let categories = self.store.categories.read().await;

        Ok(categories.contains_key(&id))
    }
}
