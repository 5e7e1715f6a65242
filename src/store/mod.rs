//! In-memory data store backing the catalog.
//!
//! Holds product and category records in `RwLock`-guarded maps. Repositories
//! are the only consumers; handlers never touch the maps directly.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use rust_decimal::Decimal;
use tokio::sync::RwLock;

use crate::modules::categories::models::Category;
use crate::modules::products::models::Product;

/// Shared in-memory store for products and categories.
///
/// Iteration order is key order (`BTreeMap`), which gives listings a stable
/// id ordering across requests.
pub struct ShopStore {
    pub(crate) products: RwLock<BTreeMap<i64, Product>>,
    pub(crate) categories: RwLock<BTreeMap<i64, Category>>,
    initialized: AtomicBool,
}

impl ShopStore {
    pub fn new() -> Self {
        Self {
            products: RwLock::new(BTreeMap::new()),
            categories: RwLock::new(BTreeMap::new()),
            initialized: AtomicBool::new(false),
        }
    }

    /// One-time startup step invoked before the server accepts requests.
    ///
    /// Optionally seeds demo catalog data for development environments.
    /// Request handlers assume this has run; the readiness probe reports
    /// whether it has.
    pub async fn initialize(&self, seed_demo_data: bool) {
        if seed_demo_data {
            self.seed().await;
            tracing::info!("Store seeded with demo catalog data");
        }

        self.initialized.store(true, Ordering::Release);
    }

    /// Whether `initialize` has completed. Used by the readiness probe.
    pub fn is_initialized(&self) -> bool {
        self.initialized.load(Ordering::Acquire)
    }

    async fn seed(&self) {
        let mut categories = self.categories.write().await;
        for category in demo_categories() {
            categories.insert(category.id, category);
        }
        drop(categories);

        let mut products = self.products.write().await;
        for product in demo_products() {
            products.insert(product.id, product);
        }
    }
}

impl Default for ShopStore {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_categories() -> Vec<Category> {
    vec![
        Category {
            id: 1,
            name: "Electronics".to_string(),
        },
        Category {
            id: 2,
            name: "Books".to_string(),
        },
        Category {
            id: 3,
            name: "Sports".to_string(),
        },
    ]
}

fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Wireless Mouse".to_string(),
            description: "Two-button optical mouse with USB receiver".to_string(),
            sku: "ELC-0001".to_string(),
            price: Decimal::new(2999, 2),
            is_available: true,
            category_id: 1,
        },
        Product {
            id: 2,
            name: "USB-C Cable".to_string(),
            description: "1m braided charging cable".to_string(),
            sku: "ELC-0002".to_string(),
            price: Decimal::new(999, 2),
            is_available: true,
            category_id: 1,
        },
        Product {
            id: 3,
            name: "Grow Your Business".to_string(),
            description: String::new(),
            sku: "BOK-0001".to_string(),
            price: Decimal::new(2450, 2),
            is_available: false,
            category_id: 2,
        },
        Product {
            id: 4,
            name: "Trail Running Shoes".to_string(),
            description: "Lightweight shoes with grippy outsole".to_string(),
            sku: "SPT-0001".to_string(),
            price: Decimal::new(8995, 2),
            is_available: true,
            category_id: 3,
        },
    ]
}
