// Categories module

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Category, CategoryWithProducts};
pub use repositories::{CategoryRepository, InMemoryCategoryRepository};
pub use services::CategoryService;
