mod category;

pub use category::{Category, CategoryWithProducts};
