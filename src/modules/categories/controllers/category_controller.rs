//! Category endpoints. Read-only: categories are seeded at startup, not
//! managed over HTTP.

use std::sync::Arc;

use actix_web::{web, HttpResponse};

use crate::core::error::AppError;
use crate::modules::categories::services::category_service::CategoryService;

/// List all categories
/// GET /categories
pub async fn list_categories(
    service: web::Data<Arc<CategoryService>>,
) -> Result<HttpResponse, AppError> {
    let categories = service.list().await?;

    Ok(HttpResponse::Ok().json(categories))
}

/// Get a category with its products
/// GET /categories/{id}
pub async fn get_category(
    service: web::Data<Arc<CategoryService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let category = service.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(category))
}

/// Configure category routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .route("", web::get().to(list_categories))
            .route("/{id}", web::get().to(get_category)),
    );
}
