use std::sync::Arc;

use actix_web::{http::header, web, HttpResponse};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::core::error::AppError;
use crate::core::pagination::{PageRequest, DEFAULT_PAGE_SIZE};
use crate::modules::products::models::{Product, ProductFilter};
use crate::modules::products::services::product_service::ProductService;

/// Query parameters for listing products
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProductsQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sku: Option<String>,
    pub name: Option<String>,
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl ListProductsQuery {
    fn filter(&self) -> ProductFilter {
        ProductFilter {
            min_price: self.min_price,
            max_price: self.max_price,
            sku: self.sku.clone(),
            name: self.name.clone(),
        }
    }
}

/// List products with pagination and optional filters
/// GET /products
pub async fn list_products(
    service: web::Data<Arc<ProductService>>,
    query: web::Query<ListProductsQuery>,
) -> Result<HttpResponse, AppError> {
    let page = PageRequest::new(query.page, query.size);
    let products = service.list(&query.filter(), page).await?;

    Ok(HttpResponse::Ok().json(products))
}

/// List all available products, unpaginated
/// GET /products/available
pub async fn list_available_products(
    service: web::Data<Arc<ProductService>>,
) -> Result<HttpResponse, AppError> {
    let products = service.list_available().await?;

    Ok(HttpResponse::Ok().json(products))
}

/// Get product by id
/// GET /products/{id}
pub async fn get_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product = service.get(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Create a new product
/// POST /products
pub async fn create_product(
    service: web::Data<Arc<ProductService>>,
    request: web::Json<Product>,
) -> Result<HttpResponse, AppError> {
    let product = service.create(request.into_inner()).await?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/products/{}", product.id)))
        .json(product))
}

/// Replace an existing product
/// PUT /products/{id}
pub async fn update_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
    request: web::Json<Product>,
) -> Result<HttpResponse, AppError> {
    service
        .update(path.into_inner(), request.into_inner())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Delete a product, returning it
/// DELETE /products/{id}
pub async fn delete_product(
    service: web::Data<Arc<ProductService>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let product = service.delete(path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(product))
}

/// Delete every listed product id present in the store
/// DELETE /products/batch
pub async fn delete_products_batch(
    service: web::Data<Arc<ProductService>>,
    request: web::Json<Vec<i64>>,
) -> Result<HttpResponse, AppError> {
    service.delete_batch(&request.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Configure product routes.
///
/// Literal segments (`/available`, `/batch`) are registered before the
/// `/{id}` matcher.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/products")
            .route("", web::get().to(list_products))
            .route("", web::post().to(create_product))
            .route("/available", web::get().to(list_available_products))
            .route("/batch", web::delete().to(delete_products_batch))
            .route("/{id}", web::get().to(get_product))
            .route("/{id}", web::put().to(update_product))
            .route("/{id}", web::delete().to(delete_product)),
    );
}
