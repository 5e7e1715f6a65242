// Integration tests for product listing: pagination envelope, size clamping,
// and the optional price/sku/name filters.

use std::sync::Arc;

use actix_web::{test, web, App};
use serde_json::{json, Value};

use shopcore::modules::categories::repositories::{
    CategoryRepository, InMemoryCategoryRepository,
};
use shopcore::modules::products::controllers::product_controller;
use shopcore::modules::products::repositories::{InMemoryProductRepository, ProductRepository};
use shopcore::modules::products::services::ProductService;
use shopcore::store::ShopStore;

/// Route configuration over a freshly seeded store (demo products 1-4)
async fn seeded_api() -> impl FnOnce(&mut web::ServiceConfig) {
    let store = Arc::new(ShopStore::new());
    store.initialize(true).await;

    let products: Arc<dyn ProductRepository> =
        Arc::new(InMemoryProductRepository::new(store.clone()));
    let categories: Arc<dyn CategoryRepository> =
        Arc::new(InMemoryCategoryRepository::new(store.clone()));
    let product_service = Arc::new(ProductService::new(products, categories));

    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(store))
            .app_data(web::Data::new(product_service));
        product_controller::configure(cfg);
    }
}

fn ids(envelope: &Value) -> Vec<i64> {
    envelope["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

#[actix_web::test]
async fn test_list_defaults_return_first_page() {
    let app = test::init_service(App::new().configure(seeded_api().await)).await;

    let req = test::TestRequest::get().uri("/products").to_request();
    let envelope: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(envelope["pageNumber"], 1);
    assert_eq!(envelope["pageSize"], 50);
    assert_eq!(envelope["totalRecords"], 4);
    assert_eq!(envelope["totalPages"], 1);
    assert_eq!(ids(&envelope), vec![1, 2, 3, 4]);
}

#[actix_web::test]
async fn test_list_pages_slice_in_id_order() {
    let app = test::init_service(App::new().configure(seeded_api().await)).await;

    let req = test::TestRequest::get()
        .uri("/products?page=2&size=2")
        .to_request();
    let envelope: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(ids(&envelope), vec![3, 4]);
    assert_eq!(envelope["pageNumber"], 2);
    assert_eq!(envelope["totalRecords"], 4);
    assert_eq!(envelope["totalPages"], 2);
}

#[actix_web::test]
async fn test_list_size_is_clamped_to_one_hundred() {
    let app = test::init_service(App::new().configure(seeded_api().await)).await;

    // Grow the catalog past the cap
    for id in 100..250 {
        let req = test::TestRequest::post()
            .uri("/products")
            .set_json(json!({
                "id": id,
                "name": format!("Bulk Product {}", id),
                "price": "1.00",
                "categoryId": 1
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
    }

    let req = test::TestRequest::get()
        .uri("/products?size=150")
        .to_request();
    let envelope: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(envelope["data"].as_array().unwrap().len(), 100);
    assert_eq!(envelope["pageSize"], 100);
    assert_eq!(envelope["totalRecords"], 154);
}

#[actix_web::test]
async fn test_list_page_past_end_is_empty() {
    let app = test::init_service(App::new().configure(seeded_api().await)).await;

    let req = test::TestRequest::get()
        .uri("/products?page=50&size=50")
        .to_request();
    let envelope: Value = test::call_and_read_body_json(&app, req).await;

    assert!(envelope["data"].as_array().unwrap().is_empty());
    assert_eq!(envelope["totalRecords"], 4);
}

#[actix_web::test]
async fn test_list_filters_by_price_range() {
    let app = test::init_service(App::new().configure(seeded_api().await)).await;

    // Demo prices: 29.99, 9.99, 24.50, 89.95
    let req = test::TestRequest::get()
        .uri("/products?minPrice=25.00&maxPrice=90.00")
        .to_request();
    let envelope: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(ids(&envelope), vec![1, 4]);
    assert_eq!(envelope["totalRecords"], 2);
}

#[actix_web::test]
async fn test_list_filters_by_exact_sku() {
    let app = test::init_service(App::new().configure(seeded_api().await)).await;

    let req = test::TestRequest::get()
        .uri("/products?sku=ELC-0001")
        .to_request();
    let envelope: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(ids(&envelope), vec![1]);
}

#[actix_web::test]
async fn test_list_filters_by_name_substring_case_insensitive() {
    let app = test::init_service(App::new().configure(seeded_api().await)).await;

    let req = test::TestRequest::get()
        .uri("/products?name=cable")
        .to_request();
    let envelope: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(ids(&envelope), vec![2]);
}

#[actix_web::test]
async fn test_list_filter_totals_count_filtered_set() {
    let app = test::init_service(App::new().configure(seeded_api().await)).await;

    let req = test::TestRequest::get()
        .uri("/products?minPrice=25.00&size=1")
        .to_request();
    let envelope: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(envelope["data"].as_array().unwrap().len(), 1);
    assert_eq!(envelope["totalRecords"], 2);
    assert_eq!(envelope["totalPages"], 2);
}
