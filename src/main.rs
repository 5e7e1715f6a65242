use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shopcore::config::Config;
use shopcore::middleware::{ErrorHandler, RequestId};
use shopcore::modules::categories::controllers::category_controller;
use shopcore::modules::categories::repositories::{
    CategoryRepository, InMemoryCategoryRepository,
};
use shopcore::modules::categories::services::CategoryService;
use shopcore::modules::health::controllers::health_controller;
use shopcore::modules::products::controllers::product_controller;
use shopcore::modules::products::repositories::{InMemoryProductRepository, ProductRepository};
use shopcore::modules::products::services::ProductService;
use shopcore::store::ShopStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shopcore=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    config
        .validate()
        .context("Configuration validation failed")?;

    tracing::info!("Starting shopcore product catalog API");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Initialize the store once, before the server accepts requests
    let store = Arc::new(ShopStore::new());
    store.initialize(config.store.seed_demo_data).await;

    // Explicit construction: repositories into services, no global registry
    let product_repo: Arc<dyn ProductRepository> =
        Arc::new(InMemoryProductRepository::new(store.clone()));
    let category_repo: Arc<dyn CategoryRepository> =
        Arc::new(InMemoryCategoryRepository::new(store.clone()));

    let product_service = Arc::new(ProductService::new(
        product_repo.clone(),
        category_repo.clone(),
    ));
    let category_service = Arc::new(CategoryService::new(category_repo, product_repo));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(product_service.clone()))
            .app_data(web::Data::new(category_service.clone()))
            .wrap(TracingLogger::default())
            .wrap(ErrorHandler)
            .wrap(RequestId)
            .configure(product_controller::configure)
            .configure(category_controller::configure)
            .configure(health_controller::configure)
    })
    .workers(config.server.workers)
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;

    Ok(())
}
