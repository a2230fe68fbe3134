use axum::{http::Method, Router};
use std::sync::Arc;
use storefront_catalog::{CatalogRepository, LocaleMoneyFormatter};
use storefront_order::CheckoutOrchestrator;
use storefront_store::{app_config::Config, ConfiguredShipping, MemoryCatalog, MemoryOrderStore};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod catalog;
pub mod checkout;
pub mod error;
pub mod state;

pub use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .merge(checkout::routes())
        .merge(catalog::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wire the in-memory platform from configuration
pub fn build_state(config: &Config) -> anyhow::Result<AppState> {
    let orders = MemoryOrderStore::new();
    let shipping = ConfiguredShipping::new(&config.shipping, &config.storefront.currency)?;
    let formatter = LocaleMoneyFormatter::new(&config.storefront.locale);

    let catalog: Arc<dyn CatalogRepository> = match &config.catalog {
        Some(catalog) => Arc::new(MemoryCatalog::load(&catalog.fixture)?),
        None => Arc::new(MemoryCatalog::new()),
    };

    let checkout = CheckoutOrchestrator::new(
        Arc::new(orders.clone()),
        Arc::new(orders.clone()),
        Arc::new(shipping),
        Arc::new(formatter),
    );

    Ok(AppState {
        orders,
        checkout: Arc::new(checkout),
        catalog,
    })
}
