use std::sync::Arc;
use storefront_catalog::CatalogRepository;
use storefront_order::CheckoutOrchestrator;
use storefront_store::MemoryOrderStore;

#[derive(Clone)]
pub struct AppState {
    pub orders: MemoryOrderStore,
    pub checkout: Arc<CheckoutOrchestrator>,
    pub catalog: Arc<dyn CatalogRepository>,
}
