pub mod app_config;
pub mod memory;
pub mod shipping_rules;
pub mod catalog_repo;

pub use memory::{MemoryOrderStore, StoreError};
pub use shipping_rules::{ConfiguredShipping, ShippingConfigError};
pub use catalog_repo::{FixtureError, MemoryCatalog};
