use serde::{Deserialize, Serialize};

/// Product types in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    #[default]
    Standard,
    Master,
    Variant,
    Bundle,
    Set,
}

/// The catalog data the storefront needs to place a product in navigation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub product_type: ProductType,
    /// Set for variants; variants inherit navigation from their master
    #[serde(default)]
    pub master_id: Option<String>,
    #[serde(default)]
    pub primary_category_id: Option<String>,
}

impl Product {
    pub fn is_variant(&self) -> bool {
        self.product_type == ProductType::Variant
    }
}
