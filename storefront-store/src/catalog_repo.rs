use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use storefront_catalog::{CatalogRepository, Category, Product};

#[derive(Debug, Default, Deserialize)]
struct CatalogFixture {
    #[serde(default)]
    categories: Vec<Category>,
    #[serde(default)]
    products: Vec<Product>,
}

/// Catalog held in memory, optionally seeded from a JSON fixture
#[derive(Debug, Default)]
pub struct MemoryCatalog {
    categories: HashMap<String, Category>,
    products: HashMap<String, Product>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(raw: &str) -> Result<Self, FixtureError> {
        let fixture: CatalogFixture = serde_json::from_str(raw)?;

        let mut catalog = Self::new();
        fixture
            .categories
            .into_iter()
            .for_each(|c| catalog.insert_category(c));
        fixture
            .products
            .into_iter()
            .for_each(|p| catalog.insert_product(p));
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&raw)?;
        tracing::info!(
            "Loaded catalog with {} categories and {} products",
            catalog.categories.len(),
            catalog.products.len()
        );
        Ok(catalog)
    }

    pub fn insert_category(&mut self, category: Category) {
        self.categories.insert(category.id.clone(), category);
    }

    pub fn insert_product(&mut self, product: Product) {
        self.products.insert(product.id.clone(), product);
    }
}

impl CatalogRepository for MemoryCatalog {
    fn product(&self, id: &str) -> Option<Product> {
        self.products.get(id).cloned()
    }

    fn category(&self, id: &str) -> Option<Category> {
        self.categories.get(id).cloned()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FixtureError {
    #[error("Failed to read catalog fixture: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalog fixture: {0}")]
    Parse(#[from] serde_json::Error),
}
