use crate::product::Product;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Id of the catalog's root category; it never appears in navigation
pub const ROOT_CATEGORY_ID: &str = "root";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// One navigation step shown above a product or category page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Breadcrumb {
    pub html_value: String,
    pub url: String,
}

impl Breadcrumb {
    fn for_category(category: &Category) -> Self {
        Self {
            html_value: category.display_name.clone(),
            url: format!("/search?cgid={}", category.id),
        }
    }
}

/// Read access to the storefront catalog
pub trait CatalogRepository: Send + Sync {
    fn product(&self, id: &str) -> Option<Product>;

    fn category(&self, id: &str) -> Option<Category>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),
}

/// Build the breadcrumb trail for a product (`pid`) or a category (`cgid`).
///
/// A product starts at its primary category, or its master's when it is a
/// variant. The trail ends below the root category and is returned
/// root-first.
pub fn breadcrumbs(
    catalog: &dyn CatalogRepository,
    cgid: Option<&str>,
    pid: Option<&str>,
) -> Result<Vec<Breadcrumb>, CatalogError> {
    let start = match (pid, cgid) {
        (Some(pid), _) => primary_category_of(catalog, pid)?,
        (None, Some(cgid)) => Some(
            catalog
                .category(cgid)
                .ok_or_else(|| CatalogError::CategoryNotFound(cgid.to_string()))?,
        ),
        (None, None) => None,
    };

    let mut trail = Vec::new();
    let mut visited = HashSet::new();
    let mut current = start;

    while let Some(category) = current {
        if !visited.insert(category.id.clone()) {
            tracing::warn!("Category cycle detected at {}", category.id);
            break;
        }
        trail.push(Breadcrumb::for_category(&category));

        current = match category.parent_id.as_deref() {
            Some(parent_id) if parent_id != ROOT_CATEGORY_ID => catalog.category(parent_id),
            _ => None,
        };
    }

    trail.reverse();
    Ok(trail)
}

fn primary_category_of(
    catalog: &dyn CatalogRepository,
    pid: &str,
) -> Result<Option<Category>, CatalogError> {
    let product = catalog
        .product(pid)
        .ok_or_else(|| CatalogError::ProductNotFound(pid.to_string()))?;

    let navigable = match (&product.master_id, product.is_variant()) {
        (Some(master_id), true) => catalog
            .product(master_id)
            .ok_or_else(|| CatalogError::ProductNotFound(master_id.clone()))?,
        _ => product,
    };

    Ok(navigable
        .primary_category_id
        .as_deref()
        .and_then(|id| catalog.category(id)))
}
