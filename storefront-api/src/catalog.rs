use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use storefront_catalog::{breadcrumbs, Breadcrumb};

use crate::error::AppError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products/{pid}/breadcrumbs", get(product_breadcrumbs))
        .route("/categories/{cgid}/breadcrumbs", get(category_breadcrumbs))
}

/// GET /products/{pid}/breadcrumbs
pub async fn product_breadcrumbs(
    State(state): State<AppState>,
    Path(pid): Path<String>,
) -> Result<Json<Vec<Breadcrumb>>, AppError> {
    let trail = breadcrumbs(state.catalog.as_ref(), None, Some(&pid)).map_err(AppError::catalog)?;
    Ok(Json(trail))
}

/// GET /categories/{cgid}/breadcrumbs
pub async fn category_breadcrumbs(
    State(state): State<AppState>,
    Path(cgid): Path<String>,
) -> Result<Json<Vec<Breadcrumb>>, AppError> {
    let trail = breadcrumbs(state.catalog.as_ref(), Some(&cgid), None).map_err(AppError::catalog)?;
    Ok(Json(trail))
}
