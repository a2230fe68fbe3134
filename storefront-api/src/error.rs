use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use storefront_catalog::CatalogError;
use storefront_store::StoreError;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    Anyhow(anyhow::Error),
}

impl AppError {
    pub fn store(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(no) => AppError::NotFoundError(format!("Order not found: {}", no)),
            StoreError::DuplicateOrder(_) => AppError::ConflictError(err.to_string()),
            StoreError::NotDraft(_) => AppError::ValidationError(err.to_string()),
            StoreError::Finalized(_) => AppError::ConflictError(err.to_string()),
        }
    }

    pub fn catalog(err: CatalogError) -> Self {
        AppError::NotFoundError(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self::Anyhow(err.into())
    }
}
