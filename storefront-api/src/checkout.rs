use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use storefront_order::shipping::ShippingMethodEntry;
use storefront_order::{Order, OrderAddress, OrderStatus, ShippingViewModel};

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ShippingAddressQuery {
    pub country_code: Option<String>,
    pub postal_code: Option<String>,
    pub state_code: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SelectShippingMethodRequest {
    pub shipping_method_id: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/orders", post(create_order))
        .route("/orders/{order_no}", get(get_order))
        .route("/orders/{order_no}/shipping-methods", get(list_shipping_methods))
        .route("/orders/{order_no}/shipping-method", post(select_shipping_method))
        .route("/orders/{order_no}/place", post(place_order))
}

async fn load_order(state: &AppState, order_no: &str) -> Result<Order, AppError> {
    state
        .orders
        .get(order_no)
        .await
        .ok_or_else(|| AppError::NotFoundError(format!("Order not found: {}", order_no)))
}

fn ensure_draft(order: &Order) -> Result<(), AppError> {
    if order.status != OrderStatus::Created {
        return Err(AppError::ConflictError(format!(
            "Order {} is {:?}",
            order.order_no, order.status
        )));
    }
    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /orders
/// Register a draft order handed over by the basket
pub async fn create_order(
    State(state): State<AppState>,
    Json(order): Json<Order>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let order_no = order.order_no.clone();
    state.orders.insert(order).await.map_err(AppError::store)?;

    tracing::info!("Registered draft order {}", order_no);
    Ok((StatusCode::CREATED, Json(json!({ "order_no": order_no }))))
}

/// GET /orders/{order_no}
/// Confirmation page model
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_no): Path<String>,
) -> Result<Json<Value>, AppError> {
    let order = load_order(&state, &order_no).await?;
    let model = state.checkout.build_order_model(&order);

    Ok(Json(serde_json::to_value(&model)?))
}

/// GET /orders/{order_no}/shipping-methods
/// Applicable methods for the default shipment, or for another destination
/// when `country_code` is given
pub async fn list_shipping_methods(
    State(state): State<AppState>,
    Path(order_no): Path<String>,
    Query(query): Query<ShippingAddressQuery>,
) -> Result<Json<Vec<ShippingMethodEntry>>, AppError> {
    let order = load_order(&state, &order_no).await?;

    let address = query.country_code.map(|country_code| OrderAddress {
        country_code,
        postal_code: query.postal_code.unwrap_or_default(),
        state_code: query.state_code,
        ..OrderAddress::default()
    });

    Ok(Json(state.checkout.shipping_options(&order, address.as_ref())))
}

/// POST /orders/{order_no}/shipping-method
pub async fn select_shipping_method(
    State(state): State<AppState>,
    Path(order_no): Path<String>,
    Json(req): Json<SelectShippingMethodRequest>,
) -> Result<Json<ShippingViewModel>, AppError> {
    let mut order = load_order(&state, &order_no).await?;
    ensure_draft(&order)?;

    state
        .checkout
        .select_shipping_method(&mut order, req.shipping_method_id.as_deref());
    state.orders.save(&order).await.map_err(AppError::store)?;

    Ok(Json(state.checkout.shipping_model(&order)))
}

/// POST /orders/{order_no}/place
/// Place the order; failures are reported in the body, not the status code
pub async fn place_order(
    State(state): State<AppState>,
    Path(order_no): Path<String>,
) -> Result<Json<Value>, AppError> {
    let mut order = load_order(&state, &order_no).await?;
    ensure_draft(&order)?;

    let result = state.checkout.place_order(&mut order).await;
    // render what was persisted; a lost race leaves the winner's order stored
    let order = state.orders.get(&order_no).await.unwrap_or(order);
    let model = state.checkout.build_order_model(&order);

    Ok(Json(json!({
        "error": result.error,
        "error_kind": result.error_kind,
        "order": model,
    })))
}
