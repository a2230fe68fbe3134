use crate::models::Order;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome reported by the order manager for a placement request
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlacementStatus {
    Ok,
    Error,
}

/// The platform's order management system.
///
/// Both operations mutate the order in place. Persisting those changes is
/// the job of the enclosing [`crate::Transaction`].
#[async_trait]
pub trait OrderManager: Send + Sync {
    /// Transition a created order to a placed one
    async fn place_order(&self, order: &mut Order) -> Result<PlacementStatus, OrderManagerError>;

    /// Mark a created order as failed after an unsuccessful placement
    async fn fail_order(&self, order: &mut Order) -> Result<(), OrderManagerError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OrderManagerError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Invalid state transition from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Order manager unavailable: {0}")]
    Unavailable(String),
}
