use crate::models::Order;
use async_trait::async_trait;

/// An open unit of work against the order store.
///
/// Dropping a transaction without calling [`Transaction::commit`] aborts it
/// and discards everything staged on it.
#[async_trait]
pub trait Transaction: Send {
    /// Record the current state of `order` to be written on commit
    fn stage(&mut self, order: &Order);

    async fn commit(self: Box<Self>) -> Result<(), TransactionError>;
}

#[async_trait]
pub trait TransactionManager: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn Transaction>, TransactionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    #[error("Failed to begin transaction: {0}")]
    Begin(String),

    #[error("Failed to commit transaction: {0}")]
    Commit(String),
}
