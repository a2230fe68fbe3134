use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use storefront_order::{
    Order, OrderManager, OrderManagerError, OrderStatus, PlacementStatus, Transaction,
    TransactionError, TransactionManager,
};
use tokio::sync::RwLock;

/// In-process order store acting as both order manager and transaction
/// manager.
///
/// Order manager calls only change the order they are handed. Changes reach
/// the store when a transaction that staged them commits; all staged orders
/// are written under one write lock.
#[derive(Clone, Default)]
pub struct MemoryOrderStore {
    orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a draft order
    pub async fn insert(&self, order: Order) -> Result<(), StoreError> {
        if order.status != OrderStatus::Created {
            return Err(StoreError::NotDraft(order.order_no));
        }

        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.order_no) {
            return Err(StoreError::DuplicateOrder(order.order_no));
        }
        orders.insert(order.order_no.clone(), order);
        Ok(())
    }

    pub async fn get(&self, order_no: &str) -> Option<Order> {
        self.orders.read().await.get(order_no).cloned()
    }

    /// Overwrite a draft outside of placement, e.g. after shipping selection.
    ///
    /// Refused once the stored order has left `Created`, so a copy read
    /// before placement cannot overwrite the placed order.
    pub async fn save(&self, order: &Order) -> Result<(), StoreError> {
        let mut orders = self.orders.write().await;
        match orders.get_mut(&order.order_no) {
            Some(stored) if stored.status != OrderStatus::Created => {
                Err(StoreError::Finalized(order.order_no.clone()))
            }
            Some(stored) => {
                *stored = order.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(order.order_no.clone())),
        }
    }

    /// Reasons the platform would refuse to place this order
    fn rejection_reason(order: &Order) -> Option<&'static str> {
        if order.line_items.is_empty() {
            return Some("no line items");
        }
        if order.default_shipment.shipping_method().is_none() {
            return Some("no shipping method");
        }
        if order.payment_instruments.is_empty() {
            return Some("no payment instruments");
        }
        if order.payment_total().as_ref() != Some(&order.totals.grand_total) {
            return Some("payment total does not cover grand total");
        }
        None
    }
}

#[async_trait]
impl OrderManager for MemoryOrderStore {
    async fn place_order(&self, order: &mut Order) -> Result<PlacementStatus, OrderManagerError> {
        if order.status != OrderStatus::Created {
            return Err(OrderManagerError::InvalidTransition {
                from: format!("{:?}", order.status),
                to: "NEW".to_string(),
            });
        }

        if let Some(reason) = Self::rejection_reason(order) {
            tracing::info!("Order {} rejected: {}", order.order_no, reason);
            return Ok(PlacementStatus::Error);
        }

        order.update_status(OrderStatus::New);
        Ok(PlacementStatus::Ok)
    }

    async fn fail_order(&self, order: &mut Order) -> Result<(), OrderManagerError> {
        if order.status != OrderStatus::Created {
            return Err(OrderManagerError::InvalidTransition {
                from: format!("{:?}", order.status),
                to: "FAILED".to_string(),
            });
        }

        order.update_status(OrderStatus::Failed);
        Ok(())
    }
}

struct MemoryTransaction {
    orders: Arc<RwLock<HashMap<String, Order>>>,
    staged: HashMap<String, Order>,
}

#[async_trait]
impl Transaction for MemoryTransaction {
    fn stage(&mut self, order: &Order) {
        self.staged.insert(order.order_no.clone(), order.clone());
    }

    async fn commit(self: Box<Self>) -> Result<(), TransactionError> {
        let MemoryTransaction { orders, staged } = *self;
        let mut orders = orders.write().await;

        // Placement and failure both start from a draft; a stored order that
        // already left `Created` was finalized by another transaction.
        for order_no in staged.keys() {
            match orders.get(order_no) {
                None => {
                    return Err(TransactionError::Commit(format!("unknown order {}", order_no)))
                }
                Some(stored) if stored.status != OrderStatus::Created => {
                    return Err(TransactionError::Commit(format!(
                        "order {} is already {:?}",
                        order_no, stored.status
                    )))
                }
                Some(_) => {}
            }
        }
        orders.extend(staged);
        Ok(())
    }
}

#[async_trait]
impl TransactionManager for MemoryOrderStore {
    async fn begin(&self) -> Result<Box<dyn Transaction>, TransactionError> {
        Ok(Box::new(MemoryTransaction {
            orders: self.orders.clone(),
            staged: HashMap::new(),
        }))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Order already exists: {0}")]
    DuplicateOrder(String),

    #[error("Order is not a draft: {0}")]
    NotDraft(String),

    #[error("Order is no longer a draft: {0}")]
    Finalized(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::{LocaleMoneyFormatter, ShippingMethod};
    use storefront_order::{
        CheckoutOrchestrator, ConfirmationStatus, ExportStatus, OrderTotals, PaymentInstrument,
        PlacementFailure, ProductLineItem,
    };
    use storefront_shared::Money;
    use uuid::Uuid;

    use crate::app_config::{ShippingConfig, ShippingMethodConfig};
    use crate::shipping_rules::ConfiguredShipping;

    fn draft(order_no: &str) -> Order {
        let mut order = Order::new(order_no, "USD");
        order.default_shipment.set_shipping_method(Some(ShippingMethod::new(
            "001",
            "Ground",
            "Order received within 7-10 business days",
        )));
        order.line_items.push(ProductLineItem {
            uuid: Uuid::new_v4(),
            product_id: "701643421084M".to_string(),
            product_name: "Striped Silk Tie".to_string(),
            quantity: 1,
            base_price: Money::new(2000, "USD"),
            adjusted_price: Money::new(2000, "USD"),
        });
        order.totals = OrderTotals {
            grand_total: Money::new(2000, "USD"),
            ..OrderTotals::zero("USD")
        };
        order.payment_instruments.push(PaymentInstrument {
            uuid: Uuid::new_v4(),
            payment_method: "GIFT_CERTIFICATE".to_string(),
            amount: Money::new(2000, "USD"),
            credit_card_type: None,
            credit_card_number: None,
            credit_card_expiration_month: None,
            credit_card_expiration_year: None,
        });
        order
    }

    fn checkout(store: &MemoryOrderStore) -> CheckoutOrchestrator {
        let shipping = ConfiguredShipping::new(
            &ShippingConfig {
                default_method: Some("001".to_string()),
                methods: vec![ShippingMethodConfig {
                    id: "001".to_string(),
                    display_name: "Ground".to_string(),
                    description: String::new(),
                    estimated_arrival_time: None,
                    cost: 799,
                    excluded_countries: vec![],
                }],
            },
            "USD",
        )
        .unwrap();

        CheckoutOrchestrator::new(
            Arc::new(store.clone()),
            Arc::new(store.clone()),
            Arc::new(shipping),
            Arc::new(LocaleMoneyFormatter::default()),
        )
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicates() {
        let store = MemoryOrderStore::new();
        store.insert(draft("00000001")).await.unwrap();

        let result = store.insert(draft("00000001")).await;
        assert!(matches!(result, Err(StoreError::DuplicateOrder(_))));
    }

    #[tokio::test]
    async fn test_uncommitted_transaction_is_discarded() {
        let store = MemoryOrderStore::new();
        store.insert(draft("00000002")).await.unwrap();

        let mut order = store.get("00000002").await.unwrap();
        order.update_status(OrderStatus::New);
        {
            let mut tx = store.begin().await.unwrap();
            tx.stage(&order);
        }

        assert_eq!(store.get("00000002").await.unwrap().status, OrderStatus::Created);
    }

    #[tokio::test]
    async fn test_place_order_persists_confirmation() {
        let store = MemoryOrderStore::new();
        store.insert(draft("00000003")).await.unwrap();
        let checkout = checkout(&store);

        let mut order = store.get("00000003").await.unwrap();
        let result = checkout.place_order(&mut order).await;

        assert!(!result.error);
        let stored = store.get("00000003").await.unwrap();
        assert_eq!(stored.status, OrderStatus::New);
        assert_eq!(stored.confirmation_status, ConfirmationStatus::Confirmed);
        assert_eq!(stored.export_status, ExportStatus::Ready);
    }

    #[tokio::test]
    async fn test_incomplete_order_is_failed() {
        let store = MemoryOrderStore::new();
        let mut incomplete = draft("00000004");
        incomplete.payment_instruments.clear();
        store.insert(incomplete).await.unwrap();
        let checkout = checkout(&store);

        let mut order = store.get("00000004").await.unwrap();
        let result = checkout.place_order(&mut order).await;

        assert_eq!(result.error_kind, Some(PlacementFailure::RejectedByOrderManager));
        let stored = store.get("00000004").await.unwrap();
        assert_eq!(stored.status, OrderStatus::Failed);
        assert_eq!(stored.confirmation_status, ConfirmationStatus::NotConfirmed);
    }

    #[tokio::test]
    async fn test_placed_order_cannot_be_placed_again() {
        let store = MemoryOrderStore::new();
        store.insert(draft("00000005")).await.unwrap();
        let checkout = checkout(&store);

        let mut order = store.get("00000005").await.unwrap();
        checkout.place_order(&mut order).await;
        let result = checkout.place_order(&mut order).await;

        assert_eq!(result.error_kind, Some(PlacementFailure::Unknown));
        // the failed compensation leaves the placed order untouched
        assert_eq!(store.get("00000005").await.unwrap().status, OrderStatus::New);
    }

    #[tokio::test]
    async fn test_stale_draft_cannot_overwrite_placed_order() {
        let store = MemoryOrderStore::new();
        store.insert(draft("00000006")).await.unwrap();
        let checkout = checkout(&store);

        let mut stale = store.get("00000006").await.unwrap();
        let mut order = store.get("00000006").await.unwrap();
        assert!(!checkout.place_order(&mut order).await.error);

        checkout.select_shipping_method(&mut stale, Some("001"));
        let saved = store.save(&stale).await;
        assert!(matches!(saved, Err(StoreError::Finalized(_))));

        let result = checkout.place_order(&mut stale).await;
        assert_eq!(result.error_kind, Some(PlacementFailure::CommitFailure));

        let stored = store.get("00000006").await.unwrap();
        assert_eq!(stored.status, OrderStatus::New);
        assert_eq!(stored.confirmation_status, ConfirmationStatus::Confirmed);
        assert_eq!(stored.export_status, ExportStatus::Ready);
    }

    #[tokio::test]
    async fn test_concurrent_placements_commit_once() {
        let store = MemoryOrderStore::new();
        store.insert(draft("00000007")).await.unwrap();
        let checkout = checkout(&store);

        let mut first = store.get("00000007").await.unwrap();
        let mut second = store.get("00000007").await.unwrap();
        let (a, b) = tokio::join!(
            checkout.place_order(&mut first),
            checkout.place_order(&mut second)
        );

        assert_eq!([a.error, b.error].iter().filter(|error| !**error).count(), 1);
        let stored = store.get("00000007").await.unwrap();
        assert_eq!(stored.status, OrderStatus::New);
        assert_eq!(stored.confirmation_status, ConfirmationStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_save_updates_draft() {
        let store = MemoryOrderStore::new();
        let mut order = draft("00000008");
        order.default_shipment.set_shipping_method(None);
        store.insert(order.clone()).await.unwrap();

        order.default_shipment.set_shipping_method(Some(ShippingMethod::new("002", "Express", "")));
        store.save(&order).await.unwrap();

        let stored = store.get("00000008").await.unwrap();
        assert_eq!(stored.default_shipment.shipping_method().map(|m| m.id.as_str()), Some("002"));
    }
}
