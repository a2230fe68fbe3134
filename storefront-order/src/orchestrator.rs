use crate::manager::{OrderManager, OrderManagerError, PlacementStatus};
use crate::models::{ConfirmationStatus, ExportStatus, Order, OrderAddress};
use crate::shipping::{self, ShippingManager, ShippingMethodEntry, ShippingViewModel};
use crate::transaction::{TransactionError, TransactionManager};
use crate::view::{
    AddressModel, BillingModel, OrderViewModel, PaymentModel, ProductLineItemsModel, TotalsModel,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use storefront_catalog::MoneyFormatter;

/// Why a placement attempt ended in the failed state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlacementFailure {
    /// The order manager answered with an error status
    RejectedByOrderManager,
    /// Placement succeeded but the transaction did not commit
    CommitFailure,
    /// Any other error inside the placement transaction
    Unknown,
}

/// What the checkout controller gets back from [`CheckoutOrchestrator::place_order`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlacementResult {
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<PlacementFailure>,
}

impl PlacementResult {
    pub fn placed() -> Self {
        Self {
            error: false,
            error_kind: None,
        }
    }

    pub fn failed(kind: PlacementFailure) -> Self {
        Self {
            error: true,
            error_kind: Some(kind),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CompensationError {
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    #[error(transparent)]
    OrderManager(#[from] OrderManagerError),
}

/// Places orders and assembles the models the checkout pages render.
///
/// Every platform dependency is injected so tests and the in-memory
/// storefront can substitute their own.
pub struct CheckoutOrchestrator {
    order_manager: Arc<dyn OrderManager>,
    transactions: Arc<dyn TransactionManager>,
    shipping: Arc<dyn ShippingManager>,
    formatter: Arc<dyn MoneyFormatter>,
}

impl CheckoutOrchestrator {
    pub fn new(
        order_manager: Arc<dyn OrderManager>,
        transactions: Arc<dyn TransactionManager>,
        shipping: Arc<dyn ShippingManager>,
        formatter: Arc<dyn MoneyFormatter>,
    ) -> Self {
        Self {
            order_manager,
            transactions,
            shipping,
            formatter,
        }
    }

    /// Place `order` and mark it confirmed and ready for export.
    ///
    /// On any failure the order is reset to its state before the attempt and
    /// failed through the order manager in a transaction of its own.
    pub async fn place_order(&self, order: &mut Order) -> PlacementResult {
        let before = order.clone();

        match self.try_place(order).await {
            Ok(()) => {
                tracing::info!("Order {} placed", order.order_no);
                PlacementResult::placed()
            }
            Err(failure) => {
                tracing::warn!("Order {} placement failed: {:?}", order.order_no, failure);
                *order = before;

                if let Err(e) = self.fail_order(order).await {
                    tracing::error!("Failed to fail order {}: {}", order.order_no, e);
                }
                PlacementResult::failed(failure)
            }
        }
    }

    /// The transactional attempt. An early return drops the open
    /// transaction uncommitted.
    async fn try_place(&self, order: &mut Order) -> Result<(), PlacementFailure> {
        let mut tx = self.transactions.begin().await.map_err(|e| {
            tracing::warn!("Could not open placement transaction: {}", e);
            PlacementFailure::Unknown
        })?;

        match self.order_manager.place_order(order).await {
            Ok(PlacementStatus::Ok) => {}
            Ok(PlacementStatus::Error) => return Err(PlacementFailure::RejectedByOrderManager),
            Err(e) => {
                tracing::warn!("Order manager error for {}: {}", order.order_no, e);
                return Err(PlacementFailure::Unknown);
            }
        }

        order.set_confirmation_status(ConfirmationStatus::Confirmed);
        order.set_export_status(ExportStatus::Ready);
        tx.stage(order);

        tx.commit().await.map_err(|e| {
            tracing::warn!("Placement commit failed for {}: {}", order.order_no, e);
            PlacementFailure::CommitFailure
        })
    }

    async fn fail_order(&self, order: &mut Order) -> Result<(), CompensationError> {
        let mut tx = self.transactions.begin().await?;
        self.order_manager.fail_order(order).await?;
        tx.stage(order);
        tx.commit().await?;
        Ok(())
    }

    /// Assemble the confirmation page model. Reads only.
    pub fn build_order_model<'a>(&self, order: &'a Order) -> OrderViewModel<'a> {
        let formatter = self.formatter.as_ref();
        let shipment = &order.default_shipment;
        let shipment_model = self.shipping.shipment_shipping_model(shipment);

        let shipping_address_model = AddressModel::new(shipment.shipping_address.as_ref());
        let shipping_model = ShippingViewModel::new(
            Some(shipment),
            Some(shipment_model.as_ref()),
            Some(&shipping_address_model),
            formatter,
        );

        let payment_model = PaymentModel::new(&order.payment_instruments, formatter);
        let billing_address_model = AddressModel::new(order.billing_address.as_ref());
        let billing_model = BillingModel::new(billing_address_model, payment_model);

        let line_items_model = ProductLineItemsModel::new(order, formatter);
        let totals_model = TotalsModel::new(&order.totals, formatter);

        OrderViewModel::new(
            order,
            shipping_model,
            billing_model,
            totals_model,
            line_items_model,
        )
    }

    /// Select a shipping method on the order's default shipment
    pub fn select_shipping_method(&self, order: &mut Order, shipping_method_id: Option<&str>) {
        shipping::select_shipping_method(
            self.shipping.as_ref(),
            &mut order.default_shipment,
            shipping_method_id,
            None,
        );
    }

    /// Shipping options for the default shipment, optionally at another address
    pub fn shipping_options(
        &self,
        order: &Order,
        address: Option<&OrderAddress>,
    ) -> Vec<ShippingMethodEntry> {
        let shipment_model = self.shipping.shipment_shipping_model(&order.default_shipment);
        shipping::applicable_shipping_methods(
            shipment_model.as_ref(),
            self.formatter.as_ref(),
            address,
        )
    }

    /// The shipping step model for the default shipment
    pub fn shipping_model(&self, order: &Order) -> ShippingViewModel {
        let shipment = &order.default_shipment;
        let shipment_model = self.shipping.shipment_shipping_model(shipment);
        let address_model = AddressModel::new(shipment.shipping_address.as_ref());

        ShippingViewModel::new(
            Some(shipment),
            Some(shipment_model.as_ref()),
            Some(&address_model),
            self.formatter.as_ref(),
        )
    }
}
