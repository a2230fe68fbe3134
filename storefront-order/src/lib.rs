pub mod models;
pub mod manager;
pub mod transaction;
pub mod shipping;
pub mod view;
pub mod orchestrator;

#[cfg(test)]
pub(crate) mod testing;

pub use models::{
    ConfirmationStatus, ExportStatus, Order, OrderAddress, OrderStatus, OrderTotals,
    PaymentInstrument, ProductLineItem, Shipment,
};
pub use manager::{OrderManager, OrderManagerError, PlacementStatus};
pub use transaction::{Transaction, TransactionError, TransactionManager};
pub use shipping::{ShipmentShippingModel, ShippingManager, ShippingViewModel};
pub use view::OrderViewModel;
pub use orchestrator::{CheckoutOrchestrator, PlacementFailure, PlacementResult};
