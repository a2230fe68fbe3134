//! Fixtures and fakes shared by the unit tests of this crate.

use crate::manager::{OrderManager, OrderManagerError, PlacementStatus};
use crate::models::{
    Order, OrderAddress, OrderStatus, OrderTotals, PaymentInstrument, ProductLineItem, Shipment,
};
use crate::shipping::{ShipmentShippingModel, ShippingManager};
use crate::transaction::{Transaction, TransactionError, TransactionManager};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use storefront_catalog::ShippingMethod;
use storefront_shared::{Masked, Money};
use uuid::Uuid;

pub fn ground() -> ShippingMethod {
    ShippingMethod::new("001", "Ground", "Order received within 7-10 business days")
        .with_arrival_time("7-10 Business Days")
}

pub fn express() -> ShippingMethod {
    ShippingMethod::new("002", "2-Day Express", "Order received in 2 business days")
        .with_arrival_time("2 Business Days")
}

pub fn overnight() -> ShippingMethod {
    ShippingMethod::new("003", "Overnight", "Order received the next business day")
        .with_arrival_time("Next Day")
}

fn usd(value: i64) -> Money {
    Money::new(value, "USD")
}

pub fn address(first_name: &str, country_code: &str) -> OrderAddress {
    OrderAddress {
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        address1: "5 Wall St".to_string(),
        address2: None,
        city: "Burlington".to_string(),
        postal_code: "01803".to_string(),
        state_code: Some("MA".to_string()),
        country_code: country_code.to_string(),
        phone: Some(Masked::from("781-555-0100")),
    }
}

/// A fully populated draft order: two lines, ground shipping, one card
pub fn sample_order() -> Order {
    let mut order = Order::new("00000101", "USD");
    order.customer_email = Some(Masked::from("jane@example.com"));
    order.billing_address = Some(address("Jane", "US"));

    let mut shipment = Shipment::new("me");
    shipment.shipping_address = Some(address("John", "US"));
    shipment.set_shipping_method(Some(ground()));
    order.default_shipment = shipment;

    order.line_items = vec![
        ProductLineItem {
            uuid: Uuid::new_v4(),
            product_id: "701643421084M".to_string(),
            product_name: "Striped Silk Tie".to_string(),
            quantity: 2,
            base_price: usd(1200),
            adjusted_price: usd(2400),
        },
        ProductLineItem {
            uuid: Uuid::new_v4(),
            product_id: "701644031206M".to_string(),
            product_name: "Floral Blouse".to_string(),
            quantity: 1,
            base_price: usd(2200),
            adjusted_price: usd(2200),
        },
    ];

    order.totals = OrderTotals {
        merchandise_total: usd(4600),
        shipping_total: usd(799),
        tax_total: usd(398),
        order_discount: usd(0),
        shipping_discount: usd(0),
        grand_total: usd(5797),
    };

    order.payment_instruments = vec![PaymentInstrument {
        uuid: Uuid::new_v4(),
        payment_method: "CREDIT_CARD".to_string(),
        amount: usd(5797),
        credit_card_type: Some("Visa".to_string()),
        credit_card_number: Some(Masked::from("4111111111111111")),
        credit_card_expiration_month: Some(12),
        credit_card_expiration_year: Some(2030),
    }];

    order
}

/// Shipping rules backed by a fixed method list
pub struct FakeShipping {
    methods: Vec<ShippingMethod>,
    default: Option<ShippingMethod>,
    /// (method id, country code) pairs that are not shippable
    restricted: Vec<(String, String)>,
}

impl FakeShipping {
    pub fn new(methods: Vec<ShippingMethod>) -> Self {
        Self {
            methods,
            default: None,
            restricted: Vec::new(),
        }
    }

    pub fn with_default(mut self, method: ShippingMethod) -> Self {
        self.default = Some(method);
        self
    }

    pub fn restrict(mut self, method_id: &str, country_code: &str) -> Self {
        self.restricted
            .push((method_id.to_string(), country_code.to_string()));
        self
    }

    fn methods_for(&self, country_code: Option<&str>) -> Vec<ShippingMethod> {
        self.methods
            .iter()
            .filter(|method| {
                !self.restricted.iter().any(|(id, country)| {
                    *id == method.id && Some(country.as_str()) == country_code
                })
            })
            .cloned()
            .collect()
    }
}

struct FakeShipmentModel<'a> {
    shipping: &'a FakeShipping,
    shipment: &'a Shipment,
}

impl ShipmentShippingModel for FakeShipmentModel<'_> {
    fn applicable_shipping_methods(&self) -> Vec<ShippingMethod> {
        let country = self
            .shipment
            .shipping_address
            .as_ref()
            .map(|a| a.country_code.as_str());
        self.shipping.methods_for(country)
    }

    fn applicable_shipping_methods_for(&self, address: &OrderAddress) -> Vec<ShippingMethod> {
        self.shipping.methods_for(Some(&address.country_code))
    }

    fn shipping_cost(&self, method: &ShippingMethod) -> Money {
        match method.id.as_str() {
            "001" => usd(799),
            "002" => usd(1599),
            _ => usd(2999),
        }
    }
}

impl ShippingManager for FakeShipping {
    fn default_shipping_method(&self) -> Option<ShippingMethod> {
        self.default.clone()
    }

    fn shipment_shipping_model<'a>(
        &'a self,
        shipment: &'a Shipment,
    ) -> Box<dyn ShipmentShippingModel + 'a> {
        Box::new(FakeShipmentModel {
            shipping: self,
            shipment,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerOutcome {
    Accept,
    Reject,
    Raise,
}

/// Order manager that answers with a fixed outcome and counts calls
pub struct RecordingOrderManager {
    outcome: ManagerOutcome,
    pub place_calls: AtomicUsize,
    pub fail_calls: AtomicUsize,
}

impl RecordingOrderManager {
    pub fn new(outcome: ManagerOutcome) -> Self {
        Self {
            outcome,
            place_calls: AtomicUsize::new(0),
            fail_calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl OrderManager for RecordingOrderManager {
    async fn place_order(&self, order: &mut Order) -> Result<PlacementStatus, OrderManagerError> {
        self.place_calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            ManagerOutcome::Accept => {
                order.update_status(OrderStatus::New);
                Ok(PlacementStatus::Ok)
            }
            ManagerOutcome::Reject => Ok(PlacementStatus::Error),
            ManagerOutcome::Raise => Err(OrderManagerError::Unavailable("offline".to_string())),
        }
    }

    async fn fail_order(&self, order: &mut Order) -> Result<(), OrderManagerError> {
        self.fail_calls.fetch_add(1, Ordering::SeqCst);
        order.update_status(OrderStatus::Failed);
        Ok(())
    }
}

#[derive(Default)]
struct TransactionLog {
    begins: AtomicUsize,
    commits: AtomicUsize,
    fail_begin: Option<usize>,
    fail_commit: Option<usize>,
    committed: Mutex<Vec<Order>>,
}

/// Transaction manager that keeps committed orders and can fail the n-th
/// `begin` or `commit` (1-based)
#[derive(Clone, Default)]
pub struct RecordingTransactions {
    log: Arc<TransactionLog>,
}

impl RecordingTransactions {
    pub fn failing_begin(n: usize) -> Self {
        Self {
            log: Arc::new(TransactionLog {
                fail_begin: Some(n),
                ..TransactionLog::default()
            }),
        }
    }

    pub fn failing_commit(n: usize) -> Self {
        Self {
            log: Arc::new(TransactionLog {
                fail_commit: Some(n),
                ..TransactionLog::default()
            }),
        }
    }

    pub fn begins(&self) -> usize {
        self.log.begins.load(Ordering::SeqCst)
    }

    pub fn committed(&self) -> Vec<Order> {
        self.log.committed.lock().unwrap().clone()
    }
}

struct RecordingTransaction {
    log: Arc<TransactionLog>,
    staged: Vec<Order>,
}

#[async_trait]
impl Transaction for RecordingTransaction {
    fn stage(&mut self, order: &Order) {
        self.staged.push(order.clone());
    }

    async fn commit(self: Box<Self>) -> Result<(), TransactionError> {
        let RecordingTransaction { log, staged } = *self;
        let n = log.commits.fetch_add(1, Ordering::SeqCst) + 1;
        if log.fail_commit == Some(n) {
            return Err(TransactionError::Commit("write conflict".to_string()));
        }
        log.committed.lock().unwrap().extend(staged);
        Ok(())
    }
}

#[async_trait]
impl TransactionManager for RecordingTransactions {
    async fn begin(&self) -> Result<Box<dyn Transaction>, TransactionError> {
        let n = self.log.begins.fetch_add(1, Ordering::SeqCst) + 1;
        if self.log.fail_begin == Some(n) {
            return Err(TransactionError::Begin("no connection".to_string()));
        }
        Ok(Box::new(RecordingTransaction {
            log: self.log.clone(),
            staged: Vec::new(),
        }))
    }
}
