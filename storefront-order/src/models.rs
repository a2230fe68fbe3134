use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storefront_catalog::ShippingMethod;
use storefront_shared::{Masked, Money};
use uuid::Uuid;

/// Order status as tracked by the order manager
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Created,
    New,
    Open,
    Completed,
    Cancelled,
    Failed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfirmationStatus {
    #[default]
    NotConfirmed,
    Confirmed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportStatus {
    #[default]
    NotExported,
    Ready,
    Exported,
    Failed,
}

/// A postal address attached to a shipment or to billing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAddress {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    #[serde(default)]
    pub address2: Option<String>,
    pub city: String,
    pub postal_code: String,
    #[serde(default)]
    pub state_code: Option<String>,
    pub country_code: String,
    #[serde(default)]
    pub phone: Option<Masked<String>>,
}

/// The deliverable unit of an order to one destination
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shipment {
    pub id: String,
    #[serde(default)]
    pub shipping_method: Option<ShippingMethod>,
    #[serde(default)]
    pub shipping_address: Option<OrderAddress>,
}

impl Shipment {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            shipping_method: None,
            shipping_address: None,
        }
    }

    /// Replace the selected method; `None` clears the selection
    pub fn set_shipping_method(&mut self, method: Option<ShippingMethod>) {
        self.shipping_method = method;
    }

    pub fn shipping_method(&self) -> Option<&ShippingMethod> {
        self.shipping_method.as_ref()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInstrument {
    #[serde(default = "Uuid::new_v4")]
    pub uuid: Uuid,
    /// e.g. `CREDIT_CARD`, `GIFT_CERTIFICATE`
    pub payment_method: String,
    pub amount: Money,
    #[serde(default)]
    pub credit_card_type: Option<String>,
    #[serde(default)]
    pub credit_card_number: Option<Masked<String>>,
    #[serde(default)]
    pub credit_card_expiration_month: Option<u32>,
    #[serde(default)]
    pub credit_card_expiration_year: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductLineItem {
    #[serde(default = "Uuid::new_v4")]
    pub uuid: Uuid,
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    /// Unit price before adjustments
    pub base_price: Money,
    /// Line total after promotions
    pub adjusted_price: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderTotals {
    pub merchandise_total: Money,
    pub shipping_total: Money,
    pub tax_total: Money,
    pub order_discount: Money,
    pub shipping_discount: Money,
    pub grand_total: Money,
}

impl OrderTotals {
    pub fn zero(currency_code: &str) -> Self {
        Self {
            merchandise_total: Money::zero(currency_code),
            shipping_total: Money::zero(currency_code),
            tax_total: Money::zero(currency_code),
            order_discount: Money::zero(currency_code),
            shipping_discount: Money::zero(currency_code),
            grand_total: Money::zero(currency_code),
        }
    }
}

/// A customer's order as handed over by the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub order_no: String,
    #[serde(default)]
    pub customer_email: Option<Masked<String>>,
    pub currency_code: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
    #[serde(default)]
    pub export_status: ExportStatus,
    #[serde(default)]
    pub billing_address: Option<OrderAddress>,
    pub default_shipment: Shipment,
    #[serde(default)]
    pub payment_instruments: Vec<PaymentInstrument>,
    #[serde(default)]
    pub line_items: Vec<ProductLineItem>,
    pub totals: OrderTotals,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn new(order_no: impl Into<String>, currency_code: impl Into<String>) -> Self {
        let now = Utc::now();
        let currency_code = currency_code.into();
        Self {
            id: Uuid::new_v4(),
            order_no: order_no.into(),
            customer_email: None,
            totals: OrderTotals::zero(&currency_code),
            currency_code,
            status: OrderStatus::Created,
            confirmation_status: ConfirmationStatus::NotConfirmed,
            export_status: ExportStatus::NotExported,
            billing_address: None,
            default_shipment: Shipment::new("me"),
            payment_instruments: Vec::new(),
            line_items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    pub fn set_confirmation_status(&mut self, status: ConfirmationStatus) {
        self.confirmation_status = status;
        self.updated_at = Utc::now();
    }

    pub fn set_export_status(&mut self, status: ExportStatus) {
        self.export_status = status;
        self.updated_at = Utc::now();
    }

    /// Units across all lines, widened so oversized quantities cannot overflow
    pub fn total_quantity(&self) -> u64 {
        self.line_items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }

    /// Sum of all payment instrument amounts, `None` on mixed currencies
    pub fn payment_total(&self) -> Option<Money> {
        self.payment_instruments
            .iter()
            .try_fold(Money::zero(&self.currency_code), |acc, pi| {
                acc.checked_add(&pi.amount).ok()
            })
    }
}
