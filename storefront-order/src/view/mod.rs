//! Display projections of platform order objects.
//!
//! Every constructor here is a pure field mapping: it borrows the platform
//! object, formats money through the injected [`MoneyFormatter`] and never
//! mutates its input.
//!
//! [`MoneyFormatter`]: storefront_catalog::MoneyFormatter

pub mod address;
pub mod billing;
pub mod line_items;
pub mod order;
pub mod payment;
pub mod totals;

pub use address::{AddressModel, AddressView};
pub use billing::BillingModel;
pub use line_items::{LineItemView, ProductLineItemsModel};
pub use order::OrderViewModel;
pub use payment::{PaymentModel, SelectedPaymentInstrument};
pub use totals::{DiscountTotal, TotalsModel};
