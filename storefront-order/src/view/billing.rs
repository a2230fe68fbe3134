use super::{AddressModel, PaymentModel};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingModel {
    pub billing_address: AddressModel,
    pub payment: PaymentModel,
}

impl BillingModel {
    pub fn new(billing_address: AddressModel, payment: PaymentModel) -> Self {
        Self {
            billing_address,
            payment,
        }
    }
}
