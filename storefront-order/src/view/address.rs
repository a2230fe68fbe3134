use crate::models::OrderAddress;
use serde::Serialize;
use storefront_shared::Masked;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressView {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub address2: Option<String>,
    pub city: String,
    pub postal_code: String,
    pub state_code: Option<String>,
    pub country_code: String,
    pub phone: Option<Masked<String>>,
}

/// Display projection of a shipping or billing address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressModel {
    pub address: Option<AddressView>,
}

impl AddressModel {
    pub fn new(address: Option<&OrderAddress>) -> Self {
        Self {
            address: address.map(|a| AddressView {
                first_name: a.first_name.clone(),
                last_name: a.last_name.clone(),
                address1: a.address1.clone(),
                address2: a.address2.clone(),
                city: a.city.clone(),
                postal_code: a.postal_code.clone(),
                state_code: a.state_code.clone(),
                country_code: a.country_code.clone(),
                phone: a.phone.clone(),
            }),
        }
    }
}
