use super::{BillingModel, ProductLineItemsModel, TotalsModel};
use crate::models::Order;
use crate::shipping::ShippingViewModel;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Everything the order confirmation page renders, built from one order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderViewModel<'a> {
    #[serde(skip)]
    pub order: &'a Order,
    pub order_number: String,
    pub creation_date: DateTime<Utc>,
    pub shipping: ShippingViewModel,
    pub billing: BillingModel,
    pub totals: TotalsModel,
    pub items: ProductLineItemsModel,
}

impl<'a> OrderViewModel<'a> {
    pub fn new(
        order: &'a Order,
        shipping: ShippingViewModel,
        billing: BillingModel,
        totals: TotalsModel,
        items: ProductLineItemsModel,
    ) -> Self {
        Self {
            order,
            order_number: order.order_no.clone(),
            creation_date: order.created_at,
            shipping,
            billing,
            totals,
            items,
        }
    }
}
