use crate::models::Order;
use serde::Serialize;
use storefront_catalog::MoneyFormatter;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemView {
    #[serde(rename = "UUID")]
    pub uuid: Uuid,
    pub id: String,
    pub product_name: String,
    pub quantity: u32,
    pub price: String,
    pub total: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductLineItemsModel {
    pub items: Vec<LineItemView>,
    pub total_quantity: u64,
}

impl ProductLineItemsModel {
    pub fn new(order: &Order, formatter: &dyn MoneyFormatter) -> Self {
        let items = order
            .line_items
            .iter()
            .map(|item| LineItemView {
                uuid: item.uuid,
                id: item.product_id.clone(),
                product_name: item.product_name.clone(),
                quantity: item.quantity,
                price: formatter.format(&item.base_price),
                total: formatter.format(&item.adjusted_price),
            })
            .collect();

        Self {
            items,
            total_quantity: order.total_quantity(),
        }
    }
}
