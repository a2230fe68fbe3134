use crate::models::OrderTotals;
use serde::Serialize;
use storefront_catalog::MoneyFormatter;
use storefront_shared::Money;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscountTotal {
    pub value: i64,
    pub formatted: String,
}

impl DiscountTotal {
    fn new(discount: &Money, formatter: &dyn MoneyFormatter) -> Self {
        Self {
            value: discount.value,
            formatted: formatter.format(discount),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsModel {
    pub sub_total: String,
    pub total_shipping_cost: String,
    pub total_tax: String,
    pub grand_total: String,
    pub order_level_discount_total: DiscountTotal,
    pub shipping_level_discount_total: DiscountTotal,
}

impl TotalsModel {
    pub fn new(totals: &OrderTotals, formatter: &dyn MoneyFormatter) -> Self {
        Self {
            sub_total: formatter.format(&totals.merchandise_total),
            total_shipping_cost: formatter.format(&totals.shipping_total),
            total_tax: formatter.format(&totals.tax_total),
            grand_total: formatter.format(&totals.grand_total),
            order_level_discount_total: DiscountTotal::new(&totals.order_discount, formatter),
            shipping_level_discount_total: DiscountTotal::new(&totals.shipping_discount, formatter),
        }
    }
}
