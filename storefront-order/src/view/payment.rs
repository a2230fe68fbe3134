use crate::models::PaymentInstrument;
use serde::Serialize;
use storefront_catalog::MoneyFormatter;
use storefront_shared::mask_card_number;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedPaymentInstrument {
    pub payment_method: String,
    pub amount: String,
    pub credit_card_type: Option<String>,
    pub masked_credit_card_number: Option<String>,
    pub expiration_month: Option<u32>,
    pub expiration_year: Option<u32>,
}

/// Payment instruments already attached to an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentModel {
    pub selected_payment_instruments: Vec<SelectedPaymentInstrument>,
}

impl PaymentModel {
    pub fn new(instruments: &[PaymentInstrument], formatter: &dyn MoneyFormatter) -> Self {
        Self {
            selected_payment_instruments: instruments
                .iter()
                .map(|pi| SelectedPaymentInstrument {
                    payment_method: pi.payment_method.clone(),
                    amount: formatter.format(&pi.amount),
                    credit_card_type: pi.credit_card_type.clone(),
                    masked_credit_card_number: pi
                        .credit_card_number
                        .as_ref()
                        .map(|number| mask_card_number(number.expose())),
                    expiration_month: pi.credit_card_expiration_month,
                    expiration_year: pi.credit_card_expiration_year,
                })
                .collect(),
        }
    }
}
