use serde::{Deserialize, Serialize};

/// A monetary amount in the currency's minor unit (cents for USD, yen for JPY)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    pub value: i64,
    pub currency_code: String,
}

impl Money {
    pub fn new(value: i64, currency_code: impl Into<String>) -> Self {
        Self {
            value,
            currency_code: currency_code.into(),
        }
    }

    pub fn zero(currency_code: impl Into<String>) -> Self {
        Self::new(0, currency_code)
    }

    /// Number of decimal places the currency is quoted with
    pub fn fraction_digits(&self) -> u32 {
        fraction_digits(&self.currency_code)
    }

    /// Sum two amounts of the same currency
    pub fn checked_add(&self, other: &Money) -> Result<Money, MoneyError> {
        if self.currency_code != other.currency_code {
            return Err(MoneyError::CurrencyMismatch {
                left: self.currency_code.clone(),
                right: other.currency_code.clone(),
            });
        }

        let value = self
            .value
            .checked_add(other.value)
            .ok_or(MoneyError::Overflow)?;
        Ok(Money::new(value, self.currency_code.clone()))
    }
}

/// ISO 4217 minor unit digits for the currencies the storefront sells in.
pub fn fraction_digits(currency_code: &str) -> u32 {
    match currency_code {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
        "BHD" | "KWD" | "OMR" | "JOD" | "TND" => 3,
        _ => 2,
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Currency mismatch: {left} vs {right}")]
    CurrencyMismatch { left: String, right: String },

    #[error("Amount overflow")]
    Overflow,
}
