pub mod money;
pub mod pii;

pub use money::{Money, MoneyError};
pub use pii::{mask_card_number, Masked};
