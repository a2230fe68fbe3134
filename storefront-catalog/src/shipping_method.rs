use serde::{Deserialize, Serialize};

/// Merchant-defined attributes attached to a shipping method
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingMethodCustom {
    pub estimated_arrival_time: Option<String>,
}

/// A named delivery option. Its cost is owned by the shipping rules engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingMethod {
    pub id: String,
    pub display_name: String,
    pub description: String,
    #[serde(default)]
    pub custom: ShippingMethodCustom,
}

impl ShippingMethod {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            description: description.into(),
            custom: ShippingMethodCustom::default(),
        }
    }

    pub fn with_arrival_time(mut self, estimate: impl Into<String>) -> Self {
        self.custom.estimated_arrival_time = Some(estimate.into());
        self
    }
}
