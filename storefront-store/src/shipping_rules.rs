use crate::app_config::{ShippingConfig, ShippingMethodConfig};
use std::collections::HashSet;
use storefront_catalog::ShippingMethod;
use storefront_order::{OrderAddress, Shipment, ShipmentShippingModel, ShippingManager};
use storefront_shared::Money;

struct ConfiguredMethod {
    method: ShippingMethod,
    cost: Money,
    excluded_countries: HashSet<String>,
}

impl ConfiguredMethod {
    fn from_config(config: &ShippingMethodConfig, currency: &str) -> Self {
        let mut method = ShippingMethod::new(&config.id, &config.display_name, &config.description);
        method.custom.estimated_arrival_time = config.estimated_arrival_time.clone();

        Self {
            method,
            cost: Money::new(config.cost, currency),
            excluded_countries: config
                .excluded_countries
                .iter()
                .map(|c| c.to_ascii_uppercase())
                .collect(),
        }
    }

    fn ships_to(&self, country_code: Option<&str>) -> bool {
        match country_code {
            Some(code) => !self.excluded_countries.contains(&code.to_ascii_uppercase()),
            None => true,
        }
    }
}

/// Flat-rate shipping rules read from configuration.
///
/// A method applies unless the destination country is excluded for it. A
/// shipment without an address can use every method.
pub struct ConfiguredShipping {
    methods: Vec<ConfiguredMethod>,
    default_method: Option<String>,
    currency: String,
}

impl ConfiguredShipping {
    pub fn new(config: &ShippingConfig, currency: &str) -> Result<Self, ShippingConfigError> {
        let mut seen = HashSet::new();
        for method in &config.methods {
            if !seen.insert(method.id.as_str()) {
                return Err(ShippingConfigError::DuplicateMethod(method.id.clone()));
            }
            if method.cost < 0 {
                return Err(ShippingConfigError::NegativeCost(method.id.clone()));
            }
        }

        if let Some(default) = &config.default_method {
            if !seen.contains(default.as_str()) {
                return Err(ShippingConfigError::UnknownDefault(default.clone()));
            }
        }

        Ok(Self {
            methods: config
                .methods
                .iter()
                .map(|m| ConfiguredMethod::from_config(m, currency))
                .collect(),
            default_method: config.default_method.clone(),
            currency: currency.to_string(),
        })
    }

    fn applicable(&self, country_code: Option<&str>) -> Vec<ShippingMethod> {
        self.methods
            .iter()
            .filter(|m| m.ships_to(country_code))
            .map(|m| m.method.clone())
            .collect()
    }
}

struct ConfiguredShipmentModel<'a> {
    rules: &'a ConfiguredShipping,
    shipment: &'a Shipment,
}

impl ShipmentShippingModel for ConfiguredShipmentModel<'_> {
    fn applicable_shipping_methods(&self) -> Vec<ShippingMethod> {
        let country = self
            .shipment
            .shipping_address
            .as_ref()
            .map(|address| address.country_code.as_str());
        self.rules.applicable(country)
    }

    fn applicable_shipping_methods_for(&self, address: &OrderAddress) -> Vec<ShippingMethod> {
        self.rules.applicable(Some(&address.country_code))
    }

    fn shipping_cost(&self, method: &ShippingMethod) -> Money {
        match self.rules.methods.iter().find(|m| m.method.id == method.id) {
            Some(configured) => configured.cost.clone(),
            None => {
                tracing::warn!("No shipping cost configured for method {}", method.id);
                Money::zero(&self.rules.currency)
            }
        }
    }
}

impl ShippingManager for ConfiguredShipping {
    fn default_shipping_method(&self) -> Option<ShippingMethod> {
        let id = self.default_method.as_deref()?;
        self.methods
            .iter()
            .find(|m| m.method.id == id)
            .map(|m| m.method.clone())
    }

    fn shipment_shipping_model<'a>(
        &'a self,
        shipment: &'a Shipment,
    ) -> Box<dyn ShipmentShippingModel + 'a> {
        Box::new(ConfiguredShipmentModel {
            rules: self,
            shipment,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ShippingConfigError {
    #[error("Duplicate shipping method: {0}")]
    DuplicateMethod(String),

    #[error("Default shipping method is not configured: {0}")]
    UnknownDefault(String),

    #[error("Negative cost for shipping method: {0}")]
    NegativeCost(String),
}
