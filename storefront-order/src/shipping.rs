use crate::models::{OrderAddress, Shipment};
use crate::view::{AddressModel, AddressView};
use serde::Serialize;
use storefront_catalog::{MoneyFormatter, ShippingMethod};
use storefront_shared::Money;

/// Shipping rules bound to a single shipment
pub trait ShipmentShippingModel {
    /// Methods applicable to the shipment as it currently stands
    fn applicable_shipping_methods(&self) -> Vec<ShippingMethod>;

    /// Methods applicable if the shipment were sent to `address`
    fn applicable_shipping_methods_for(&self, address: &OrderAddress) -> Vec<ShippingMethod>;

    fn shipping_cost(&self, method: &ShippingMethod) -> Money;
}

/// Site-wide shipping configuration
pub trait ShippingManager: Send + Sync {
    fn default_shipping_method(&self) -> Option<ShippingMethod>;

    fn shipment_shipping_model<'a>(
        &'a self,
        shipment: &'a Shipment,
    ) -> Box<dyn ShipmentShippingModel + 'a>;
}

/// One selectable shipping option as rendered on the shipping step
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethodEntry {
    pub description: String,
    pub display_name: String,
    #[serde(rename = "ID")]
    pub id: String,
    pub shipping_cost: String,
    pub estimated_arrival_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedShippingMethod {
    #[serde(rename = "ID")]
    pub id: String,
    pub display_name: String,
    pub description: String,
    pub estimated_arrival_time: Option<String>,
}

impl From<&ShippingMethod> for SelectedShippingMethod {
    fn from(method: &ShippingMethod) -> Self {
        Self {
            id: method.id.clone(),
            display_name: method.display_name.clone(),
            description: method.description.clone(),
            estimated_arrival_time: method.custom.estimated_arrival_time.clone(),
        }
    }
}

/// Flattened shipping state of a shipment.
///
/// The three fields are independent: `None` means "not requested" for
/// `applicable_shipping_methods` and "not available" for the other two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingViewModel {
    pub applicable_shipping_methods: Option<Vec<ShippingMethodEntry>>,
    pub shipping_address: Option<AddressView>,
    pub selected_shipping_method: Option<SelectedShippingMethod>,
}

impl ShippingViewModel {
    pub fn new(
        shipment: Option<&Shipment>,
        shipping_model: Option<&dyn ShipmentShippingModel>,
        address_model: Option<&AddressModel>,
        formatter: &dyn MoneyFormatter,
    ) -> Self {
        Self {
            applicable_shipping_methods: shipping_model
                .map(|model| applicable_shipping_methods(model, formatter, None)),
            shipping_address: address_model.and_then(|model| model.address.clone()),
            selected_shipping_method: shipment
                .and_then(Shipment::shipping_method)
                .map(SelectedShippingMethod::from),
        }
    }
}

/// Set the shipment's shipping method.
///
/// `candidates` is used as given when supplied, otherwise the shipment's
/// applicable methods are fetched. The first candidate whose id equals
/// `shipping_method_id` wins; failing that the site default is used when it
/// is a candidate, and the selection is cleared otherwise.
pub fn select_shipping_method(
    shipping: &dyn ShippingManager,
    shipment: &mut Shipment,
    shipping_method_id: Option<&str>,
    candidates: Option<&[ShippingMethod]>,
) {
    let fetched;
    let candidates = match candidates {
        Some(candidates) => candidates,
        None => {
            fetched = shipping
                .shipment_shipping_model(shipment)
                .applicable_shipping_methods();
            fetched.as_slice()
        }
    };

    let requested = shipping_method_id
        .and_then(|id| candidates.iter().find(|method| method.id == id))
        .cloned();

    let selected = requested.or_else(|| {
        shipping
            .default_shipping_method()
            .filter(|default| candidates.iter().any(|method| method.id == default.id))
    });

    tracing::debug!(
        "Shipment {} shipping method set to {:?}",
        shipment.id,
        selected.as_ref().map(|method| method.id.as_str())
    );
    shipment.set_shipping_method(selected);
}

/// Project the applicable methods into display entries, in engine order.
///
/// With an `address` the engine is asked what would apply at that address
/// instead of the shipment's current one.
pub fn applicable_shipping_methods(
    shipping_model: &dyn ShipmentShippingModel,
    formatter: &dyn MoneyFormatter,
    address: Option<&OrderAddress>,
) -> Vec<ShippingMethodEntry> {
    let methods = match address {
        Some(address) => shipping_model.applicable_shipping_methods_for(address),
        None => shipping_model.applicable_shipping_methods(),
    };

    methods
        .iter()
        .map(|method| ShippingMethodEntry {
            description: method.description.clone(),
            display_name: method.display_name.clone(),
            id: method.id.clone(),
            shipping_cost: formatter.format(&shipping_model.shipping_cost(method)),
            estimated_arrival_time: method.custom.estimated_arrival_time.clone(),
        })
        .collect()
}
