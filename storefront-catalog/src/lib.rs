pub mod product;
pub mod category;
pub mod shipping_method;
pub mod formatter;

pub use product::{Product, ProductType};
pub use category::{breadcrumbs, Breadcrumb, CatalogError, CatalogRepository, Category, ROOT_CATEGORY_ID};
pub use shipping_method::{ShippingMethod, ShippingMethodCustom};
pub use formatter::{LocaleMoneyFormatter, MoneyFormatter};
