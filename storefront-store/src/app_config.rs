use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storefront: StorefrontConfig,
    pub shipping: ShippingConfig,
    #[serde(default)]
    pub catalog: Option<CatalogConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorefrontConfig {
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_locale() -> String { "en_US".to_string() }

fn default_currency() -> String { "USD".to_string() }

#[derive(Debug, Deserialize, Clone)]
pub struct ShippingConfig {
    pub default_method: Option<String>,
    #[serde(default)]
    pub methods: Vec<ShippingMethodConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ShippingMethodConfig {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    pub estimated_arrival_time: Option<String>,
    /// Flat cost in the storefront currency's minor unit
    pub cost: i64,
    #[serde(default)]
    pub excluded_countries: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// JSON file with `categories` and `products`
    pub fixture: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // optional per-environment overrides
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `STOREFRONT__SERVER__PORT=8080`
            .add_source(config::Environment::with_prefix("STOREFRONT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
