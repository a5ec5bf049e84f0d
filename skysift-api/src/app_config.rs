use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub supplier: SupplierConfig,
    pub generative: GenerativeConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SupplierConfig {
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    #[serde(default = "default_supplier_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_max_offers")]
    pub max_offers_per_date: u32,
    #[serde(default = "default_currency")]
    pub currency: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerativeConfig {
    /// Absent or blank means "no provider configured": destination
    /// recommendations come from the curated catalog.
    #[serde(default)]
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    #[serde(default = "default_generative_timeout")]
    pub timeout_secs: u64,
}

fn default_supplier_timeout() -> u64 {
    15
}

fn default_max_offers() -> u32 {
    10
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_generative_timeout() -> u64 {
    30
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // environment-specific file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. SKYSIFT__SUPPLIER__CLIENT_ID
            .add_source(config::Environment::with_prefix("SKYSIFT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
