use super::catalog_config::CatalogConfig;
use super::checkout_config::CheckoutConfig;
use super::storage_config::StorageConfig;

pub struct AppConfig {
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
    pub checkout: CheckoutConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            storage: StorageConfig::from_env(),
            catalog: CatalogConfig::from_env(),
            checkout: CheckoutConfig::from_env(),
        }
    }
}
