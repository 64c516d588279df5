use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = ".storefront";

/// Where the cart slot is kept on disk
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    /// Environment variables:
    /// - STOREFRONT_DATA_DIR: slot directory (default: ".storefront")
    pub fn from_env() -> Self {
        Self::from_value(env::var("STOREFRONT_DATA_DIR").ok().as_deref())
    }

    fn from_value(data_dir: Option<&str>) -> Self {
        let data_dir = match data_dir.map(str::trim) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(DEFAULT_DATA_DIR),
        };
        Self { data_dir }
    }
}
