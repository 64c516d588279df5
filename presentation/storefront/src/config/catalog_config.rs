use std::env;
use std::path::PathBuf;

/// Optional JSON file replacing the built-in demo catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogConfig {
    pub path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self::from_value(env::var("STOREFRONT_CATALOG_PATH").ok().as_deref())
    }

    fn from_value(path: Option<&str>) -> Self {
        let path = path
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        Self { path }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_use_seeded_catalog_when_unset() {
        assert!(CatalogConfig::from_value(None).path.is_none());
        assert!(CatalogConfig::from_value(Some("")).path.is_none());
    }

    #[test]
    fn should_read_catalog_path() {
        let config = CatalogConfig::from_value(Some("catalog.json"));

        assert_eq!(config.path, Some(PathBuf::from("catalog.json")));
    }
}
