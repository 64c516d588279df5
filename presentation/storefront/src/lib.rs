pub mod config {
    pub mod app_config;
    pub mod catalog_config;
    pub mod checkout_config;
    pub mod storage_config;
}
pub mod setup {
    pub mod dependency_injection;
    pub mod notifications;
}
