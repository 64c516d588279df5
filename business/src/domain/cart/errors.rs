use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_quantity")]
    InvalidQuantity,
    #[error("cart.not_ready")]
    NotReady,
    #[error("cart.modified")]
    Modified,
    #[error("cart.load_failed")]
    LoadFailed(#[source] RepositoryError),
    #[error("cart.save_failed")]
    SaveFailed(#[source] RepositoryError),
}
