#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store.name_empty")]
    NameEmpty,
    #[error("store.field_too_long")]
    FieldTooLong,
    #[error("store.not_found")]
    NotFound,
    #[error("store.has_prices")]
    HasPrices,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
