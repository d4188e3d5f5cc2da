#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.field_too_long")]
    FieldTooLong,
    #[error("product.not_found")]
    NotFound,
    #[error("product.has_prices")]
    HasPrices,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
