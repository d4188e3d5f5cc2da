#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error("price.invalid_regular_price")]
    InvalidRegularPrice,
    #[error("price.invalid_sale_price")]
    InvalidSalePrice,
    #[error("price.sale_above_regular")]
    SaleAboveRegular,
    #[error("price.amount_out_of_range")]
    AmountOutOfRange,
    #[error("price.invalid_validity_period")]
    InvalidValidityPeriod,
    #[error("price.field_too_long")]
    FieldTooLong,
    #[error("price.negative_lookback")]
    NegativeLookback,
    #[error("price.product_not_found")]
    ProductNotFound,
    #[error("price.store_not_found")]
    StoreNotFound,
    #[error("price.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
