use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::price::errors::PriceError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for PriceError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            PriceError::InvalidRegularPrice
            | PriceError::InvalidSalePrice
            | PriceError::SaleAboveRegular
            | PriceError::AmountOutOfRange
            | PriceError::InvalidValidityPeriod
            | PriceError::FieldTooLong
            | PriceError::NegativeLookback
            | PriceError::ProductNotFound
            | PriceError::StoreNotFound => StatusCode::BAD_REQUEST,
            PriceError::NotFound => StatusCode::NOT_FOUND,
            PriceError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error_response(status, self.to_string())
    }
}
