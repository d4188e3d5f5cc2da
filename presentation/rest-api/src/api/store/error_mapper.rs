use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::store::errors::StoreError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for StoreError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            StoreError::NameEmpty | StoreError::FieldTooLong => StatusCode::BAD_REQUEST,
            StoreError::NotFound => StatusCode::NOT_FOUND,
            StoreError::HasPrices => StatusCode::CONFLICT,
            StoreError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error_response(status, self.to_string())
    }
}
