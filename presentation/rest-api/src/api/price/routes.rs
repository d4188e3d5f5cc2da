use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::price::pricing::DEFAULT_HISTORY_DAYS;
use business::domain::price::use_cases::compare::{ComparePricesParams, ComparePricesUseCase};
use business::domain::price::use_cases::create::{CreatePriceParams, CreatePriceUseCase};
use business::domain::price::use_cases::deals::{GetDealsParams, GetDealsUseCase};
use business::domain::price::use_cases::get_by_id::{GetPriceByIdParams, GetPriceByIdUseCase};
use business::domain::price::use_cases::history::{PriceHistoryParams, PriceHistoryUseCase};

use crate::api::amount::from_json_number;
use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id, validation_error};
use crate::api::price::dto::{
    CreatePriceRequest, DealResponse, PriceComparisonResponse, PricePointResponse, PriceResponse,
};
use crate::api::tags::ApiTags;

/// Parses a required identifier from the query string.
fn required_id(
    raw: Option<String>,
    missing: &str,
    invalid: &str,
) -> Result<Uuid, Json<ErrorResponse>> {
    let raw = raw
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| validation_error(missing))?;
    parse_id(&raw, invalid)
}

/// Comma separated store ids; blank entries are ignored.
fn store_id_list(raw: Option<String>) -> Result<Vec<Uuid>, Json<ErrorResponse>> {
    raw.as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(|value| parse_id(value, "price.invalid_store_id"))
        .collect()
}

pub struct PriceApi {
    compare_use_case: Arc<dyn ComparePricesUseCase>,
    history_use_case: Arc<dyn PriceHistoryUseCase>,
    deals_use_case: Arc<dyn GetDealsUseCase>,
    create_use_case: Arc<dyn CreatePriceUseCase>,
    get_by_id_use_case: Arc<dyn GetPriceByIdUseCase>,
}

impl PriceApi {
    pub fn new(
        compare_use_case: Arc<dyn ComparePricesUseCase>,
        history_use_case: Arc<dyn PriceHistoryUseCase>,
        deals_use_case: Arc<dyn GetDealsUseCase>,
        create_use_case: Arc<dyn CreatePriceUseCase>,
        get_by_id_use_case: Arc<dyn GetPriceByIdUseCase>,
    ) -> Self {
        Self {
            compare_use_case,
            history_use_case,
            deals_use_case,
            create_use_case,
            get_by_id_use_case,
        }
    }
}

/// Price API
///
/// Store-by-store comparison, price history and current deals.
#[OpenApi]
impl PriceApi {
    /// Compare current prices of a product across stores
    ///
    /// Returns the prices active right now, cheapest first. An empty result
    /// means no store currently advertises the product.
    #[oai(path = "/prices/compare", method = "get", tag = "ApiTags::Prices")]
    async fn compare_prices(
        &self,
        /// Product to compare
        #[oai(name = "productId")]
        product_id: Query<Option<String>>,
        /// Comma separated store ids; all stores when absent
        #[oai(name = "storeIds")]
        store_ids: Query<Option<String>>,
    ) -> ComparePricesResponse {
        let product_id = match required_id(
            product_id.0,
            "price.product_id_required",
            "price.invalid_product_id",
        ) {
            Ok(id) => id,
            Err(json) => return ComparePricesResponse::BadRequest(json),
        };
        let store_ids = match store_id_list(store_ids.0) {
            Ok(ids) => ids,
            Err(json) => return ComparePricesResponse::BadRequest(json),
        };

        match self
            .compare_use_case
            .execute(ComparePricesParams {
                product_id,
                store_ids,
            })
            .await
        {
            Ok(comparisons) => ComparePricesResponse::Ok(Json(
                comparisons
                    .into_iter()
                    .map(PriceComparisonResponse::from)
                    .collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ComparePricesResponse::BadRequest(json),
                    _ => ComparePricesResponse::InternalError(json),
                }
            }
        }
    }

    /// Price history of a product at one store
    ///
    /// Observations captured during the last `days` days (30 by default),
    /// oldest first.
    #[oai(path = "/prices/history", method = "get", tag = "ApiTags::Prices")]
    async fn price_history(
        &self,
        #[oai(name = "productId")] product_id: Query<Option<String>>,
        #[oai(name = "storeId")] store_id: Query<Option<String>>,
        /// Lookback window in days, zero or more
        days: Query<Option<i64>>,
    ) -> PriceHistoryResponse {
        let product_id = match required_id(
            product_id.0,
            "price.product_id_required",
            "price.invalid_product_id",
        ) {
            Ok(id) => id,
            Err(json) => return PriceHistoryResponse::BadRequest(json),
        };
        let store_id = match required_id(
            store_id.0,
            "price.store_id_required",
            "price.invalid_store_id",
        ) {
            Ok(id) => id,
            Err(json) => return PriceHistoryResponse::BadRequest(json),
        };

        let params = PriceHistoryParams {
            product_id,
            store_id,
            days: days.0.unwrap_or(DEFAULT_HISTORY_DAYS),
        };

        match self.history_use_case.execute(params).await {
            Ok(points) => PriceHistoryResponse::Ok(Json(
                points.into_iter().map(PricePointResponse::from).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PriceHistoryResponse::BadRequest(json),
                    _ => PriceHistoryResponse::InternalError(json),
                }
            }
        }
    }

    /// Best current deals
    ///
    /// Active sale prices ranked by percentage off, at most 50.
    #[oai(path = "/prices/deals", method = "get", tag = "ApiTags::Prices")]
    async fn get_deals(
        &self,
        /// Restrict to one store
        #[oai(name = "storeId")]
        store_id: Query<Option<String>>,
        /// Exact product category
        category: Query<Option<String>>,
    ) -> GetDealsResponse {
        let store_id = match store_id.0.filter(|raw| !raw.trim().is_empty()) {
            Some(raw) => match parse_id(&raw, "price.invalid_store_id") {
                Ok(id) => Some(id),
                Err(json) => return GetDealsResponse::BadRequest(json),
            },
            None => None,
        };

        match self
            .deals_use_case
            .execute(GetDealsParams {
                store_id,
                category: category.0,
            })
            .await
        {
            Ok(deals) => {
                GetDealsResponse::Ok(Json(deals.into_iter().map(DealResponse::from).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetDealsResponse::InternalError(json)
            }
        }
    }

    /// Record a price observation
    #[oai(path = "/prices", method = "post", tag = "ApiTags::Prices")]
    async fn create_price(&self, body: Json<CreatePriceRequest>) -> CreatePriceResponse {
        let body = body.0;
        let product_id = match parse_id(&body.product_id, "price.invalid_product_id") {
            Ok(id) => id,
            Err(json) => return CreatePriceResponse::BadRequest(json),
        };
        let store_id = match parse_id(&body.store_id, "price.invalid_store_id") {
            Ok(id) => id,
            Err(json) => return CreatePriceResponse::BadRequest(json),
        };
        let Some(regular_price) = from_json_number(body.regular_price) else {
            return CreatePriceResponse::BadRequest(validation_error("price.invalid_amount"));
        };
        let sale_price = match body.sale_price.map(from_json_number) {
            Some(None) => {
                return CreatePriceResponse::BadRequest(validation_error("price.invalid_amount"));
            }
            Some(amount) => amount,
            None => None,
        };

        let params = CreatePriceParams {
            product_id,
            store_id,
            regular_price,
            sale_price,
            promotion_type: body.promotion_type,
            promotion_details: body.promotion_details,
            valid_from: body.valid_from,
            valid_to: body.valid_to,
        };

        match self.create_use_case.execute(params).await {
            Ok(price) => CreatePriceResponse::Created(Json(price.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreatePriceResponse::BadRequest(json),
                    _ => CreatePriceResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a price with its product and store
    #[oai(path = "/prices/:id", method = "get", tag = "ApiTags::Prices")]
    async fn get_price_by_id(&self, id: Path<String>) -> GetPriceByIdResponse {
        let id = match parse_id(&id.0, "price.invalid_id") {
            Ok(id) => id,
            Err(json) => return GetPriceByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetPriceByIdParams { id })
            .await
        {
            Ok(detail) => GetPriceByIdResponse::Ok(Json(detail.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetPriceByIdResponse::NotFound(json),
                    _ => GetPriceByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ComparePricesResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<PriceComparisonResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum PriceHistoryResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<PricePointResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetDealsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<DealResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreatePriceResponse {
    #[oai(status = 201)]
    Created(Json<PriceResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPriceByIdResponse {
    #[oai(status = 200)]
    Ok(Json<PriceResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
