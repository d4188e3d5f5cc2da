use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::price::model::{Deal, Price, PriceComparison, PriceDetail, PricePoint};

use crate::api::amount::to_json_number;
use crate::api::product::dto::ProductResponse;
use crate::api::store::dto::StoreResponse;

/// A price observation to record.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct CreatePriceRequest {
    pub product_id: String,
    pub store_id: String,
    /// Shelf price; must be greater than zero
    pub regular_price: f64,
    /// Promotional price; between zero and the regular price
    #[oai(skip_serializing_if_is_none)]
    pub sale_price: Option<f64>,
    /// e.g. "Weekly Ad", "Digital Coupon"
    #[oai(skip_serializing_if_is_none)]
    pub promotion_type: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub promotion_details: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PriceResponse {
    pub id: String,
    pub product_id: String,
    pub store_id: String,
    pub regular_price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub sale_price: Option<f64>,
    /// Sale price when present, otherwise the regular price
    pub current_price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub promotion_type: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub promotion_details: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
    /// When the price was observed
    pub scraped_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    #[oai(skip_serializing_if_is_none)]
    pub product: Option<ProductResponse>,
    #[oai(skip_serializing_if_is_none)]
    pub store: Option<StoreResponse>,
}

impl From<Price> for PriceResponse {
    fn from(price: Price) -> Self {
        Self {
            id: price.id.to_string(),
            product_id: price.product_id.to_string(),
            store_id: price.store_id.to_string(),
            regular_price: to_json_number(&price.regular_price),
            sale_price: price.sale_price.as_ref().map(to_json_number),
            current_price: to_json_number(&price.current_price()),
            promotion_type: price.promotion_type,
            promotion_details: price.promotion_details,
            valid_from: price.validity.from(),
            valid_to: price.validity.to(),
            scraped_at: price.scraped_at,
            created_at: price.created_at,
            product: None,
            store: None,
        }
    }
}

impl From<PriceDetail> for PriceResponse {
    fn from(detail: PriceDetail) -> Self {
        Self {
            product: Some(detail.product.into()),
            store: Some(detail.store.into()),
            ..PriceResponse::from(detail.price)
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PriceComparisonResponse {
    pub store_id: String,
    pub store_name: String,
    pub regular_price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub sale_price: Option<f64>,
    pub current_price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub promotion_type: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub promotion_details: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
}

impl From<PriceComparison> for PriceComparisonResponse {
    fn from(comparison: PriceComparison) -> Self {
        Self {
            store_id: comparison.store_id.to_string(),
            store_name: comparison.store_name,
            regular_price: to_json_number(&comparison.regular_price),
            sale_price: comparison.sale_price.as_ref().map(to_json_number),
            current_price: to_json_number(&comparison.current_price),
            promotion_type: comparison.promotion_type,
            promotion_details: comparison.promotion_details,
            valid_from: comparison.valid_from,
            valid_to: comparison.valid_to,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PricePointResponse {
    /// Capture time of the observation
    pub date: DateTime<Utc>,
    pub regular_price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub sale_price: Option<f64>,
    pub current_price: f64,
    #[oai(skip_serializing_if_is_none)]
    pub promotion_type: Option<String>,
}

impl From<PricePoint> for PricePointResponse {
    fn from(point: PricePoint) -> Self {
        Self {
            date: point.date,
            regular_price: to_json_number(&point.regular_price),
            sale_price: point.sale_price.as_ref().map(to_json_number),
            current_price: to_json_number(&point.current_price),
            promotion_type: point.promotion_type,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct DealResponse {
    pub product_id: String,
    pub product_name: String,
    #[oai(skip_serializing_if_is_none)]
    pub brand: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    pub store_id: String,
    pub store_name: String,
    pub regular_price: f64,
    pub sale_price: f64,
    /// Whole-number percentage off the regular price
    pub discount: i64,
    #[oai(skip_serializing_if_is_none)]
    pub promotion_type: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub promotion_details: Option<String>,
    pub valid_until: DateTime<Utc>,
}

impl From<Deal> for DealResponse {
    fn from(deal: Deal) -> Self {
        Self {
            product_id: deal.product_id.to_string(),
            product_name: deal.product_name,
            brand: deal.brand,
            category: deal.category,
            store_id: deal.store_id.to_string(),
            store_name: deal.store_name,
            regular_price: to_json_number(&deal.regular_price),
            sale_price: to_json_number(&deal.sale_price),
            discount: deal.discount,
            promotion_type: deal.promotion_type,
            promotion_details: deal.promotion_details,
            valid_until: deal.valid_until,
        }
    }
}
