use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::price::errors::PriceError;
use crate::domain::price::model::Price;

pub struct CreatePriceParams {
    pub product_id: Uuid,
    pub store_id: Uuid,
    pub regular_price: BigDecimal,
    pub sale_price: Option<BigDecimal>,
    pub promotion_type: Option<String>,
    pub promotion_details: Option<String>,
    pub valid_from: DateTime<Utc>,
    pub valid_to: DateTime<Utc>,
}

#[async_trait]
pub trait CreatePriceUseCase: Send + Sync {
    async fn execute(&self, params: CreatePriceParams) -> Result<Price, PriceError>;
}
