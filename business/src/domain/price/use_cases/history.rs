use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::price::errors::PriceError;
use crate::domain::price::model::PricePoint;

pub struct PriceHistoryParams {
    pub product_id: Uuid,
    pub store_id: Uuid,
    /// Lookback window in days; must not be negative.
    pub days: i64,
}

#[async_trait]
pub trait PriceHistoryUseCase: Send + Sync {
    async fn execute(&self, params: PriceHistoryParams) -> Result<Vec<PricePoint>, PriceError>;
}
