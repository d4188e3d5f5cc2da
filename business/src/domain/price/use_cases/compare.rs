use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::price::errors::PriceError;
use crate::domain::price::model::PriceComparison;

pub struct ComparePricesParams {
    pub product_id: Uuid,
    /// Empty means every store.
    pub store_ids: Vec<Uuid>,
}

#[async_trait]
pub trait ComparePricesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ComparePricesParams,
    ) -> Result<Vec<PriceComparison>, PriceError>;
}
