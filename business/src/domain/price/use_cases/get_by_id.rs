use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::price::errors::PriceError;
use crate::domain::price::model::PriceDetail;

pub struct GetPriceByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetPriceByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetPriceByIdParams) -> Result<PriceDetail, PriceError>;
}
