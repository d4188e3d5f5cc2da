use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::price::errors::PriceError;
use crate::domain::price::model::Deal;

pub struct GetDealsParams {
    pub store_id: Option<Uuid>,
    pub category: Option<String>,
}

#[async_trait]
pub trait GetDealsUseCase: Send + Sync {
    async fn execute(&self, params: GetDealsParams) -> Result<Vec<Deal>, PriceError>;
}
