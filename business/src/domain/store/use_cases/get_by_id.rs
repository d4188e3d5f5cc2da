use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::store::errors::StoreError;
use crate::domain::store::model::Store;

pub struct GetStoreByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetStoreByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetStoreByIdParams) -> Result<Store, StoreError>;
}
