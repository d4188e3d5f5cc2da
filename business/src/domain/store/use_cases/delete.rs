use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::store::errors::StoreError;

pub struct DeleteStoreParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteStoreUseCase: Send + Sync {
    async fn execute(&self, params: DeleteStoreParams) -> Result<(), StoreError>;
}
