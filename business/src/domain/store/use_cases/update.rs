use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::store::errors::StoreError;
use crate::domain::store::model::Store;

pub struct UpdateStoreParams {
    pub id: Uuid,
    pub name: String,
    pub location: Option<String>,
    pub address: Option<String>,
}

#[async_trait]
pub trait UpdateStoreUseCase: Send + Sync {
    async fn execute(&self, params: UpdateStoreParams) -> Result<Store, StoreError>;
}
