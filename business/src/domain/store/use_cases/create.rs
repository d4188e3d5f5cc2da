use async_trait::async_trait;

use crate::domain::store::errors::StoreError;
use crate::domain::store::model::Store;

pub struct CreateStoreParams {
    pub name: String,
    pub location: Option<String>,
    pub address: Option<String>,
}

#[async_trait]
pub trait CreateStoreUseCase: Send + Sync {
    async fn execute(&self, params: CreateStoreParams) -> Result<Store, StoreError>;
}
