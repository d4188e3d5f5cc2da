use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Store;

#[async_trait]
pub trait StoreRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Store>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Store, RepositoryError>;
    async fn save(&self, store: &Store) -> Result<(), RepositoryError>;
    /// Overwrites an existing store; `NotFound` when no row has its id.
    async fn update(&self, store: &Store) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
