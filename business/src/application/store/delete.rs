use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::repository::PriceRepository;
use crate::domain::store::errors::StoreError;
use crate::domain::store::repository::StoreRepository;
use crate::domain::store::use_cases::delete::{DeleteStoreParams, DeleteStoreUseCase};

pub struct DeleteStoreUseCaseImpl {
    pub repository: Arc<dyn StoreRepository>,
    pub price_repository: Arc<dyn PriceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteStoreUseCase for DeleteStoreUseCaseImpl {
    async fn execute(&self, params: DeleteStoreParams) -> Result<(), StoreError> {
        self.logger.info(&format!("Deleting store: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => StoreError::NotFound,
                other => StoreError::Repository(other),
            })?;

        if self.price_repository.exists_for_store(params.id).await? {
            self.logger.warn(&format!(
                "Refusing to delete store {} with recorded prices",
                params.id
            ));
            return Err(StoreError::HasPrices);
        }

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::InUse => StoreError::HasPrices,
                RepositoryError::NotFound => StoreError::NotFound,
                other => StoreError::Repository(other),
            })?;

        self.logger.info(&format!("Store deleted: {}", params.id));
        Ok(())
    }
}
