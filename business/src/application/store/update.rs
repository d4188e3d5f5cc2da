use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::{NewStoreProps, Store};
use crate::domain::store::repository::StoreRepository;
use crate::domain::store::use_cases::update::{UpdateStoreParams, UpdateStoreUseCase};

pub struct UpdateStoreUseCaseImpl {
    pub repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateStoreUseCase for UpdateStoreUseCaseImpl {
    async fn execute(&self, params: UpdateStoreParams) -> Result<Store, StoreError> {
        self.logger.info(&format!("Updating store: {}", params.id));

        let props = NewStoreProps {
            name: params.name,
            location: params.location,
            address: params.address,
        };
        props.validate()?;

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(not_found)?;

        let updated_store = existing.update(props)?;
        self.repository
            .update(&updated_store)
            .await
            .map_err(not_found)?;

        self.logger
            .info(&format!("Store updated: {}", updated_store.id));
        Ok(updated_store)
    }
}

fn not_found(error: RepositoryError) -> StoreError {
    match error {
        RepositoryError::NotFound => StoreError::NotFound,
        other => StoreError::Repository(other),
    }
}
