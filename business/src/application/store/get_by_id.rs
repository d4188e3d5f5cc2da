use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::Store;
use crate::domain::store::repository::StoreRepository;
use crate::domain::store::use_cases::get_by_id::{GetStoreByIdParams, GetStoreByIdUseCase};

pub struct GetStoreByIdUseCaseImpl {
    pub repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetStoreByIdUseCase for GetStoreByIdUseCaseImpl {
    async fn execute(&self, params: GetStoreByIdParams) -> Result<Store, StoreError> {
        self.logger.info(&format!("Getting store: {}", params.id));

        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => StoreError::NotFound,
                other => StoreError::Repository(other),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockStoreRepo, mock_logger, sample_store};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_store_when_found() {
        let store_id = Uuid::new_v4();
        let mut mock_repo = MockStoreRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == store_id)
            .returning(move |id| Ok(sample_store(id, "Target")));

        let use_case = GetStoreByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let store = use_case
            .execute(GetStoreByIdParams { id: store_id })
            .await
            .unwrap();

        assert_eq!(store.id, store_id);
    }

    #[tokio::test]
    async fn should_return_not_found_when_missing() {
        let mut mock_repo = MockStoreRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetStoreByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetStoreByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), StoreError::NotFound));
    }
}
