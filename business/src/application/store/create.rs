use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::store::errors::StoreError;
use crate::domain::store::model::{NewStoreProps, Store};
use crate::domain::store::repository::StoreRepository;
use crate::domain::store::use_cases::create::{CreateStoreParams, CreateStoreUseCase};

pub struct CreateStoreUseCaseImpl {
    pub repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateStoreUseCase for CreateStoreUseCaseImpl {
    async fn execute(&self, params: CreateStoreParams) -> Result<Store, StoreError> {
        self.logger.info(&format!("Creating store: {}", params.name));

        let store = Store::new(NewStoreProps {
            name: params.name,
            location: params.location,
            address: params.address,
        })?;

        self.repository.save(&store).await?;

        self.logger.info(&format!("Store created: {}", store.id));
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockStoreRepo, mock_logger};

    fn params(name: &str) -> CreateStoreParams {
        CreateStoreParams {
            name: name.to_string(),
            location: Some("Denver".to_string()),
            address: None,
        }
    }

    #[tokio::test]
    async fn should_create_store_when_params_valid() {
        let mut mock_repo = MockStoreRepo::new();
        mock_repo
            .expect_save()
            .withf(|store| store.name == "Sprouts")
            .times(1)
            .returning(|_| Ok(()));

        let use_case = CreateStoreUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let store = use_case.execute(params("Sprouts")).await.unwrap();

        assert_eq!(store.name, "Sprouts");
        assert_eq!(store.location.as_deref(), Some("Denver"));
    }

    #[tokio::test]
    async fn should_return_error_when_name_empty() {
        let mut mock_repo = MockStoreRepo::new();
        mock_repo.expect_save().never();

        let use_case = CreateStoreUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("")).await;

        assert!(matches!(result.unwrap_err(), StoreError::NameEmpty));
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockStoreRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = CreateStoreUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Walmart")).await;

        assert!(matches!(result.unwrap_err(), StoreError::Repository(_)));
    }
}
