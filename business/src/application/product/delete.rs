use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::repository::PriceRepository;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub price_repository: Arc<dyn PriceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        // Verify product exists before deleting
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        // Price history is kept, so referenced products stay
        if self.price_repository.exists_for_product(params.id).await? {
            self.logger.warn(&format!(
                "Refusing to delete product {} with recorded prices",
                params.id
            ));
            return Err(ProductError::HasPrices);
        }

        self.repository
            .delete(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::InUse => ProductError::HasPrices,
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        self.logger.info(&format!("Product deleted: {}", params.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockPriceRepo, MockProductRepo, mock_logger, sample_product};
    use uuid::Uuid;

    fn existing_product_repo(product_id: Uuid) -> MockProductRepo {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(sample_product(product_id, "Day-old Bagels", None)));
        mock_repo
    }

    #[tokio::test]
    async fn should_delete_product_when_no_prices_reference_it() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = existing_product_repo(product_id);
        mock_repo.expect_delete().times(1).returning(|_| Ok(()));
        let mut price_repo = MockPriceRepo::new();
        price_repo
            .expect_exists_for_product()
            .returning(|_| Ok(false));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            price_repository: Arc::new(price_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams { id: product_id })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_refuse_delete_when_prices_exist() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = existing_product_repo(product_id);
        mock_repo.expect_delete().never();
        let mut price_repo = MockPriceRepo::new();
        price_repo.expect_exists_for_product().returning(|_| Ok(true));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            price_repository: Arc::new(price_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams { id: product_id })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::HasPrices));
    }

    #[tokio::test]
    async fn should_map_foreign_key_violation_to_has_prices() {
        let product_id = Uuid::new_v4();
        let mut mock_repo = existing_product_repo(product_id);
        mock_repo
            .expect_delete()
            .returning(|_| Err(RepositoryError::InUse));
        let mut price_repo = MockPriceRepo::new();
        price_repo
            .expect_exists_for_product()
            .returning(|_| Ok(false));

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            price_repository: Arc::new(price_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams { id: product_id })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::HasPrices));
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let price_repo = MockPriceRepo::new();

        let use_case = DeleteProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            price_repository: Arc::new(price_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteProductParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
