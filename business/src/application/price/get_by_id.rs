use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::errors::PriceError;
use crate::domain::price::model::PriceDetail;
use crate::domain::price::repository::PriceRepository;
use crate::domain::price::use_cases::get_by_id::{GetPriceByIdParams, GetPriceByIdUseCase};
use crate::domain::product::repository::ProductRepository;
use crate::domain::store::repository::StoreRepository;

pub struct GetPriceByIdUseCaseImpl {
    pub repository: Arc<dyn PriceRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub store_repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPriceByIdUseCase for GetPriceByIdUseCaseImpl {
    async fn execute(&self, params: GetPriceByIdParams) -> Result<PriceDetail, PriceError> {
        self.logger.info(&format!("Getting price: {}", params.id));

        let price = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PriceError::NotFound,
                other => PriceError::Repository(other),
            })?;

        // Foreign keys guarantee both rows, so absence here is a storage fault
        let product = self
            .product_repository
            .get_by_id(price.product_id)
            .await
            .map_err(|_| PriceError::Repository(RepositoryError::DatabaseError))?;
        let store = self
            .store_repository
            .get_by_id(price.store_id)
            .await
            .map_err(|_| PriceError::Repository(RepositoryError::DatabaseError))?;

        Ok(PriceDetail {
            price,
            product,
            store,
        })
    }
}
