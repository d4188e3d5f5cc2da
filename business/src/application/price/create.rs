use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::errors::PriceError;
use crate::domain::price::model::{NewPriceProps, Price};
use crate::domain::price::repository::PriceRepository;
use crate::domain::price::use_cases::create::{CreatePriceParams, CreatePriceUseCase};
use crate::domain::product::repository::ProductRepository;
use crate::domain::store::repository::StoreRepository;

pub struct CreatePriceUseCaseImpl {
    pub repository: Arc<dyn PriceRepository>,
    pub product_repository: Arc<dyn ProductRepository>,
    pub store_repository: Arc<dyn StoreRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreatePriceUseCase for CreatePriceUseCaseImpl {
    async fn execute(&self, params: CreatePriceParams) -> Result<Price, PriceError> {
        self.logger.info(&format!(
            "Recording price for product {} at store {}",
            params.product_id, params.store_id
        ));

        let price = Price::new(NewPriceProps {
            product_id: params.product_id,
            store_id: params.store_id,
            regular_price: params.regular_price,
            sale_price: params.sale_price,
            promotion_type: params.promotion_type,
            promotion_details: params.promotion_details,
            valid_from: params.valid_from,
            valid_to: params.valid_to,
        })?;

        self.product_repository
            .get_by_id(price.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PriceError::ProductNotFound,
                other => PriceError::Repository(other),
            })?;
        self.store_repository
            .get_by_id(price.store_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PriceError::StoreNotFound,
                other => PriceError::Repository(other),
            })?;

        self.repository.save(&price).await?;

        self.logger.info(&format!("Price recorded: {}", price.id));
        Ok(price)
    }
}
