use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::price::errors::PriceError;
use crate::domain::price::model::{Deal, DealFilter};
use crate::domain::price::pricing::rank_deals;
use crate::domain::price::repository::PriceRepository;
use crate::domain::price::use_cases::deals::{GetDealsParams, GetDealsUseCase};

pub struct GetDealsUseCaseImpl {
    pub repository: Arc<dyn PriceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetDealsUseCase for GetDealsUseCaseImpl {
    async fn execute(&self, params: GetDealsParams) -> Result<Vec<Deal>, PriceError> {
        let filter = DealFilter::new(params.store_id, params.category);
        self.logger.info(&format!("Getting deals with {:?}", filter));

        let now = Utc::now();
        let rows = self.repository.find_active_discounted(&filter, now).await?;

        let deals = rank_deals(rows, &filter, now);
        self.logger.debug(&format!("Ranked {} deals", deals.len()));
        Ok(deals)
    }
}
