use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::price::errors::PriceError;
use crate::domain::price::model::PriceComparison;
use crate::domain::price::pricing::compare_prices;
use crate::domain::price::repository::PriceRepository;
use crate::domain::price::use_cases::compare::{ComparePricesParams, ComparePricesUseCase};

pub struct ComparePricesUseCaseImpl {
    pub repository: Arc<dyn PriceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ComparePricesUseCase for ComparePricesUseCaseImpl {
    async fn execute(
        &self,
        params: ComparePricesParams,
    ) -> Result<Vec<PriceComparison>, PriceError> {
        self.logger.info(&format!(
            "Comparing prices for product {} across {} stores",
            params.product_id,
            if params.store_ids.is_empty() {
                "all".to_string()
            } else {
                params.store_ids.len().to_string()
            }
        ));

        let now = Utc::now();
        let rows = self
            .repository
            .find_active_for_product(params.product_id, &params.store_ids, now)
            .await?;

        let comparisons = compare_prices(rows, &params.store_ids, now);
        self.logger
            .debug(&format!("Found {} active prices", comparisons.len()));
        Ok(comparisons)
    }
}
