use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::price::errors::PriceError;
use crate::domain::price::model::PricePoint;
use crate::domain::price::pricing::{history_window_start, price_history};
use crate::domain::price::repository::PriceRepository;
use crate::domain::price::use_cases::history::{PriceHistoryParams, PriceHistoryUseCase};

pub struct PriceHistoryUseCaseImpl {
    pub repository: Arc<dyn PriceRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PriceHistoryUseCase for PriceHistoryUseCaseImpl {
    async fn execute(&self, params: PriceHistoryParams) -> Result<Vec<PricePoint>, PriceError> {
        self.logger.info(&format!(
            "Getting {} day price history for product {} at store {}",
            params.days, params.product_id, params.store_id
        ));

        let since = history_window_start(Utc::now(), params.days)?;
        let prices = self
            .repository
            .find_captured_since(params.product_id, params.store_id, since)
            .await?;

        Ok(price_history(prices, since))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price::model::Price;
    use crate::domain::shared::value_objects::ValidityPeriod;
    use crate::test_support::{MockPriceRepo, mock_logger};
    use bigdecimal::BigDecimal;
    use chrono::{DateTime, Duration};
    use uuid::Uuid;

    fn observation(regular: i64, scraped_at: DateTime<Utc>) -> Price {
        Price::from_repository(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Uuid::new_v4(),
            BigDecimal::from(regular),
            None,
            None,
            None,
            ValidityPeriod::from_repository(scraped_at, scraped_at + Duration::days(7)),
            scraped_at,
            scraped_at,
        )
    }

    fn params(days: i64) -> PriceHistoryParams {
        PriceHistoryParams {
            product_id: Uuid::new_v4(),
            store_id: Uuid::new_v4(),
            days,
        }
    }

    #[tokio::test]
    async fn should_return_history_oldest_first() {
        let now = Utc::now();
        let mut mock_repo = MockPriceRepo::new();
        mock_repo
            .expect_find_captured_since()
            .returning(move |_, _, _| {
                Ok(vec![
                    observation(3, now - Duration::days(1)),
                    observation(2, now - Duration::days(5)),
                ])
            });

        let use_case = PriceHistoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let history = use_case.execute(params(30)).await.unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history[0].regular_price, BigDecimal::from(2));
        assert!(history[0].date < history[1].date);
    }

    #[tokio::test]
    async fn should_query_from_window_start() {
        let mut mock_repo = MockPriceRepo::new();
        mock_repo
            .expect_find_captured_since()
            .withf(|_, _, since| {
                let expected = Utc::now() - Duration::days(7);
                (*since - expected).num_seconds().abs() < 60
            })
            .times(1)
            .returning(|_, _, _| Ok(vec![]));

        let use_case = PriceHistoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        assert!(use_case.execute(params(7)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_negative_lookback_before_querying() {
        let mut mock_repo = MockPriceRepo::new();
        mock_repo.expect_find_captured_since().never();

        let use_case = PriceHistoryUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(-1)).await;

        assert!(matches!(result.unwrap_err(), PriceError::NegativeLookback));
    }
}
