use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{DealFilter, DiscountedPriceRow, Price, StorePriceRow};

#[async_trait]
pub trait PriceRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Price, RepositoryError>;
    async fn save(&self, price: &Price) -> Result<(), RepositoryError>;
    /// Prices of a product active at `at`, joined with the store name.
    /// An empty `store_ids` slice means every store.
    async fn find_active_for_product(
        &self,
        product_id: Uuid,
        store_ids: &[Uuid],
        at: DateTime<Utc>,
    ) -> Result<Vec<StorePriceRow>, RepositoryError>;
    /// Observations of a product at a store captured at or after `since`, oldest first.
    async fn find_captured_since(
        &self,
        product_id: Uuid,
        store_id: Uuid,
        since: DateTime<Utc>,
    ) -> Result<Vec<Price>, RepositoryError>;
    /// Prices with a sale price active at `at`, joined with product and store.
    async fn find_active_discounted(
        &self,
        filter: &DealFilter,
        at: DateTime<Utc>,
    ) -> Result<Vec<DiscountedPriceRow>, RepositoryError>;
    async fn exists_for_product(&self, product_id: Uuid) -> Result<bool, RepositoryError>;
    async fn exists_for_store(&self, store_id: Uuid) -> Result<bool, RepositoryError>;
}
