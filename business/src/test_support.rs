//! Mocks of the repository and logger ports shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::price::model::{DealFilter, DiscountedPriceRow, Price, StorePriceRow};
use crate::domain::price::repository::PriceRepository;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::value_objects::ProductFilter;
use crate::domain::store::model::Store;
use crate::domain::store::repository::StoreRepository;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self, filter: &ProductFilter) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
        async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub StoreRepo {}

    #[async_trait]
    impl StoreRepository for StoreRepo {
        async fn get_all(&self) -> Result<Vec<Store>, RepositoryError>;
        async fn get_by_id(&self, id: Uuid) -> Result<Store, RepositoryError>;
        async fn save(&self, store: &Store) -> Result<(), RepositoryError>;
        async fn update(&self, store: &Store) -> Result<(), RepositoryError>;
        async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub PriceRepo {}

    #[async_trait]
    impl PriceRepository for PriceRepo {
        async fn get_by_id(&self, id: Uuid) -> Result<Price, RepositoryError>;
        async fn save(&self, price: &Price) -> Result<(), RepositoryError>;
        async fn find_active_for_product(
            &self,
            product_id: Uuid,
            store_ids: &[Uuid],
            at: DateTime<Utc>,
        ) -> Result<Vec<StorePriceRow>, RepositoryError>;
        async fn find_captured_since(
            &self,
            product_id: Uuid,
            store_id: Uuid,
            since: DateTime<Utc>,
        ) -> Result<Vec<Price>, RepositoryError>;
        async fn find_active_discounted(
            &self,
            filter: &DealFilter,
            at: DateTime<Utc>,
        ) -> Result<Vec<DiscountedPriceRow>, RepositoryError>;
        async fn exists_for_product(&self, product_id: Uuid) -> Result<bool, RepositoryError>;
        async fn exists_for_store(&self, store_id: Uuid) -> Result<bool, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn sample_product(id: Uuid, name: &str, category: Option<&str>) -> Product {
    let now = Utc::now();
    Product::from_repository(
        id,
        name.to_string(),
        None,
        category.map(str::to_string),
        None,
        None,
        None,
        now,
        now,
    )
}

pub fn sample_store(id: Uuid, name: &str) -> Store {
    let now = Utc::now();
    Store::from_repository(id, name.to_string(), None, None, now, now)
}
