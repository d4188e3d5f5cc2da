use std::sync::Arc;

use logger::TracingLogger;
use persistence::price::repository::PriceRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;
use persistence::store::repository::StoreRepositoryPostgres;

use business::application::price::compare::ComparePricesUseCaseImpl;
use business::application::price::create::CreatePriceUseCaseImpl;
use business::application::price::deals::GetDealsUseCaseImpl;
use business::application::price::get_by_id::GetPriceByIdUseCaseImpl;
use business::application::price::history::PriceHistoryUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::update::UpdateProductUseCaseImpl;
use business::application::store::create::CreateStoreUseCaseImpl;
use business::application::store::delete::DeleteStoreUseCaseImpl;
use business::application::store::get_all::GetAllStoresUseCaseImpl;
use business::application::store::get_by_id::GetStoreByIdUseCaseImpl;
use business::application::store::update::UpdateStoreUseCaseImpl;

use crate::api::health::routes::HealthApi;
use crate::api::price::routes::PriceApi;
use crate::api::product::routes::ProductApi;
use crate::api::store::routes::StoreApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
    pub store_api: StoreApi,
    pub price_api: PriceApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::PgPool) -> anyhow::Result<Self> {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new();

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let store_repository = Arc::new(StoreRepositoryPostgres::new(pool.clone()));
        let price_repository = Arc::new(PriceRepositoryPostgres::new(pool));

        // Product use cases
        let product_api = ProductApi::new(
            Arc::new(CreateProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllProductsUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetProductByIdUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateProductUseCaseImpl {
                repository: product_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteProductUseCaseImpl {
                repository: product_repository.clone(),
                price_repository: price_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Store use cases
        let store_api = StoreApi::new(
            Arc::new(CreateStoreUseCaseImpl {
                repository: store_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetAllStoresUseCaseImpl {
                repository: store_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetStoreByIdUseCaseImpl {
                repository: store_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpdateStoreUseCaseImpl {
                repository: store_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(DeleteStoreUseCaseImpl {
                repository: store_repository.clone(),
                price_repository: price_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Price use cases
        let price_api = PriceApi::new(
            Arc::new(ComparePricesUseCaseImpl {
                repository: price_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(PriceHistoryUseCaseImpl {
                repository: price_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetDealsUseCaseImpl {
                repository: price_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(CreatePriceUseCaseImpl {
                repository: price_repository.clone(),
                product_repository: product_repository.clone(),
                store_repository: store_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetPriceByIdUseCaseImpl {
                repository: price_repository,
                product_repository,
                store_repository,
                logger,
            }),
        );

        Ok(Self {
            health_api,
            product_api,
            store_api,
            price_api,
        })
    }
}
