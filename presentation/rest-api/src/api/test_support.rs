//! Use case mocks for route tests.

use async_trait::async_trait;
use mockall::mock;
use poem::{Route, test::TestClient};
use poem_openapi::{OpenApi, OpenApiService};

use business::domain::price::errors::PriceError;
use business::domain::price::model::{Deal, Price, PriceComparison, PriceDetail, PricePoint};
use business::domain::price::use_cases::compare::{ComparePricesParams, ComparePricesUseCase};
use business::domain::price::use_cases::create::{CreatePriceParams, CreatePriceUseCase};
use business::domain::price::use_cases::deals::{GetDealsParams, GetDealsUseCase};
use business::domain::price::use_cases::get_by_id::{GetPriceByIdParams, GetPriceByIdUseCase};
use business::domain::price::use_cases::history::{PriceHistoryParams, PriceHistoryUseCase};
use business::domain::product::errors::ProductError;
use business::domain::product::model::Product;
use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

/// Serves `api` under `/api` the way the real server does.
pub fn client(api: impl OpenApi + 'static) -> TestClient<Route> {
    let service = OpenApiService::new(api, "test", "1.0");
    TestClient::new(Route::new().nest("/api", service))
}

mock! {
    pub ComparePrices {}
    #[async_trait]
    impl ComparePricesUseCase for ComparePrices {
        async fn execute(&self, params: ComparePricesParams) -> Result<Vec<PriceComparison>, PriceError>;
    }
}

mock! {
    pub PriceHistory {}
    #[async_trait]
    impl PriceHistoryUseCase for PriceHistory {
        async fn execute(&self, params: PriceHistoryParams) -> Result<Vec<PricePoint>, PriceError>;
    }
}

mock! {
    pub GetDeals {}
    #[async_trait]
    impl GetDealsUseCase for GetDeals {
        async fn execute(&self, params: GetDealsParams) -> Result<Vec<Deal>, PriceError>;
    }
}

mock! {
    pub CreatePrice {}
    #[async_trait]
    impl CreatePriceUseCase for CreatePrice {
        async fn execute(&self, params: CreatePriceParams) -> Result<Price, PriceError>;
    }
}

mock! {
    pub GetPriceById {}
    #[async_trait]
    impl GetPriceByIdUseCase for GetPriceById {
        async fn execute(&self, params: GetPriceByIdParams) -> Result<PriceDetail, PriceError>;
    }
}

mock! {
    pub CreateProduct {}
    #[async_trait]
    impl CreateProductUseCase for CreateProduct {
        async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub GetAllProducts {}
    #[async_trait]
    impl GetAllProductsUseCase for GetAllProducts {
        async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError>;
    }
}

mock! {
    pub GetProductById {}
    #[async_trait]
    impl GetProductByIdUseCase for GetProductById {
        async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub UpdateProduct {}
    #[async_trait]
    impl UpdateProductUseCase for UpdateProduct {
        async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError>;
    }
}

mock! {
    pub DeleteProduct {}
    #[async_trait]
    impl DeleteProductUseCase for DeleteProduct {
        async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
    }
}
