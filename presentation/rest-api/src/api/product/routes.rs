use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};
use business::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};
use business::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use business::domain::product::value_objects::ProductFilter;

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::product::dto::{ProductRequest, ProductResponse};
use crate::api::tags::ApiTags;

const INVALID_ID: &str = "product.invalid_id";

pub struct ProductApi {
    create_use_case: Arc<dyn CreateProductUseCase>,
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    update_use_case: Arc<dyn UpdateProductUseCase>,
    delete_use_case: Arc<dyn DeleteProductUseCase>,
}

impl ProductApi {
    pub fn new(
        create_use_case: Arc<dyn CreateProductUseCase>,
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        update_use_case: Arc<dyn UpdateProductUseCase>,
        delete_use_case: Arc<dyn DeleteProductUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Product catalogue API
///
/// Endpoints for creating, reading, updating, and deleting grocery products.
#[OpenApi]
impl ProductApi {
    /// Create a new product
    #[oai(path = "/products", method = "post", tag = "ApiTags::Products")]
    async fn create_product(&self, body: Json<ProductRequest>) -> CreateProductResponse {
        let params = CreateProductParams {
            name: body.0.name,
            brand: body.0.brand,
            category: body.0.category,
            unit: body.0.unit,
            size: body.0.size,
            barcode: body.0.barcode,
        };

        match self.create_use_case.execute(params).await {
            Ok(product) => CreateProductResponse::Created(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateProductResponse::BadRequest(json),
                    _ => CreateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// List products
    ///
    /// Optionally filtered by exact category and by a case-insensitive search
    /// over name and brand.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(
        &self,
        /// Exact category to match
        category: Query<Option<String>>,
        /// Text contained in the product name or brand
        search: Query<Option<String>>,
    ) -> GetAllProductsResponse {
        let params = GetAllProductsParams {
            filter: ProductFilter::new(category.0, search.0),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(products) => {
                let responses: Vec<ProductResponse> =
                    products.into_iter().map(|p| p.into()).collect();
                GetAllProductsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllProductsResponse::InternalError(json)
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:id", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(&self, id: Path<String>) -> GetProductByIdResponse {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return GetProductByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetProductByIdParams { id })
            .await
        {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a product
    ///
    /// Replaces the product attributes, keeping its identity and creation time.
    #[oai(path = "/products/:id", method = "put", tag = "ApiTags::Products")]
    async fn update_product(
        &self,
        id: Path<String>,
        body: Json<ProductRequest>,
    ) -> UpdateProductResponse {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return UpdateProductResponse::BadRequest(json),
        };

        let params = UpdateProductParams {
            id,
            name: body.0.name,
            brand: body.0.brand,
            category: body.0.category,
            unit: body.0.unit,
            size: body.0.size,
            barcode: body.0.barcode,
        };

        match self.update_use_case.execute(params).await {
            Ok(product) => UpdateProductResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateProductResponse::BadRequest(json),
                    404 => UpdateProductResponse::NotFound(json),
                    _ => UpdateProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a product
    ///
    /// Rejected with 409 while any price references the product.
    #[oai(path = "/products/:id", method = "delete", tag = "ApiTags::Products")]
    async fn delete_product(&self, id: Path<String>) -> DeleteProductResponse {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return DeleteProductResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteProductParams { id })
            .await
        {
            Ok(()) => DeleteProductResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteProductResponse::NotFound(json),
                    409 => DeleteProductResponse::Conflict(json),
                    _ => DeleteProductResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateProductResponse {
    #[oai(status = 201)]
    Created(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ProductResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateProductResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteProductResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_support::{
        MockCreateProduct, MockDeleteProduct, MockGetAllProducts, MockGetProductById,
        MockUpdateProduct, client,
    };
    use business::domain::product::errors::ProductError;
    use business::domain::product::model::Product;
    use chrono::Utc;
    use poem::http::StatusCode;
    use uuid::Uuid;

    fn api_with(
        get_all: MockGetAllProducts,
        get_by_id: MockGetProductById,
        delete: MockDeleteProduct,
    ) -> ProductApi {
        ProductApi::new(
            Arc::new(MockCreateProduct::new()),
            Arc::new(get_all),
            Arc::new(get_by_id),
            Arc::new(MockUpdateProduct::new()),
            Arc::new(delete),
        )
    }

    #[tokio::test]
    async fn should_pass_trimmed_filters_to_list() {
        let mut get_all = MockGetAllProducts::new();
        get_all
            .expect_execute()
            .withf(|params| {
                params.filter.category.as_deref() == Some("Dairy")
                    && params.filter.search.as_deref() == Some("milk")
            })
            .times(1)
            .returning(|_| {
                let now = Utc::now();
                Ok(vec![Product::from_repository(
                    Uuid::new_v4(),
                    "Whole Milk".to_string(),
                    Some("Horizon".to_string()),
                    Some("Dairy".to_string()),
                    None,
                    None,
                    None,
                    now,
                    now,
                )])
            });
        let cli = client(api_with(
            get_all,
            MockGetProductById::new(),
            MockDeleteProduct::new(),
        ));

        let resp = cli
            .get("/api/products")
            .query("category", &" Dairy ")
            .query("search", &"milk")
            .send()
            .await;

        resp.assert_status_is_ok();
        let json = resp.json().await;
        let product = json.value().array().get(0).object();
        product.get("name").assert_string("Whole Milk");
        product.get("brand").assert_string("Horizon");
    }

    #[tokio::test]
    async fn should_reject_malformed_product_id() {
        let mut get_by_id = MockGetProductById::new();
        get_by_id.expect_execute().never();
        let cli = client(api_with(
            MockGetAllProducts::new(),
            get_by_id,
            MockDeleteProduct::new(),
        ));

        let resp = cli.get("/api/products/123").send().await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        let json = resp.json().await;
        json.value()
            .object()
            .get("message")
            .assert_string("product.invalid_id");
    }

    #[tokio::test]
    async fn should_answer_conflict_when_product_has_prices() {
        let mut delete = MockDeleteProduct::new();
        delete
            .expect_execute()
            .returning(|_| Err(ProductError::HasPrices));
        let cli = client(api_with(
            MockGetAllProducts::new(),
            MockGetProductById::new(),
            delete,
        ));

        let resp = cli
            .delete(format!("/api/products/{}", Uuid::new_v4()))
            .send()
            .await;

        resp.assert_status(StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn should_answer_no_content_after_delete() {
        let mut delete = MockDeleteProduct::new();
        delete.expect_execute().times(1).returning(|_| Ok(()));
        let cli = client(api_with(
            MockGetAllProducts::new(),
            MockGetProductById::new(),
            delete,
        ));

        let resp = cli
            .delete(format!("/api/products/{}", Uuid::new_v4()))
            .send()
            .await;

        resp.assert_status(StatusCode::NO_CONTENT);
    }
}
