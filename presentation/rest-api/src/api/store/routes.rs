use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::store::use_cases::create::{CreateStoreParams, CreateStoreUseCase};
use business::domain::store::use_cases::delete::{DeleteStoreParams, DeleteStoreUseCase};
use business::domain::store::use_cases::get_all::GetAllStoresUseCase;
use business::domain::store::use_cases::get_by_id::{GetStoreByIdParams, GetStoreByIdUseCase};
use business::domain::store::use_cases::update::{UpdateStoreParams, UpdateStoreUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse, parse_id};
use crate::api::store::dto::{StoreRequest, StoreResponse};
use crate::api::tags::ApiTags;

const INVALID_ID: &str = "store.invalid_id";

pub struct StoreApi {
    create_use_case: Arc<dyn CreateStoreUseCase>,
    get_all_use_case: Arc<dyn GetAllStoresUseCase>,
    get_by_id_use_case: Arc<dyn GetStoreByIdUseCase>,
    update_use_case: Arc<dyn UpdateStoreUseCase>,
    delete_use_case: Arc<dyn DeleteStoreUseCase>,
}

impl StoreApi {
    pub fn new(
        create_use_case: Arc<dyn CreateStoreUseCase>,
        get_all_use_case: Arc<dyn GetAllStoresUseCase>,
        get_by_id_use_case: Arc<dyn GetStoreByIdUseCase>,
        update_use_case: Arc<dyn UpdateStoreUseCase>,
        delete_use_case: Arc<dyn DeleteStoreUseCase>,
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

/// Store API
#[OpenApi]
impl StoreApi {
    /// Create a new store
    #[oai(path = "/stores", method = "post", tag = "ApiTags::Stores")]
    async fn create_store(&self, body: Json<StoreRequest>) -> CreateStoreResponse {
        let params = CreateStoreParams {
            name: body.0.name,
            location: body.0.location,
            address: body.0.address,
        };

        match self.create_use_case.execute(params).await {
            Ok(store) => CreateStoreResponse::Created(Json(store.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateStoreResponse::BadRequest(json),
                    _ => CreateStoreResponse::InternalError(json),
                }
            }
        }
    }

    /// List stores ordered by name
    #[oai(path = "/stores", method = "get", tag = "ApiTags::Stores")]
    async fn get_all_stores(&self) -> GetAllStoresResponse {
        match self.get_all_use_case.execute().await {
            Ok(stores) => GetAllStoresResponse::Ok(Json(
                stores.into_iter().map(StoreResponse::from).collect(),
            )),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllStoresResponse::InternalError(json)
            }
        }
    }

    /// Get a store by ID
    #[oai(path = "/stores/:id", method = "get", tag = "ApiTags::Stores")]
    async fn get_store_by_id(&self, id: Path<String>) -> GetStoreByIdResponse {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return GetStoreByIdResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetStoreByIdParams { id })
            .await
        {
            Ok(store) => GetStoreByIdResponse::Ok(Json(store.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetStoreByIdResponse::NotFound(json),
                    _ => GetStoreByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a store
    #[oai(path = "/stores/:id", method = "put", tag = "ApiTags::Stores")]
    async fn update_store(&self, id: Path<String>, body: Json<StoreRequest>) -> UpdateStoreResponse {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return UpdateStoreResponse::BadRequest(json),
        };

        let params = UpdateStoreParams {
            id,
            name: body.0.name,
            location: body.0.location,
            address: body.0.address,
        };

        match self.update_use_case.execute(params).await {
            Ok(store) => UpdateStoreResponse::Ok(Json(store.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateStoreResponse::BadRequest(json),
                    404 => UpdateStoreResponse::NotFound(json),
                    _ => UpdateStoreResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a store
    ///
    /// Rejected with 409 while any price references the store.
    #[oai(path = "/stores/:id", method = "delete", tag = "ApiTags::Stores")]
    async fn delete_store(&self, id: Path<String>) -> DeleteStoreResponse {
        let id = match parse_id(&id.0, INVALID_ID) {
            Ok(id) => id,
            Err(json) => return DeleteStoreResponse::BadRequest(json),
        };

        match self.delete_use_case.execute(DeleteStoreParams { id }).await {
            Ok(()) => DeleteStoreResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteStoreResponse::NotFound(json),
                    409 => DeleteStoreResponse::Conflict(json),
                    _ => DeleteStoreResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateStoreResponse {
    #[oai(status = 201)]
    Created(Json<StoreResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllStoresResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<StoreResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetStoreByIdResponse {
    #[oai(status = 200)]
    Ok(Json<StoreResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateStoreResponse {
    #[oai(status = 200)]
    Ok(Json<StoreResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteStoreResponse {
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
