use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_all::GetAllItemsUseCase;
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};

use crate::api::error::{ErrorResponse, INVALID_ITEM_ID, IntoErrorResponse, parse_id};
use crate::api::item::dto::{ItemRequest, ItemResponse};
use crate::api::tags::ApiTags;

pub struct ItemApi {
    create_use_case: Arc<dyn CreateItemUseCase>,
    get_all_use_case: Arc<dyn GetAllItemsUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    update_use_case: Arc<dyn UpdateItemUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
}

impl ItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateItemUseCase>,
        get_all_use_case: Arc<dyn GetAllItemsUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        update_use_case: Arc<dyn UpdateItemUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
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

/// Item catalog API
///
/// Items exist independently of any shopping list.
#[OpenApi]
impl ItemApi {
    /// List all items
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    async fn get_all(&self) -> GetAllItemsResponse {
        match self.get_all_use_case.execute().await {
            Ok(items) => {
                let responses: Vec<ItemResponse> = items.into_iter().map(|i| i.into()).collect();
                GetAllItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllItemsResponse::InternalError(json)
            }
        }
    }

    /// Get an item by ID
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    async fn get_by_id(&self, id: Path<String>) -> GetItemResponse {
        let id = match parse_id(&id.0, INVALID_ITEM_ID) {
            Ok(id) => id,
            Err(json) => return GetItemResponse::BadRequest(json),
        };

        match self.get_by_id_use_case.execute(GetItemByIdParams { id }).await {
            Ok(item) => GetItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetItemResponse::NotFound(json),
                    _ => GetItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Create an item
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create(&self, body: Json<ItemRequest>) -> CreateItemResponse {
        let params = CreateItemParams {
            name: body.0.name.unwrap_or_default(),
            description: body.0.description,
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateItemResponse::BadRequest(json),
                    _ => CreateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an item
    ///
    /// The name is required; an omitted description keeps the current one.
    #[oai(path = "/items/:id", method = "patch", tag = "ApiTags::Items")]
    async fn update(&self, id: Path<String>, body: Json<ItemRequest>) -> UpdateItemResponse {
        let id = match parse_id(&id.0, INVALID_ITEM_ID) {
            Ok(id) => id,
            Err(json) => return UpdateItemResponse::BadRequest(json),
        };

        let params = UpdateItemParams {
            id,
            name: body.0.name.unwrap_or_default(),
            description: body.0.description,
        };

        match self.update_use_case.execute(params).await {
            Ok(item) => UpdateItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateItemResponse::BadRequest(json),
                    404 => UpdateItemResponse::NotFound(json),
                    _ => UpdateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an item
    ///
    /// Entries referencing the item in shopping lists are left in place.
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete(&self, id: Path<String>) -> DeleteItemResponse {
        let id = match parse_id(&id.0, INVALID_ITEM_ID) {
            Ok(id) => id,
            Err(json) => return DeleteItemResponse::BadRequest(json),
        };

        match self.delete_use_case.execute(DeleteItemParams { id }).await {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateItemResponse {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
