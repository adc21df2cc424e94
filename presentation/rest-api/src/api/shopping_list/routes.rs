use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::shopping_list::model::ShoppingList;
use business::domain::shopping_list::use_cases::create::{
    CreateShoppingListParams, CreateShoppingListUseCase,
};
use business::domain::shopping_list::use_cases::delete::{
    DeleteShoppingListParams, DeleteShoppingListUseCase,
};
use business::domain::shopping_list::use_cases::get_all::GetAllShoppingListsUseCase;
use business::domain::shopping_list::use_cases::get_by_id::{
    GetShoppingListByIdParams, GetShoppingListByIdUseCase,
};
use business::domain::shopping_list::use_cases::get_by_item::{
    GetShoppingListsByItemParams, GetShoppingListsByItemUseCase,
};
use business::domain::shopping_list::use_cases::search::{
    SearchShoppingListsParams, SearchShoppingListsUseCase,
};
use business::domain::shopping_list::use_cases::update::{
    UpdateShoppingListParams, UpdateShoppingListUseCase,
};

use crate::api::error::{
    ErrorResponse, INVALID_ITEM_ID, INVALID_SHOPPING_LIST_ID, IntoErrorResponse, parse_id,
};
use crate::api::shopping_list::dto::{ShoppingListRequest, ShoppingListResponse};
use crate::api::tags::ApiTags;

pub struct ShoppingListApi {
    create_use_case: Arc<dyn CreateShoppingListUseCase>,
    get_all_use_case: Arc<dyn GetAllShoppingListsUseCase>,
    get_by_id_use_case: Arc<dyn GetShoppingListByIdUseCase>,
    get_by_item_use_case: Arc<dyn GetShoppingListsByItemUseCase>,
    search_use_case: Arc<dyn SearchShoppingListsUseCase>,
    update_use_case: Arc<dyn UpdateShoppingListUseCase>,
    delete_use_case: Arc<dyn DeleteShoppingListUseCase>,
}

impl ShoppingListApi {
    pub fn new(
        create_use_case: Arc<dyn CreateShoppingListUseCase>,
        get_all_use_case: Arc<dyn GetAllShoppingListsUseCase>,
        get_by_id_use_case: Arc<dyn GetShoppingListByIdUseCase>,
        get_by_item_use_case: Arc<dyn GetShoppingListsByItemUseCase>,
        search_use_case: Arc<dyn SearchShoppingListsUseCase>,
        update_use_case: Arc<dyn UpdateShoppingListUseCase>,
        delete_use_case: Arc<dyn DeleteShoppingListUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            get_by_item_use_case,
            search_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

fn into_responses(lists: Vec<ShoppingList>) -> Vec<ShoppingListResponse> {
    lists.into_iter().map(|l| l.into()).collect()
}

/// Shopping list management API
#[OpenApi]
impl ShoppingListApi {
    /// List all shopping lists
    #[oai(path = "/shoppingLists", method = "get", tag = "ApiTags::ShoppingLists")]
    async fn get_all(&self) -> ListShoppingListsResponse {
        match self.get_all_use_case.execute().await {
            Ok(lists) => ListShoppingListsResponse::Ok(Json(into_responses(lists))),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListShoppingListsResponse::InternalError(json)
            }
        }
    }

    /// Search shopping lists
    ///
    /// Case-insensitive substring match against name or description.
    #[oai(
        path = "/shoppingLists/search",
        method = "get",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn search(&self, query: Query<Option<String>>) -> ListShoppingListsResponse {
        let params = SearchShoppingListsParams { query: query.0 };

        match self.search_use_case.execute(params).await {
            Ok(lists) => ListShoppingListsResponse::Ok(Json(into_responses(lists))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => ListShoppingListsResponse::BadRequest(json),
                    _ => ListShoppingListsResponse::InternalError(json),
                }
            }
        }
    }

    /// Shopping lists containing an item
    ///
    /// Answers an empty array when the item exists but is in no list.
    #[oai(
        path = "/shoppingLists/item/:item_id",
        method = "get",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn get_by_item(&self, item_id: Path<String>) -> ListShoppingListsResponse {
        let item_id = match parse_id(&item_id.0, INVALID_ITEM_ID) {
            Ok(id) => id,
            Err(json) => return ListShoppingListsResponse::BadRequest(json),
        };

        match self
            .get_by_item_use_case
            .execute(GetShoppingListsByItemParams { item_id })
            .await
        {
            Ok(lists) => ListShoppingListsResponse::Ok(Json(into_responses(lists))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ListShoppingListsResponse::NotFound(json),
                    _ => ListShoppingListsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a shopping list by ID
    #[oai(
        path = "/shoppingLists/:id",
        method = "get",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn get_by_id(&self, id: Path<String>) -> GetShoppingListResponse {
        let id = match parse_id(&id.0, INVALID_SHOPPING_LIST_ID) {
            Ok(id) => id,
            Err(json) => return GetShoppingListResponse::BadRequest(json),
        };

        match self
            .get_by_id_use_case
            .execute(GetShoppingListByIdParams { id })
            .await
        {
            Ok(list) => GetShoppingListResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetShoppingListResponse::NotFound(json),
                    _ => GetShoppingListResponse::InternalError(json),
                }
            }
        }
    }

    /// Create a shopping list
    #[oai(path = "/shoppingLists", method = "post", tag = "ApiTags::ShoppingLists")]
    async fn create(&self, body: Json<ShoppingListRequest>) -> CreateShoppingListResponse {
        let params = CreateShoppingListParams {
            name: body.0.name.unwrap_or_default(),
            description: body.0.description,
        };

        match self.create_use_case.execute(params).await {
            Ok(list) => CreateShoppingListResponse::Created(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateShoppingListResponse::BadRequest(json),
                    _ => CreateShoppingListResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a shopping list
    ///
    /// The name is required; an omitted description keeps the current one.
    #[oai(
        path = "/shoppingLists/:id",
        method = "patch",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn update(
        &self,
        id: Path<String>,
        body: Json<ShoppingListRequest>,
    ) -> UpdateShoppingListResponse {
        let id = match parse_id(&id.0, INVALID_SHOPPING_LIST_ID) {
            Ok(id) => id,
            Err(json) => return UpdateShoppingListResponse::BadRequest(json),
        };

        let params = UpdateShoppingListParams {
            id,
            name: body.0.name.unwrap_or_default(),
            description: body.0.description,
        };

        match self.update_use_case.execute(params).await {
            Ok(list) => UpdateShoppingListResponse::Ok(Json(list.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateShoppingListResponse::BadRequest(json),
                    404 => UpdateShoppingListResponse::NotFound(json),
                    _ => UpdateShoppingListResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a shopping list
    ///
    /// Entries of the list are left in place.
    #[oai(
        path = "/shoppingLists/:id",
        method = "delete",
        tag = "ApiTags::ShoppingLists"
    )]
    async fn delete(&self, id: Path<String>) -> DeleteShoppingListResponse {
        let id = match parse_id(&id.0, INVALID_SHOPPING_LIST_ID) {
            Ok(id) => id,
            Err(json) => return DeleteShoppingListResponse::BadRequest(json),
        };

        match self
            .delete_use_case
            .execute(DeleteShoppingListParams { id })
            .await
        {
            Ok(()) => DeleteShoppingListResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteShoppingListResponse::NotFound(json),
                    _ => DeleteShoppingListResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListShoppingListsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ShoppingListResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShoppingListResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateShoppingListResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateShoppingListResponse {
    #[oai(status = 201)]
    Created(Json<ShoppingListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteShoppingListResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
