use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shared::value_objects::EntityId;
use business::domain::shopping_list_item::use_cases::add::{
    AddItemToShoppingListParams, AddItemToShoppingListUseCase,
};
use business::domain::shopping_list_item::use_cases::get_by_shopping_list::{
    GetShoppingListItemsParams, GetShoppingListItemsUseCase,
};
use business::domain::shopping_list_item::use_cases::remove::{
    RemoveItemFromShoppingListParams, RemoveItemFromShoppingListUseCase,
};
use business::domain::shopping_list_item::use_cases::update::{
    UpdateShoppingListItemParams, UpdateShoppingListItemUseCase,
};

use crate::api::error::{
    ErrorResponse, INVALID_ITEM_ID, INVALID_SHOPPING_LIST_ID, IntoErrorResponse, parse_id,
    validation_error,
};
use crate::api::shopping_list_item::dto::{
    AddItemRequest, MessageResponse, ShoppingListItemDetailsResponse, ShoppingListItemResponse,
    UpdateQuantityRequest, UpdateShoppingListItemRequest, UpdateStatusRequest,
};
use crate::api::tags::ApiTags;

const FIELDS_REQUIRED: &str = "shoppingListId, itemId, and quantity are required";
const ITEM_REMOVED: &str = "Item removed from shopping list";

pub struct ShoppingListItemApi {
    add_use_case: Arc<dyn AddItemToShoppingListUseCase>,
    remove_use_case: Arc<dyn RemoveItemFromShoppingListUseCase>,
    update_use_case: Arc<dyn UpdateShoppingListItemUseCase>,
    get_by_shopping_list_use_case: Arc<dyn GetShoppingListItemsUseCase>,
}

impl ShoppingListItemApi {
    pub fn new(
        add_use_case: Arc<dyn AddItemToShoppingListUseCase>,
        remove_use_case: Arc<dyn RemoveItemFromShoppingListUseCase>,
        update_use_case: Arc<dyn UpdateShoppingListItemUseCase>,
        get_by_shopping_list_use_case: Arc<dyn GetShoppingListItemsUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            remove_use_case,
            update_use_case,
            get_by_shopping_list_use_case,
        }
    }

    async fn update_entry(
        &self,
        shopping_list_id: &str,
        item_id: &str,
        quantity: Option<i32>,
        status: Option<bool>,
    ) -> UpdateShoppingListItemResponse {
        let (shopping_list_id, item_id) = match parse_pair(shopping_list_id, item_id) {
            Ok(ids) => ids,
            Err(json) => return UpdateShoppingListItemResponse::BadRequest(json),
        };

        let params = UpdateShoppingListItemParams {
            shopping_list_id,
            item_id,
            quantity,
            status,
        };

        match self.update_use_case.execute(params).await {
            Ok(entry) => UpdateShoppingListItemResponse::Ok(Json(entry.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateShoppingListItemResponse::BadRequest(json),
                    404 => UpdateShoppingListItemResponse::NotFound(json),
                    _ => UpdateShoppingListItemResponse::InternalError(json),
                }
            }
        }
    }
}

fn parse_pair(
    shopping_list_id: &str,
    item_id: &str,
) -> Result<(EntityId, EntityId), Json<ErrorResponse>> {
    let shopping_list_id = parse_id(shopping_list_id, INVALID_SHOPPING_LIST_ID)?;
    let item_id = parse_id(item_id, INVALID_ITEM_ID)?;
    Ok((shopping_list_id, item_id))
}

/// Shopping list membership API
///
/// Links items to shopping lists with a quantity and a purchased flag.
#[OpenApi]
impl ShoppingListItemApi {
    /// Items of a shopping list
    ///
    /// Each entry carries its item expanded, or null when the item was deleted.
    #[oai(
        path = "/shoppingListItems/:shopping_list_id",
        method = "get",
        tag = "ApiTags::ShoppingListItems"
    )]
    async fn get_by_shopping_list(
        &self,
        shopping_list_id: Path<String>,
    ) -> GetShoppingListItemsResponse {
        let shopping_list_id = match parse_id(&shopping_list_id.0, INVALID_SHOPPING_LIST_ID) {
            Ok(id) => id,
            Err(json) => return GetShoppingListItemsResponse::BadRequest(json),
        };

        match self
            .get_by_shopping_list_use_case
            .execute(GetShoppingListItemsParams { shopping_list_id })
            .await
        {
            Ok(entries) => {
                let responses: Vec<ShoppingListItemDetailsResponse> =
                    entries.into_iter().map(|e| e.into()).collect();
                GetShoppingListItemsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetShoppingListItemsResponse::NotFound(json),
                    _ => GetShoppingListItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Add an item to a shopping list
    ///
    /// New entries start as pending. A list holds each item at most once.
    #[oai(
        path = "/shoppingListItems/:shopping_list_id",
        method = "post",
        tag = "ApiTags::ShoppingListItems"
    )]
    async fn add(
        &self,
        shopping_list_id: Path<String>,
        body: Json<AddItemRequest>,
    ) -> AddItemResponse {
        let item_id = body.0.item_id.unwrap_or_default();
        let (shopping_list_id, item_id) = match parse_pair(&shopping_list_id.0, &item_id) {
            Ok(ids) => ids,
            Err(json) => return AddItemResponse::BadRequest(json),
        };
        let Some(quantity) = body.0.quantity else {
            return AddItemResponse::BadRequest(validation_error(FIELDS_REQUIRED));
        };

        let params = AddItemToShoppingListParams {
            shopping_list_id,
            item_id,
            quantity,
        };

        match self.add_use_case.execute(params).await {
            Ok(entry) => AddItemResponse::Created(Json(entry.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddItemResponse::BadRequest(json),
                    404 => AddItemResponse::NotFound(json),
                    _ => AddItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove an item from a shopping list
    #[oai(
        path = "/shoppingListItems/:shopping_list_id/:item_id",
        method = "delete",
        tag = "ApiTags::ShoppingListItems"
    )]
    async fn remove(
        &self,
        shopping_list_id: Path<String>,
        item_id: Path<String>,
    ) -> RemoveItemResponse {
        let (shopping_list_id, item_id) = match parse_pair(&shopping_list_id.0, &item_id.0) {
            Ok(ids) => ids,
            Err(json) => return RemoveItemResponse::BadRequest(json),
        };

        let params = RemoveItemFromShoppingListParams {
            shopping_list_id,
            item_id,
        };

        match self.remove_use_case.execute(params).await {
            Ok(()) => RemoveItemResponse::Ok(Json(MessageResponse {
                message: ITEM_REMOVED.to_string(),
            })),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveItemResponse::NotFound(json),
                    _ => RemoveItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Update quantity and/or status of an entry
    #[oai(
        path = "/shoppingListItems/:shopping_list_id/:item_id",
        method = "patch",
        tag = "ApiTags::ShoppingListItems"
    )]
    async fn update(
        &self,
        shopping_list_id: Path<String>,
        item_id: Path<String>,
        body: Json<UpdateShoppingListItemRequest>,
    ) -> UpdateShoppingListItemResponse {
        self.update_entry(
            &shopping_list_id.0,
            &item_id.0,
            body.0.quantity,
            body.0.status,
        )
        .await
    }

    /// Mark an entry purchased or pending
    #[oai(
        path = "/shoppingListItems/:shopping_list_id/:item_id/status",
        method = "patch",
        tag = "ApiTags::ShoppingListItems"
    )]
    async fn update_status(
        &self,
        shopping_list_id: Path<String>,
        item_id: Path<String>,
        body: Json<UpdateStatusRequest>,
    ) -> UpdateShoppingListItemResponse {
        self.update_entry(&shopping_list_id.0, &item_id.0, None, body.0.status)
            .await
    }

    /// Change the quantity of an entry
    #[oai(
        path = "/shoppingListItems/:shopping_list_id/:item_id/quantity",
        method = "patch",
        tag = "ApiTags::ShoppingListItems"
    )]
    async fn update_quantity(
        &self,
        shopping_list_id: Path<String>,
        item_id: Path<String>,
        body: Json<UpdateQuantityRequest>,
    ) -> UpdateShoppingListItemResponse {
        self.update_entry(&shopping_list_id.0, &item_id.0, body.0.quantity, None)
            .await
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetShoppingListItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ShoppingListItemDetailsResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddItemResponse {
    #[oai(status = 201)]
    Created(Json<ShoppingListItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveItemResponse {
    #[oai(status = 200)]
    Ok(Json<MessageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateShoppingListItemResponse {
    #[oai(status = 200)]
    Ok(Json<ShoppingListItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
