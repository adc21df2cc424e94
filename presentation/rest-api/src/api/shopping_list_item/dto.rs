use poem_openapi::Object;

use business::domain::shopping_list_item::model::{ShoppingListItem, ShoppingListItemDetails};

use crate::api::item::dto::ItemResponse;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct AddItemRequest {
    /// Item to add (24-character hex ID)
    pub item_id: Option<String>,
    /// Quantity, must be greater than zero
    pub quantity: Option<i32>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateShoppingListItemRequest {
    /// New quantity, must be greater than zero
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i32>,
    /// Purchased flag
    #[oai(skip_serializing_if_is_none)]
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    /// Purchased flag
    #[oai(skip_serializing_if_is_none)]
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct UpdateQuantityRequest {
    /// New quantity, must be greater than zero
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<i32>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShoppingListItemResponse {
    pub id: String,
    pub shopping_list_id: String,
    pub item_id: String,
    pub quantity: i32,
    /// `true` once purchased
    pub status: bool,
}

impl From<ShoppingListItem> for ShoppingListItemResponse {
    fn from(entry: ShoppingListItem) -> Self {
        Self {
            id: entry.id.to_string(),
            shopping_list_id: entry.shopping_list_id.to_string(),
            item_id: entry.item_id.to_string(),
            quantity: entry.quantity,
            status: entry.status,
        }
    }
}

/// Entry with its item expanded; `item` is null when the item was deleted.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShoppingListItemDetailsResponse {
    pub id: String,
    pub shopping_list_id: String,
    pub item_id: String,
    pub quantity: i32,
    pub status: bool,
    pub item: Option<ItemResponse>,
}

impl From<ShoppingListItemDetails> for ShoppingListItemDetailsResponse {
    fn from(details: ShoppingListItemDetails) -> Self {
        let entry = details.entry;
        Self {
            id: entry.id.to_string(),
            shopping_list_id: entry.shopping_list_id.to_string(),
            item_id: entry.item_id.to_string(),
            quantity: entry.quantity,
            status: entry.status,
            item: details.item.map(|item| item.into()),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}
