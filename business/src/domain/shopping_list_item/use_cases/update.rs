use async_trait::async_trait;

use crate::domain::shared::value_objects::EntityId;
use crate::domain::shopping_list_item::errors::ShoppingListItemError;
use crate::domain::shopping_list_item::model::ShoppingListItem;

/// Partial update: only the supplied fields change.
pub struct UpdateShoppingListItemParams {
    pub shopping_list_id: EntityId,
    pub item_id: EntityId,
    pub quantity: Option<i32>,
    pub status: Option<bool>,
}

#[async_trait]
pub trait UpdateShoppingListItemUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateShoppingListItemParams,
    ) -> Result<ShoppingListItem, ShoppingListItemError>;
}
