use async_trait::async_trait;

use crate::domain::shared::value_objects::EntityId;
use crate::domain::shopping_list_item::errors::ShoppingListItemError;
use crate::domain::shopping_list_item::model::ShoppingListItem;

pub struct AddItemToShoppingListParams {
    pub shopping_list_id: EntityId,
    pub item_id: EntityId,
    pub quantity: i32,
}

#[async_trait]
pub trait AddItemToShoppingListUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AddItemToShoppingListParams,
    ) -> Result<ShoppingListItem, ShoppingListItemError>;
}
