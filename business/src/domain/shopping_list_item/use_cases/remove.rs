use async_trait::async_trait;

use crate::domain::shared::value_objects::EntityId;
use crate::domain::shopping_list_item::errors::ShoppingListItemError;

pub struct RemoveItemFromShoppingListParams {
    pub shopping_list_id: EntityId,
    pub item_id: EntityId,
}

#[async_trait]
pub trait RemoveItemFromShoppingListUseCase: Send + Sync {
    async fn execute(
        &self,
        params: RemoveItemFromShoppingListParams,
    ) -> Result<(), ShoppingListItemError>;
}
