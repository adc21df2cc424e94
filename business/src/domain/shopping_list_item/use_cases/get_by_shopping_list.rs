use async_trait::async_trait;

use crate::domain::shared::value_objects::EntityId;
use crate::domain::shopping_list_item::errors::ShoppingListItemError;
use crate::domain::shopping_list_item::model::ShoppingListItemDetails;

pub struct GetShoppingListItemsParams {
    pub shopping_list_id: EntityId,
}

#[async_trait]
pub trait GetShoppingListItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetShoppingListItemsParams,
    ) -> Result<Vec<ShoppingListItemDetails>, ShoppingListItemError>;
}
