use async_trait::async_trait;

use crate::domain::shared::value_objects::EntityId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct GetShoppingListsByItemParams {
    pub item_id: EntityId,
}

/// Reverse lookup: every shopping list holding an entry for the given item.
#[async_trait]
pub trait GetShoppingListsByItemUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetShoppingListsByItemParams,
    ) -> Result<Vec<ShoppingList>, ShoppingListError>;
}
