use async_trait::async_trait;

use crate::domain::shared::value_objects::EntityId;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct UpdateShoppingListParams {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait UpdateShoppingListUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError>;
}
