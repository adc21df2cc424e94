use async_trait::async_trait;

use crate::domain::shared::value_objects::EntityId;
use crate::domain::shopping_list::errors::ShoppingListError;

pub struct DeleteShoppingListParams {
    pub id: EntityId,
}

#[async_trait]
pub trait DeleteShoppingListUseCase: Send + Sync {
    async fn execute(&self, params: DeleteShoppingListParams) -> Result<(), ShoppingListError>;
}
