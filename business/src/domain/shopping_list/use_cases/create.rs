use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct CreateShoppingListParams {
    pub name: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait CreateShoppingListUseCase: Send + Sync {
    async fn execute(
        &self,
        params: CreateShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError>;
}
