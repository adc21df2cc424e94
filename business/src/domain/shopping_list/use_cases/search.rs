use async_trait::async_trait;

use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;

pub struct SearchShoppingListsParams {
    pub query: Option<String>,
}

#[async_trait]
pub trait SearchShoppingListsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SearchShoppingListsParams,
    ) -> Result<Vec<ShoppingList>, ShoppingListError>;
}
