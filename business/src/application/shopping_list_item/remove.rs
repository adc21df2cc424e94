use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list_item::errors::ShoppingListItemError;
use crate::domain::shopping_list_item::repository::ShoppingListItemRepository;
use crate::domain::shopping_list_item::use_cases::remove::{
    RemoveItemFromShoppingListParams, RemoveItemFromShoppingListUseCase,
};

pub struct RemoveItemFromShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveItemFromShoppingListUseCase for RemoveItemFromShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: RemoveItemFromShoppingListParams,
    ) -> Result<(), ShoppingListItemError> {
        self.logger.info(&format!(
            "Removing item {} from shopping list {}",
            params.item_id, params.shopping_list_id
        ));

        let entry = self
            .repository
            .find_entry(&params.shopping_list_id, &params.item_id)
            .await?
            .ok_or(ShoppingListItemError::NotFound)?;

        self.repository.delete(&entry.id).await?;

        self.logger
            .info(&format!("Shopping list entry deleted: {}", entry.id));
        Ok(())
    }
}
