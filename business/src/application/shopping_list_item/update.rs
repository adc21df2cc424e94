use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list_item::errors::ShoppingListItemError;
use crate::domain::shopping_list_item::model::{ShoppingListItem, validate_quantity};
use crate::domain::shopping_list_item::repository::ShoppingListItemRepository;
use crate::domain::shopping_list_item::use_cases::update::{
    UpdateShoppingListItemParams, UpdateShoppingListItemUseCase,
};

pub struct UpdateShoppingListItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingListItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateShoppingListItemUseCase for UpdateShoppingListItemUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateShoppingListItemParams,
    ) -> Result<ShoppingListItem, ShoppingListItemError> {
        self.logger.info(&format!(
            "Updating item {} in shopping list {}",
            params.item_id, params.shopping_list_id
        ));

        if let Some(quantity) = params.quantity {
            validate_quantity(quantity)?;
        }

        let existing = self
            .repository
            .find_entry(&params.shopping_list_id, &params.item_id)
            .await?
            .ok_or(ShoppingListItemError::NotFound)?;

        let updated = ShoppingListItem::from_repository(
            existing.id,
            existing.shopping_list_id,
            existing.item_id,
            params.quantity.unwrap_or(existing.quantity),
            params.status.unwrap_or(existing.status),
        );

        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("Shopping list entry updated: {}", updated.id));
        Ok(updated)
    }
}
