use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::updated_description;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::update::{
    UpdateShoppingListParams, UpdateShoppingListUseCase,
};

pub struct UpdateShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateShoppingListUseCase for UpdateShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateShoppingListParams,
    ) -> Result<ShoppingList, ShoppingListError> {
        self.logger
            .info(&format!("Updating shopping list: {}", params.id));

        if params.name.trim().is_empty() {
            return Err(ShoppingListError::NameEmpty);
        }

        let existing = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListError::NotFound,
                other => ShoppingListError::Repository(other),
            })?;

        let updated = ShoppingList::from_repository(
            existing.id,
            params.name,
            updated_description(params.description, existing.description),
            existing.created_at,
        );

        self.repository.save(&updated).await?;

        self.logger
            .info(&format!("Shopping list updated: {}", updated.id));
        Ok(updated)
    }
}
