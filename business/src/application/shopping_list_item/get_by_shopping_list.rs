use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list_item::errors::ShoppingListItemError;
use crate::domain::shopping_list_item::model::ShoppingListItemDetails;
use crate::domain::shopping_list_item::repository::ShoppingListItemRepository;
use crate::domain::shopping_list_item::use_cases::get_by_shopping_list::{
    GetShoppingListItemsParams, GetShoppingListItemsUseCase,
};

pub struct GetShoppingListItemsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListItemRepository>,
    pub shopping_list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingListItemsUseCase for GetShoppingListItemsUseCaseImpl {
    async fn execute(
        &self,
        params: GetShoppingListItemsParams,
    ) -> Result<Vec<ShoppingListItemDetails>, ShoppingListItemError> {
        self.logger.info(&format!(
            "Getting items of shopping list: {}",
            params.shopping_list_id
        ));

        self.shopping_list_repository
            .get_by_id(&params.shopping_list_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListItemError::ShoppingListNotFound,
                other => ShoppingListItemError::Repository(other),
            })?;

        let entries = self
            .repository
            .find_by_shopping_list(&params.shopping_list_id)
            .await?;
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let mut seen = HashSet::new();
        let item_ids: Vec<_> = entries
            .iter()
            .map(|entry| entry.item_id.clone())
            .filter(|id| seen.insert(id.clone()))
            .collect();
        let items = self.item_repository.find_by_ids(&item_ids).await?;

        let details: Vec<ShoppingListItemDetails> = entries
            .into_iter()
            .map(|entry| {
                let item = items.iter().find(|item| item.id == entry.item_id).cloned();
                ShoppingListItemDetails { entry, item }
            })
            .collect();

        self.logger.info(&format!(
            "Retrieved {} entries for shopping list {}",
            details.len(),
            params.shopping_list_id
        ));
        Ok(details)
    }
}
