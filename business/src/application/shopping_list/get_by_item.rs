use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::get_by_item::{
    GetShoppingListsByItemParams, GetShoppingListsByItemUseCase,
};
use crate::domain::shopping_list_item::repository::ShoppingListItemRepository;

pub struct GetShoppingListsByItemUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub shopping_list_item_repository: Arc<dyn ShoppingListItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetShoppingListsByItemUseCase for GetShoppingListsByItemUseCaseImpl {
    async fn execute(
        &self,
        params: GetShoppingListsByItemParams,
    ) -> Result<Vec<ShoppingList>, ShoppingListError> {
        self.logger.info(&format!(
            "Fetching shopping lists containing item: {}",
            params.item_id
        ));

        self.item_repository
            .get_by_id(&params.item_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListError::ItemNotFound,
                other => ShoppingListError::Repository(other),
            })?;

        let entries = self
            .shopping_list_item_repository
            .find_by_item(&params.item_id)
            .await?;

        let mut seen = HashSet::new();
        let list_ids: Vec<_> = entries
            .into_iter()
            .map(|entry| entry.shopping_list_id)
            .filter(|id| seen.insert(id.clone()))
            .collect();

        if list_ids.is_empty() {
            return Ok(Vec::new());
        }

        let lists = self.repository.find_by_ids(&list_ids).await?;

        self.logger.info(&format!(
            "Item {} appears in {} shopping lists",
            params.item_id,
            lists.len()
        ));
        Ok(lists)
    }
}
