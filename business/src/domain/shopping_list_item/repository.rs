use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::EntityId;

use super::model::ShoppingListItem;

#[async_trait]
pub trait ShoppingListItemRepository: Send + Sync {
    async fn find_entry(
        &self,
        shopping_list_id: &EntityId,
        item_id: &EntityId,
    ) -> Result<Option<ShoppingListItem>, RepositoryError>;
    async fn find_by_shopping_list(
        &self,
        shopping_list_id: &EntityId,
    ) -> Result<Vec<ShoppingListItem>, RepositoryError>;
    async fn find_by_item(&self, item_id: &EntityId)
    -> Result<Vec<ShoppingListItem>, RepositoryError>;
    async fn find_by_status(&self, status: bool) -> Result<Vec<ShoppingListItem>, RepositoryError>;
    async fn count_by_status(&self, status: bool) -> Result<u64, RepositoryError>;
    /// Inserts or updates by id. Fails with `Duplicated` when another entry
    /// already holds the same (shopping list, item) pair.
    async fn save(&self, entry: &ShoppingListItem) -> Result<(), RepositoryError>;
    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError>;
}
