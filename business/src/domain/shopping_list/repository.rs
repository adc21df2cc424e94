use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::EntityId;

use super::model::ShoppingList;

#[async_trait]
pub trait ShoppingListRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError>;
    async fn get_by_id(&self, id: &EntityId) -> Result<ShoppingList, RepositoryError>;
    /// Returns the lists whose id is in `ids`, in store order; unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[EntityId]) -> Result<Vec<ShoppingList>, RepositoryError>;
    /// Case-insensitive literal substring match on name or description.
    async fn search(&self, query: &str) -> Result<Vec<ShoppingList>, RepositoryError>;
    async fn save(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
}
