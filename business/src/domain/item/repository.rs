use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::EntityId;

use super::model::Item;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
    async fn get_by_id(&self, id: &EntityId) -> Result<Item, RepositoryError>;
    /// Returns the items whose id is in `ids`; unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[EntityId]) -> Result<Vec<Item>, RepositoryError>;
    async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
}
