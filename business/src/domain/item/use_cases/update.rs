use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::EntityId;

/// `name` is mandatory on update; an absent `description` keeps the current one.
pub struct UpdateItemParams {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait UpdateItemUseCase: Send + Sync {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError>;
}
