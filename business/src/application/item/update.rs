use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::updated_description;

pub struct UpdateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!("Updating item: {}", params.id));

        if params.name.trim().is_empty() {
            return Err(ItemError::NameEmpty);
        }

        let existing = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        let updated = Item::from_repository(
            existing.id,
            params.name,
            updated_description(params.description, existing.description),
        );

        self.repository.save(&updated).await?;

        self.logger.info(&format!("Item updated: {}", updated.id));
        Ok(updated)
    }
}
