use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use crate::domain::logger::Logger;

pub struct GetItemByIdUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetItemByIdUseCase for GetItemByIdUseCaseImpl {
    async fn execute(&self, params: GetItemByIdParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Fetching item by id: {}", params.id));

        let item = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ItemError::NotFound,
                other => ItemError::Repository(other),
            })?;

        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::EntityId;
    use mockall::mock;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn get_all(&self) -> Result<Vec<Item>, RepositoryError>;
            async fn get_by_id(&self, id: &EntityId) -> Result<Item, RepositoryError>;
            async fn find_by_ids(&self, ids: &[EntityId]) -> Result<Vec<Item>, RepositoryError>;
            async fn save(&self, item: &Item) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError>;
            async fn count(&self) -> Result<u64, RepositoryError>;
        }
    }
    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }
    #[tokio::test]
    async fn should_return_item_when_exists() {
        let item_id = EntityId::generate();
        let expected_id = item_id.clone();
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |id: &EntityId| *id == expected_id)
            .returning(|id| Ok(Item::from_repository(id.clone(), "Eggs".to_string(), None)));

        let use_case = GetItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetItemByIdParams {
                id: item_id.clone(),
            })
            .await;

        let item = result.unwrap();
        assert_eq!(item.id, item_id);
        assert_eq!(item.name, "Eggs");
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_missing() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetItemByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetItemByIdParams {
                id: EntityId::generate(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }
}
