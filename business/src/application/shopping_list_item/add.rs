use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list_item::errors::ShoppingListItemError;
use crate::domain::shopping_list_item::model::{ShoppingListItem, validate_quantity};
use crate::domain::shopping_list_item::repository::ShoppingListItemRepository;
use crate::domain::shopping_list_item::use_cases::add::{
    AddItemToShoppingListParams, AddItemToShoppingListUseCase,
};

pub struct AddItemToShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListItemRepository>,
    pub shopping_list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemToShoppingListUseCase for AddItemToShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: AddItemToShoppingListParams,
    ) -> Result<ShoppingListItem, ShoppingListItemError> {
        self.logger.info(&format!(
            "Adding item {} to shopping list {}",
            params.item_id, params.shopping_list_id
        ));

        validate_quantity(params.quantity)?;

        self.shopping_list_repository
            .get_by_id(&params.shopping_list_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListItemError::ShoppingListNotFound,
                other => ShoppingListItemError::Repository(other),
            })?;

        self.item_repository
            .get_by_id(&params.item_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListItemError::ItemNotFound,
                other => ShoppingListItemError::Repository(other),
            })?;

        if self
            .repository
            .find_entry(&params.shopping_list_id, &params.item_id)
            .await?
            .is_some()
        {
            self.logger.warn(&format!(
                "Item {} already in shopping list {}",
                params.item_id, params.shopping_list_id
            ));
            return Err(ShoppingListItemError::AlreadyExists);
        }

        let entry =
            ShoppingListItem::new(params.shopping_list_id, params.item_id, params.quantity)?;

        // A concurrent add of the same pair loses on the unique index
        self.repository.save(&entry).await.map_err(|e| match e {
            RepositoryError::Duplicated => ShoppingListItemError::AlreadyExists,
            other => ShoppingListItemError::Repository(other),
        })?;

        self.logger
            .info(&format!("Shopping list entry created: {}", entry.id));
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::model::Item;
    use crate::domain::shared::value_objects::EntityId;
    use crate::domain::shopping_list::model::ShoppingList;
    use mockall::mock;

    mock! {
        pub ShoppingListItemRepo {}

        #[async_trait]
        impl ShoppingListItemRepository for ShoppingListItemRepo {
            async fn find_entry(&self, shopping_list_id: &EntityId, item_id: &EntityId) -> Result<Option<ShoppingListItem>, RepositoryError>;
            async fn find_by_shopping_list(&self, shopping_list_id: &EntityId) -> Result<Vec<ShoppingListItem>, RepositoryError>;
            async fn find_by_item(&self, item_id: &EntityId) -> Result<Vec<ShoppingListItem>, RepositoryError>;
            async fn find_by_status(&self, status: bool) -> Result<Vec<ShoppingListItem>, RepositoryError>;
            async fn count_by_status(&self, status: bool) -> Result<u64, RepositoryError>;
            async fn save(&self, entry: &ShoppingListItem) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError>;
        }
    }
    mock! {
        pub ShoppingListRepo {}

        #[async_trait]
        impl ShoppingListRepository for ShoppingListRepo {
            async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError>;
            async fn get_by_id(&self, id: &EntityId) -> Result<ShoppingList, RepositoryError>;
            async fn find_by_ids(&self, ids: &[EntityId]) -> Result<Vec<ShoppingList>, RepositoryError>;
            async fn search(&self, query: &str) -> Result<Vec<ShoppingList>, RepositoryError>;
            async fn save(&self, list: &ShoppingList) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError>;
            async fn count(&self) -> Result<u64, RepositoryError>;
        }
    }
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
    fn list_repo_with_list() -> MockShoppingListRepo {
        let mut repo = MockShoppingListRepo::new();
        repo.expect_get_by_id().returning(|id| {
            Ok(ShoppingList::from_repository(
                id.clone(),
                "Weekly Groceries".to_string(),
                None,
                chrono::Utc::now(),
            ))
        });
        repo
    }

    fn item_repo_with_item() -> MockItemRepo {
        let mut repo = MockItemRepo::new();
        repo.expect_get_by_id()
            .returning(|id| Ok(Item::from_repository(id.clone(), "Apples".to_string(), None)));
        repo
    }

    fn params(quantity: i32) -> AddItemToShoppingListParams {
        AddItemToShoppingListParams {
            shopping_list_id: EntityId::generate(),
            item_id: EntityId::generate(),
            quantity,
        }
    }

    #[tokio::test]
    async fn should_add_pending_entry_when_valid() {
        let mut entry_repo = MockShoppingListItemRepo::new();
        entry_repo.expect_find_entry().returning(|_, _| Ok(None));
        entry_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = AddItemToShoppingListUseCaseImpl {
            repository: Arc::new(entry_repo),
            shopping_list_repository: Arc::new(list_repo_with_list()),
            item_repository: Arc::new(item_repo_with_item()),
            logger: mock_logger(),
        };

        let request = params(5);
        let list_id = request.shopping_list_id.clone();
        let result = use_case.execute(request).await;

        let entry = result.unwrap();
        assert_eq!(entry.shopping_list_id, list_id);
        assert_eq!(entry.quantity, 5);
        assert!(!entry.status);
    }

    #[tokio::test]
    async fn should_reject_second_add_of_same_pair() {
        let mut entry_repo = MockShoppingListItemRepo::new();
        entry_repo.expect_find_entry().returning(|list_id, item_id| {
            Ok(Some(ShoppingListItem::from_repository(
                EntityId::generate(),
                list_id.clone(),
                item_id.clone(),
                2,
                false,
            )))
        });
        entry_repo.expect_save().never();

        let use_case = AddItemToShoppingListUseCaseImpl {
            repository: Arc::new(entry_repo),
            shopping_list_repository: Arc::new(list_repo_with_list()),
            item_repository: Arc::new(item_repo_with_item()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListItemError::AlreadyExists
        ));
    }

    #[tokio::test]
    async fn should_map_unique_violation_to_already_exists() {
        let mut entry_repo = MockShoppingListItemRepo::new();
        entry_repo.expect_find_entry().returning(|_, _| Ok(None));
        entry_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Duplicated));

        let use_case = AddItemToShoppingListUseCaseImpl {
            repository: Arc::new(entry_repo),
            shopping_list_repository: Arc::new(list_repo_with_list()),
            item_repository: Arc::new(item_repo_with_item()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListItemError::AlreadyExists
        ));
    }

    #[tokio::test]
    async fn should_return_list_not_found_when_list_missing() {
        let mut list_repo = MockShoppingListRepo::new();
        list_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut item_repo = MockItemRepo::new();
        item_repo.expect_get_by_id().never();

        let use_case = AddItemToShoppingListUseCaseImpl {
            repository: Arc::new(MockShoppingListItemRepo::new()),
            shopping_list_repository: Arc::new(list_repo),
            item_repository: Arc::new(item_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListItemError::ShoppingListNotFound
        ));
    }

    #[tokio::test]
    async fn should_return_item_not_found_when_item_missing() {
        let mut item_repo = MockItemRepo::new();
        item_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = AddItemToShoppingListUseCaseImpl {
            repository: Arc::new(MockShoppingListItemRepo::new()),
            shopping_list_repository: Arc::new(list_repo_with_list()),
            item_repository: Arc::new(item_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(1)).await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListItemError::ItemNotFound
        ));
    }

    #[tokio::test]
    async fn should_reject_non_positive_quantity_before_lookups() {
        let mut list_repo = MockShoppingListRepo::new();
        list_repo.expect_get_by_id().never();

        let use_case = AddItemToShoppingListUseCaseImpl {
            repository: Arc::new(MockShoppingListItemRepo::new()),
            shopping_list_repository: Arc::new(list_repo),
            item_repository: Arc::new(MockItemRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params(0)).await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingListItemError::InvalidQuantity
        ));
    }
}
