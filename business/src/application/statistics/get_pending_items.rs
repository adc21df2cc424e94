use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::shopping_list_item::repository::ShoppingListItemRepository;
use crate::domain::statistics::aggregation::{group_pending_by_item, pending_item_ids};
use crate::domain::statistics::errors::StatisticsError;
use crate::domain::statistics::model::PendingItemSummary;
use crate::domain::statistics::use_cases::get_pending_items::GetPendingItemsUseCase;

pub struct GetPendingItemsUseCaseImpl {
    pub item_repository: Arc<dyn ItemRepository>,
    pub shopping_list_item_repository: Arc<dyn ShoppingListItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetPendingItemsUseCase for GetPendingItemsUseCaseImpl {
    async fn execute(&self) -> Result<Vec<PendingItemSummary>, StatisticsError> {
        self.logger.info("Aggregating pending items");

        let pending = self
            .shopping_list_item_repository
            .find_by_status(false)
            .await?;

        let item_ids = pending_item_ids(&pending);
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }
        let items = self.item_repository.find_by_ids(&item_ids).await?;

        if items.len() < item_ids.len() {
            self.logger.warn(&format!(
                "{} pending item references point to deleted items",
                item_ids.len() - items.len()
            ));
        }

        let summaries = group_pending_by_item(&pending, &items);

        self.logger
            .info(&format!("Aggregated {} pending items", summaries.len()));
        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::item::model::Item;
    use crate::domain::shared::value_objects::EntityId;
    use crate::domain::shopping_list_item::model::ShoppingListItem;
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
    async fn should_total_same_item_across_lists() {
        let milk = EntityId::generate();
        let pending = vec![
            ShoppingListItem::from_repository(
                EntityId::generate(),
                EntityId::generate(),
                milk.clone(),
                5,
                false,
            ),
            ShoppingListItem::from_repository(
                EntityId::generate(),
                EntityId::generate(),
                milk.clone(),
                3,
                false,
            ),
        ];
        let mut entries = MockShoppingListItemRepo::new();
        entries
            .expect_find_by_status()
            .withf(|status: &bool| !*status)
            .returning(move |_| Ok(pending.clone()));

        let mut items = MockItemRepo::new();
        items.expect_find_by_ids().returning(|ids| {
            Ok(ids
                .iter()
                .map(|id| Item::from_repository(id.clone(), "Milk".to_string(), None))
                .collect())
        });

        let use_case = GetPendingItemsUseCaseImpl {
            item_repository: Arc::new(items),
            shopping_list_item_repository: Arc::new(entries),
            logger: mock_logger(),
        };

        let summaries = use_case.execute().await.unwrap();

        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].item_id, milk);
        assert_eq!(summaries[0].item_name, "Milk");
        assert_eq!(summaries[0].total_quantity, 8);
    }

    #[tokio::test]
    async fn should_return_empty_without_item_lookup_when_nothing_pending() {
        let mut entries = MockShoppingListItemRepo::new();
        entries.expect_find_by_status().returning(|_| Ok(vec![]));
        let mut items = MockItemRepo::new();
        items.expect_find_by_ids().never();

        let use_case = GetPendingItemsUseCaseImpl {
            item_repository: Arc::new(items),
            shopping_list_item_repository: Arc::new(entries),
            logger: mock_logger(),
        };

        assert!(use_case.execute().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_propagate_store_failure() {
        let mut entries = MockShoppingListItemRepo::new();
        entries
            .expect_find_by_status()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetPendingItemsUseCaseImpl {
            item_repository: Arc::new(MockItemRepo::new()),
            shopping_list_item_repository: Arc::new(entries),
            logger: mock_logger(),
        };

        assert!(matches!(
            use_case.execute().await.unwrap_err(),
            StatisticsError::Repository(_)
        ));
    }
}
