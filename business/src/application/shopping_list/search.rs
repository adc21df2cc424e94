use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::model::ShoppingList;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::search::{
    SearchShoppingListsParams, SearchShoppingListsUseCase,
};

pub struct SearchShoppingListsUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchShoppingListsUseCase for SearchShoppingListsUseCaseImpl {
    async fn execute(
        &self,
        params: SearchShoppingListsParams,
    ) -> Result<Vec<ShoppingList>, ShoppingListError> {
        // Blank queries are rejected; others are matched as given, spaces included.
        let query = params
            .query
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .ok_or(ShoppingListError::QueryMissing)?;

        self.logger
            .info(&format!("Searching shopping lists for: {}", query));

        let lists = self.repository.search(query).await?;

        self.logger
            .info(&format!("Search matched {} shopping lists", lists.len()));
        Ok(lists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::EntityId;
    use mockall::mock;

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
    async fn should_forward_query_untouched_to_repository() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo
            .expect_search()
            .withf(|query: &str| query == " Alpha")
            .times(1)
            .returning(|_| {
                Ok(vec![ShoppingList::from_repository(
                    EntityId::generate(),
                    "List Alpha".to_string(),
                    None,
                    chrono::Utc::now(),
                )])
            });

        let use_case = SearchShoppingListsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchShoppingListsParams {
                query: Some(" Alpha".to_string()),
            })
            .await;

        let lists = result.unwrap();
        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].name, "List Alpha");
    }

    #[tokio::test]
    async fn should_return_empty_when_nothing_matches() {
        let mut mock_repo = MockShoppingListRepo::new();
        mock_repo.expect_search().returning(|_| Ok(vec![]));

        let use_case = SearchShoppingListsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchShoppingListsParams {
                query: Some("Gamma".to_string()),
            })
            .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_missing_or_blank_query() {
        for query in [None, Some("".to_string()), Some("   ".to_string())] {
            let mut mock_repo = MockShoppingListRepo::new();
            mock_repo.expect_search().never();

            let use_case = SearchShoppingListsUseCaseImpl {
                repository: Arc::new(mock_repo),
                logger: mock_logger(),
            };

            let result = use_case.execute(SearchShoppingListsParams { query }).await;

            assert!(matches!(
                result.unwrap_err(),
                ShoppingListError::QueryMissing
            ));
        }
    }
}
