use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::errors::ShoppingListError;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list::use_cases::delete::{
    DeleteShoppingListParams, DeleteShoppingListUseCase,
};

/// Deletes the list only; its entries are not cascaded.
pub struct DeleteShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteShoppingListUseCase for DeleteShoppingListUseCaseImpl {
    async fn execute(&self, params: DeleteShoppingListParams) -> Result<(), ShoppingListError> {
        self.logger
            .info(&format!("Deleting shopping list: {}", params.id));

        self.repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ShoppingListError::NotFound,
                other => ShoppingListError::Repository(other),
            })?;

        self.repository.delete(&params.id).await?;

        self.logger
            .info(&format!("Shopping list deleted: {}", params.id));
        Ok(())
    }
}
