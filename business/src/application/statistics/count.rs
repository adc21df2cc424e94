use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::shopping_list::repository::ShoppingListRepository;
use crate::domain::shopping_list_item::repository::ShoppingListItemRepository;
use crate::domain::statistics::errors::StatisticsError;
use crate::domain::statistics::model::StatisticKind;
use crate::domain::statistics::use_cases::count::CountStatisticUseCase;

pub struct CountStatisticUseCaseImpl {
    pub shopping_list_repository: Arc<dyn ShoppingListRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub shopping_list_item_repository: Arc<dyn ShoppingListItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CountStatisticUseCase for CountStatisticUseCaseImpl {
    async fn execute(&self, kind: StatisticKind) -> Result<u64, StatisticsError> {
        self.logger.debug(&format!("Counting statistic: {}", kind));

        let count = match kind {
            StatisticKind::TotalShoppingLists => self.shopping_list_repository.count().await?,
            StatisticKind::TotalItems => self.item_repository.count().await?,
            StatisticKind::PurchasedItems => {
                self.shopping_list_item_repository
                    .count_by_status(true)
                    .await?
            }
            StatisticKind::PendingItems => {
                self.shopping_list_item_repository
                    .count_by_status(false)
                    .await?
            }
        };

        self.logger.info(&format!("Statistic {} = {}", kind, count));
        Ok(count)
    }
}
