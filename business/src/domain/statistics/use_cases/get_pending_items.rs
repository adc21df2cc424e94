use async_trait::async_trait;

use crate::domain::statistics::errors::StatisticsError;
use crate::domain::statistics::model::PendingItemSummary;

#[async_trait]
pub trait GetPendingItemsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PendingItemSummary>, StatisticsError>;
}
