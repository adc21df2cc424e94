use async_trait::async_trait;

use crate::domain::statistics::errors::StatisticsError;
use crate::domain::statistics::model::StatisticKind;

#[async_trait]
pub trait CountStatisticUseCase: Send + Sync {
    async fn execute(&self, kind: StatisticKind) -> Result<u64, StatisticsError>;
}
