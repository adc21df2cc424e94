use async_trait::async_trait;

use crate::domain::supermarket::errors::SupermarketError;
use crate::domain::supermarket::model::Supermarket;

/// Raw query input; `location` is `"latitude,longitude"`.
pub struct FindNearbySupermarketsParams {
    pub location: Option<String>,
    pub radius_meters: Option<u32>,
}

#[async_trait]
pub trait FindNearbySupermarketsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: FindNearbySupermarketsParams,
    ) -> Result<Vec<Supermarket>, SupermarketError>;
}
