use async_trait::async_trait;

use super::errors::SupermarketError;
use super::model::{Coordinates, Supermarket};

/// Service port for the external map-data lookup.
#[async_trait]
pub trait SupermarketFinderService: Send + Sync {
    async fn find_nearby(
        &self,
        location: Coordinates,
        radius_meters: u32,
    ) -> Result<Vec<Supermarket>, SupermarketError>;
}
