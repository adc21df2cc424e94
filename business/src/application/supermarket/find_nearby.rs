use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::supermarket::errors::SupermarketError;
use crate::domain::supermarket::model::{Coordinates, DEFAULT_RADIUS_METERS, Supermarket};
use crate::domain::supermarket::services::SupermarketFinderService;
use crate::domain::supermarket::use_cases::find_nearby::{
    FindNearbySupermarketsParams, FindNearbySupermarketsUseCase,
};

pub struct FindNearbySupermarketsUseCaseImpl {
    pub finder: Arc<dyn SupermarketFinderService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl FindNearbySupermarketsUseCase for FindNearbySupermarketsUseCaseImpl {
    async fn execute(
        &self,
        params: FindNearbySupermarketsParams,
    ) -> Result<Vec<Supermarket>, SupermarketError> {
        let raw_location = params
            .location
            .filter(|l| !l.trim().is_empty())
            .ok_or(SupermarketError::LocationMissing)?;
        let location: Coordinates = raw_location.parse()?;
        let radius = params.radius_meters.unwrap_or(DEFAULT_RADIUS_METERS);

        self.logger.info(&format!(
            "Looking up supermarkets within {}m of {},{}",
            radius, location.latitude, location.longitude
        ));

        let supermarkets = self
            .finder
            .find_nearby(location, radius)
            .await
            .inspect_err(|e| {
                self.logger
                    .error(&format!("Supermarket lookup failed: {}", e))
            })?;

        self.logger
            .info(&format!("Found {} nearby supermarkets", supermarkets.len()));
        Ok(supermarkets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;

    mock! {
        pub Finder {}

        #[async_trait]
        impl SupermarketFinderService for Finder {
            async fn find_nearby(&self, location: Coordinates, radius_meters: u32) -> Result<Vec<Supermarket>, SupermarketError>;
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
    fn supermarket(name: &str) -> Supermarket {
        Supermarket {
            name: name.to_string(),
            address: "No address information available".to_string(),
            latitude: 40.41,
            longitude: -3.70,
        }
    }

    #[tokio::test]
    async fn should_use_default_radius_when_absent() {
        let mut finder = MockFinder::new();
        finder
            .expect_find_nearby()
            .withf(|location: &Coordinates, radius: &u32| {
                location.latitude == 40.4168
                    && location.longitude == -3.7038
                    && *radius == DEFAULT_RADIUS_METERS
            })
            .times(1)
            .returning(|_, _| Ok(vec![supermarket("Mercado Central")]));

        let use_case = FindNearbySupermarketsUseCaseImpl {
            finder: Arc::new(finder),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(FindNearbySupermarketsParams {
                location: Some("40.4168,-3.7038".to_string()),
                radius_meters: None,
            })
            .await;

        let supermarkets = result.unwrap();
        assert_eq!(supermarkets.len(), 1);
        assert_eq!(supermarkets[0].name, "Mercado Central");
    }

    #[tokio::test]
    async fn should_forward_explicit_radius() {
        let mut finder = MockFinder::new();
        finder
            .expect_find_nearby()
            .withf(|_, radius: &u32| *radius == 1500)
            .returning(|_, _| Ok(vec![]));

        let use_case = FindNearbySupermarketsUseCaseImpl {
            finder: Arc::new(finder),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(FindNearbySupermarketsParams {
                location: Some("51.5,-0.12".to_string()),
                radius_meters: Some(1500),
            })
            .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_missing_location() {
        let mut finder = MockFinder::new();
        finder.expect_find_nearby().never();

        let use_case = FindNearbySupermarketsUseCaseImpl {
            finder: Arc::new(finder),
            logger: mock_logger(),
        };

        for location in [None, Some("".to_string())] {
            let result = use_case
                .execute(FindNearbySupermarketsParams {
                    location,
                    radius_meters: None,
                })
                .await;

            assert!(matches!(
                result.unwrap_err(),
                SupermarketError::LocationMissing
            ));
        }
    }

    #[tokio::test]
    async fn should_reject_unparseable_location() {
        let use_case = FindNearbySupermarketsUseCaseImpl {
            finder: Arc::new(MockFinder::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(FindNearbySupermarketsParams {
                location: Some("somewhere".to_string()),
                radius_meters: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            SupermarketError::InvalidLocation
        ));
    }

    #[tokio::test]
    async fn should_propagate_upstream_failure() {
        let mut finder = MockFinder::new();
        finder
            .expect_find_nearby()
            .returning(|_, _| Err(SupermarketError::UpstreamFailure));

        let use_case = FindNearbySupermarketsUseCaseImpl {
            finder: Arc::new(finder),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(FindNearbySupermarketsParams {
                location: Some("40.4168,-3.7038".to_string()),
                radius_meters: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            SupermarketError::UpstreamFailure
        ));
    }
}
