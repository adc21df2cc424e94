#[derive(Debug, thiserror::Error)]
pub enum SupermarketError {
    #[error("supermarket.location_missing")]
    LocationMissing,
    #[error("supermarket.invalid_location")]
    InvalidLocation,
    #[error("supermarket.upstream_failure")]
    UpstreamFailure,
}
