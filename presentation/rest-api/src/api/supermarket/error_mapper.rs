use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::supermarket::errors::SupermarketError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

const LOCATION_REQUIRED: &str = "Please provide the location coordinates (latitude,longitude).";

impl IntoErrorResponse for SupermarketError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            SupermarketError::LocationMissing | SupermarketError::InvalidLocation => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                LOCATION_REQUIRED,
            ),
            SupermarketError::UpstreamFailure => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "UpstreamError",
                "Unable to fetch supermarket list.",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
