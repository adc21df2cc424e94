use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::statistics::errors::StatisticsError;

use crate::api::error::{ErrorResponse, INTERNAL_ERROR, IntoErrorResponse};

impl IntoErrorResponse for StatisticsError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            StatisticsError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("InternalError", INTERNAL_ERROR)),
            ),
        }
    }
}
