use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, INTERNAL_ERROR, IntoErrorResponse};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ItemError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Name is required",
            ),
            ItemError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "Item not found"),
            ItemError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                INTERNAL_ERROR,
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
