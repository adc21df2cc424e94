use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_list::errors::ShoppingListError;

use crate::api::error::{ErrorResponse, INTERNAL_ERROR, IntoErrorResponse};

impl IntoErrorResponse for ShoppingListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ShoppingListError::NameEmpty => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Name is required",
            ),
            ShoppingListError::QueryMissing => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Query parameter is required",
            ),
            ShoppingListError::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "Shopping List not found",
            ),
            ShoppingListError::ItemNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "Item not found")
            }
            ShoppingListError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                INTERNAL_ERROR,
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_missing_query_to_400() {
        let (status, Json(body)) = ShoppingListError::QueryMissing.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Query parameter is required");
    }

    #[test]
    fn should_distinguish_list_and_item_not_found() {
        let (list_status, Json(list_body)) = ShoppingListError::NotFound.into_error_response();
        let (item_status, Json(item_body)) =
            ShoppingListError::ItemNotFound.into_error_response();

        assert_eq!(list_status, StatusCode::NOT_FOUND);
        assert_eq!(item_status, StatusCode::NOT_FOUND);
        assert_eq!(list_body.message, "Shopping List not found");
        assert_eq!(item_body.message, "Item not found");
    }
}
