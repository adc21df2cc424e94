use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopping_list_item::errors::ShoppingListItemError;

use crate::api::error::{ErrorResponse, INTERNAL_ERROR, IntoErrorResponse};

impl IntoErrorResponse for ShoppingListItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ShoppingListItemError::InvalidQuantity => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "Quantity must be greater than zero",
            ),
            ShoppingListItemError::AlreadyExists => (
                StatusCode::BAD_REQUEST,
                "Conflict",
                "Item already exists in the shopping list",
            ),
            ShoppingListItemError::ShoppingListNotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "Shopping List not found",
            ),
            ShoppingListItemError::ItemNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "Item not found")
            }
            ShoppingListItemError::NotFound => (
                StatusCode::NOT_FOUND,
                "NotFound",
                "Item not found in the shopping list",
            ),
            ShoppingListItemError::Repository(_) => (
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
    fn should_report_duplicate_pair_as_400_conflict() {
        let (status, Json(body)) = ShoppingListItemError::AlreadyExists.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.name, "Conflict");
        assert_eq!(body.message, "Item already exists in the shopping list");
    }

    #[test]
    fn should_map_missing_entry_to_404() {
        let (status, Json(body)) = ShoppingListItemError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message, "Item not found in the shopping list");
    }

    #[test]
    fn should_map_invalid_quantity_to_400() {
        let (status, Json(body)) = ShoppingListItemError::InvalidQuantity.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.message, "Quantity must be greater than zero");
    }
}
