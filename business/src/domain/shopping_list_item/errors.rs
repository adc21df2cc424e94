#[derive(Debug, thiserror::Error)]
pub enum ShoppingListItemError {
    #[error("shopping_list_item.shopping_list_not_found")]
    ShoppingListNotFound,
    #[error("shopping_list_item.item_not_found")]
    ItemNotFound,
    #[error("shopping_list_item.not_found")]
    NotFound,
    #[error("shopping_list_item.already_exists")]
    AlreadyExists,
    #[error("shopping_list_item.invalid_quantity")]
    InvalidQuantity,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
