use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::shopping_list::model::ShoppingList;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShoppingListRequest {
    /// List name (required, cannot be blank)
    pub name: Option<String>,
    /// Optional free-text description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ShoppingListResponse {
    /// Shopping list unique identifier
    pub id: String,
    /// List name
    pub name: String,
    /// List description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Creation timestamp, never changes
    pub created_at: DateTime<Utc>,
}

impl From<ShoppingList> for ShoppingListResponse {
    fn from(list: ShoppingList) -> Self {
        Self {
            id: list.id.to_string(),
            name: list.name,
            description: list.description,
            created_at: list.created_at,
        }
    }
}
