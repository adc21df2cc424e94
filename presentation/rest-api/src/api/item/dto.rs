use poem_openapi::Object;

use business::domain::item::model::Item;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ItemRequest {
    /// Item name (required, cannot be blank)
    pub name: Option<String>,
    /// Optional free-text description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ItemResponse {
    /// Item unique identifier
    pub id: String,
    /// Item name
    pub name: String,
    /// Item description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name,
            description: item.description,
        }
    }
}
