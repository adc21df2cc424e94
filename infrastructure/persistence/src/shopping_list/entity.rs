use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::shared::value_objects::EntityId;
use business::domain::shopping_list::model::ShoppingList;

#[derive(Debug, FromRow)]
pub struct ShoppingListEntity {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ShoppingListEntity {
    pub fn into_domain(self) -> ShoppingList {
        ShoppingList::from_repository(
            EntityId::from_repository(self.id),
            self.name,
            self.description,
            self.created_at,
        )
    }
}
