use sqlx::FromRow;

use business::domain::shared::value_objects::EntityId;
use business::domain::shopping_list_item::model::ShoppingListItem;

#[derive(Debug, FromRow)]
pub struct ShoppingListItemEntity {
    pub id: String,
    pub shopping_list_id: String,
    pub item_id: String,
    pub quantity: i32,
    pub status: bool,
}

impl ShoppingListItemEntity {
    pub fn into_domain(self) -> ShoppingListItem {
        ShoppingListItem::from_repository(
            EntityId::from_repository(self.id),
            EntityId::from_repository(self.shopping_list_id),
            EntityId::from_repository(self.item_id),
            self.quantity,
            self.status,
        )
    }
}
