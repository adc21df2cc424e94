use sqlx::FromRow;

use business::domain::item::model::Item;
use business::domain::shared::value_objects::EntityId;

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl ItemEntity {
    pub fn into_domain(self) -> Item {
        Item::from_repository(EntityId::from_repository(self.id), self.name, self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_row_into_domain_item() {
        let entity = ItemEntity {
            id: "65a1f0c2e4b0a1b2c3d4e5f6".to_string(),
            name: "Carrots".to_string(),
            description: Some("Crunchy carrots".to_string()),
        };

        let item = entity.into_domain();

        assert_eq!(item.id.as_str(), "65a1f0c2e4b0a1b2c3d4e5f6");
        assert_eq!(item.name, "Carrots");
        assert_eq!(item.description.as_deref(), Some("Crunchy carrots"));
    }
}
