use crate::domain::shared::value_objects::EntityId;

use super::errors::ItemError;

/// A catalog entry that can be added to any number of shopping lists.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
}

impl Item {
    pub fn new(name: String, description: Option<String>) -> Result<Self, ItemError> {
        if name.trim().is_empty() {
            return Err(ItemError::NameEmpty);
        }

        Ok(Self {
            id: EntityId::generate(),
            name,
            description,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: EntityId, name: String, description: Option<String>) -> Self {
        Self {
            id,
            name,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_item_when_name_valid() {
        let result = Item::new("Apples".to_string(), Some("Fresh red apples".to_string()));

        assert!(result.is_ok());
        let item = result.unwrap();
        assert_eq!(item.name, "Apples");
        assert_eq!(item.description.as_deref(), Some("Fresh red apples"));
    }

    #[test]
    fn should_create_item_without_description() {
        let item = Item::new("Bread".to_string(), None).unwrap();

        assert!(item.description.is_none());
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = Item::new("".to_string(), None);

        assert!(matches!(result.unwrap_err(), ItemError::NameEmpty));
    }

    #[test]
    fn should_reject_when_name_only_whitespace() {
        let result = Item::new("   ".to_string(), None);

        assert!(matches!(result.unwrap_err(), ItemError::NameEmpty));
    }
}
