use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::EntityId;

use super::errors::ShoppingListError;

#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingList {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ShoppingList {
    pub fn new(name: String, description: Option<String>) -> Result<Self, ShoppingListError> {
        if name.trim().is_empty() {
            return Err(ShoppingListError::NameEmpty);
        }

        Ok(Self {
            id: EntityId::generate(),
            name,
            description,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: EntityId,
        name: String,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
        }
    }
}
