use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::EntityId;

use super::errors::ShoppingListItemError;

/// Membership of one item in one shopping list.
///
/// `status == false` means the entry is still pending; `true` means purchased.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListItem {
    pub id: EntityId,
    pub shopping_list_id: EntityId,
    pub item_id: EntityId,
    pub quantity: i32,
    pub status: bool,
}

impl ShoppingListItem {
    pub fn new(
        shopping_list_id: EntityId,
        item_id: EntityId,
        quantity: i32,
    ) -> Result<Self, ShoppingListItemError> {
        validate_quantity(quantity)?;

        Ok(Self {
            id: EntityId::generate(),
            shopping_list_id,
            item_id,
            quantity,
            status: false,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: EntityId,
        shopping_list_id: EntityId,
        item_id: EntityId,
        quantity: i32,
        status: bool,
    ) -> Self {
        Self {
            id,
            shopping_list_id,
            item_id,
            quantity,
            status,
        }
    }

    pub fn is_pending(&self) -> bool {
        !self.status
    }
}

pub fn validate_quantity(quantity: i32) -> Result<(), ShoppingListItemError> {
    if quantity <= 0 {
        return Err(ShoppingListItemError::InvalidQuantity);
    }
    Ok(())
}

/// An entry with its item expanded. `item` is `None` when the referenced
/// item has been deleted since the entry was created.
#[derive(Debug, Clone, PartialEq)]
pub struct ShoppingListItemDetails {
    pub entry: ShoppingListItem,
    pub item: Option<Item>,
}
