use crate::domain::shared::value_objects::EntityId;

/// A single counter exposed by the statistics endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticKind {
    TotalShoppingLists,
    TotalItems,
    PurchasedItems,
    PendingItems,
}

impl std::fmt::Display for StatisticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatisticKind::TotalShoppingLists => write!(f, "totalShoppingLists"),
            StatisticKind::TotalItems => write!(f, "totalItems"),
            StatisticKind::PurchasedItems => write!(f, "purchasedItems"),
            StatisticKind::PendingItems => write!(f, "pendingItems"),
        }
    }
}

/// Pending quantity of one item summed across every shopping list.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingItemSummary {
    pub item_id: EntityId,
    pub item_name: String,
    pub total_quantity: i64,
}
