use poem_openapi::Object;

use business::domain::statistics::model::PendingItemSummary;

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct TotalShoppingListsResponse {
    pub total_shopping_lists: u64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct TotalItemsResponse {
    pub total_items: u64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PurchasedItemsResponse {
    pub purchased_items: u64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PendingItemsCountResponse {
    pub pending_items: u64,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PendingItemResponse {
    pub item_id: String,
    pub item_name: String,
    /// Pending quantity summed across every shopping list
    pub total_quantity: i64,
}

impl From<PendingItemSummary> for PendingItemResponse {
    fn from(summary: PendingItemSummary) -> Self {
        Self {
            item_id: summary.item_id.to_string(),
            item_name: summary.item_name,
            total_quantity: summary.total_quantity,
        }
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct PendingItemsListResponse {
    /// Sorted by total quantity, largest first
    pub pending_items: Vec<PendingItemResponse>,
}
