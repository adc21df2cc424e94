use std::collections::{HashMap, HashSet};

use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::EntityId;
use crate::domain::shopping_list_item::model::ShoppingListItem;

use super::model::PendingItemSummary;

/// Distinct item ids referenced by pending entries, in first-seen order.
pub fn pending_item_ids(entries: &[ShoppingListItem]) -> Vec<EntityId> {
    let mut seen = HashSet::new();
    let mut ids = Vec::new();
    for entry in entries.iter().filter(|e| e.is_pending()) {
        if seen.insert(&entry.item_id) {
            ids.push(entry.item_id.clone());
        }
    }
    ids
}

/// Sums pending quantities per item and resolves item names.
///
/// Groups whose item is missing from `items` are dropped (inner join), so a
/// dangling `item_id` never reaches the output. The result is sorted by
/// `total_quantity` descending; equal totals keep first-seen order.
pub fn group_pending_by_item(
    entries: &[ShoppingListItem],
    items: &[Item],
) -> Vec<PendingItemSummary> {
    let mut index: HashMap<&EntityId, usize> = HashMap::new();
    let mut totals: Vec<(&EntityId, i64)> = Vec::new();

    for entry in entries.iter().filter(|e| e.is_pending()) {
        match index.get(&entry.item_id) {
            Some(&position) => totals[position].1 += i64::from(entry.quantity),
            None => {
                index.insert(&entry.item_id, totals.len());
                totals.push((&entry.item_id, i64::from(entry.quantity)));
            }
        }
    }

    let names: HashMap<&EntityId, &str> = items
        .iter()
        .map(|item| (&item.id, item.name.as_str()))
        .collect();

    let mut summaries: Vec<PendingItemSummary> = totals
        .into_iter()
        .filter_map(|(item_id, total_quantity)| {
            names.get(item_id).map(|name| PendingItemSummary {
                item_id: item_id.clone(),
                item_name: name.to_string(),
                total_quantity,
            })
        })
        .collect();

    summaries.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
    summaries
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn id(n: u32) -> EntityId {
        EntityId::from_repository(format!("{:024x}", n))
    }

    fn entry(list: u32, item: u32, quantity: i32, status: bool) -> ShoppingListItem {
        ShoppingListItem::from_repository(
            EntityId::generate(),
            id(list),
            id(item),
            quantity,
            status,
        )
    }

    fn item(n: u32, name: &str) -> Item {
        Item::from_repository(id(n), name.to_string(), None)
    }

    #[test]
    fn should_sum_quantities_across_lists() {
        let entries = vec![entry(1, 10, 5, false), entry(2, 10, 3, false)];
        let items = vec![item(10, "Milk")];

        let result = group_pending_by_item(&entries, &items);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].item_id, id(10));
        assert_eq!(result[0].item_name, "Milk");
        assert_eq!(result[0].total_quantity, 8);
    }

    #[test]
    fn should_ignore_purchased_entries() {
        let entries = vec![entry(1, 10, 5, false), entry(2, 10, 7, true)];
        let items = vec![item(10, "Milk")];

        let result = group_pending_by_item(&entries, &items);

        assert_eq!(result[0].total_quantity, 5);
    }

    #[test]
    fn should_drop_groups_with_dangling_item() {
        let entries = vec![entry(1, 10, 5, false), entry(1, 99, 50, false)];
        let items = vec![item(10, "Milk")];

        let result = group_pending_by_item(&entries, &items);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].item_id, id(10));
    }

    #[test]
    fn should_sort_by_total_descending() {
        let entries = vec![
            entry(1, 10, 1, false),
            entry(1, 11, 9, false),
            entry(2, 12, 4, false),
            entry(3, 10, 2, false),
        ];
        let items = vec![item(10, "Milk"), item(11, "Eggs"), item(12, "Bread")];

        let result = group_pending_by_item(&entries, &items);

        let names: Vec<&str> = result.iter().map(|s| s.item_name.as_str()).collect();
        assert_eq!(names, vec!["Eggs", "Bread", "Milk"]);
    }

    #[test]
    fn should_keep_first_seen_order_on_ties() {
        let entries = vec![entry(1, 12, 4, false), entry(1, 10, 4, false)];
        let items = vec![item(10, "Milk"), item(12, "Bread")];

        let result = group_pending_by_item(&entries, &items);

        assert_eq!(result[0].item_name, "Bread");
        assert_eq!(result[1].item_name, "Milk");
    }

    #[test]
    fn should_return_empty_when_nothing_pending() {
        let entries = vec![entry(1, 10, 5, true)];
        let items = vec![item(10, "Milk")];

        assert!(group_pending_by_item(&entries, &items).is_empty());
        assert!(group_pending_by_item(&[], &items).is_empty());
    }

    #[test]
    fn should_collect_distinct_pending_item_ids() {
        let entries = vec![
            entry(1, 10, 1, false),
            entry(2, 11, 1, true),
            entry(2, 10, 1, false),
            entry(3, 12, 1, false),
        ];

        assert_eq!(pending_item_ids(&entries), vec![id(10), id(12)]);
    }

    proptest! {
        #[test]
        fn aggregate_preserves_resolvable_pending_totals(
            raw in prop::collection::vec((0u32..6, 1i32..1000, any::<bool>()), 0..40),
            known in prop::collection::vec(any::<bool>(), 6),
        ) {
            let entries: Vec<ShoppingListItem> = raw
                .iter()
                .enumerate()
                .map(|(n, (item_n, quantity, status))| entry(n as u32, *item_n, *quantity, *status))
                .collect();
            let items: Vec<Item> = known
                .iter()
                .enumerate()
                .filter(|(_, exists)| **exists)
                .map(|(n, _)| item(n as u32, &format!("item-{n}")))
                .collect();

            let result = group_pending_by_item(&entries, &items);

            let expected: i64 = raw
                .iter()
                .filter(|(item_n, _, status)| !status && known[*item_n as usize])
                .map(|(_, quantity, _)| i64::from(*quantity))
                .sum();
            let actual: i64 = result.iter().map(|s| s.total_quantity).sum();
            prop_assert_eq!(actual, expected);

            prop_assert!(result.len() <= pending_item_ids(&entries).len());
            prop_assert!(result
                .windows(2)
                .all(|pair| pair[0].total_quantity >= pair[1].total_quantity));
        }
    }
}
