use sqlx::PgPool;
use thiserror::Error;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;
use business::domain::shopping_list::model::ShoppingList;
use business::domain::shopping_list::repository::ShoppingListRepository;
use business::domain::shopping_list_item::model::ShoppingListItem;
use business::domain::shopping_list_item::repository::ShoppingListItemRepository;

use crate::item::repository::ItemRepositoryPostgres;
use crate::shopping_list::repository::ShoppingListRepositoryPostgres;
use crate::shopping_list_item::repository::ShoppingListItemRepositoryPostgres;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("seed.clear_failed")]
    ClearFailed(#[source] sqlx::Error),
    #[error("seed.invalid_fixture: {0}")]
    InvalidFixture(String),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

const ITEMS: [(&str, &str); 10] = [
    ("Apples", "Fresh red apples"),
    ("Bananas", "Ripe bananas"),
    ("Carrots", "Crunchy carrots"),
    ("Bread", "Whole grain bread"),
    ("Milk", "1-liter organic milk"),
    ("Eggs", "Free-range eggs, pack of 12"),
    ("Chicken", "Fresh chicken breast"),
    ("Rice", "Basmati rice, 5kg bag"),
    ("Tomatoes", "Juicy tomatoes"),
    ("Potatoes", "Starchy potatoes, 3kg bag"),
];

const SHOPPING_LISTS: [(&str, &str); 5] = [
    ("Weekly Groceries", "Groceries for the week"),
    ("Party Supplies", "Items for the birthday party"),
    ("Camping Trip", "Essentials for camping trip"),
    ("Holiday Feast", "Special items for holiday dinner"),
    ("Quick Snacks", "Snacks and beverages for guests"),
];

/// (shopping list index, item index, quantity, purchased)
const ENTRIES: [(usize, usize, i32, bool); 10] = [
    (0, 0, 5, false),
    (0, 1, 10, true),
    (0, 2, 3, false),
    (1, 3, 2, false),
    (1, 4, 6, false),
    (2, 5, 12, true),
    (2, 6, 4, false),
    (3, 7, 1, false),
    (3, 8, 8, false),
    (4, 9, 15, true),
];

/// Summary of what [`seed_database`] inserted.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub items: usize,
    pub shopping_lists: usize,
    pub entries: usize,
}

/// Clears all three tables and loads the sample data set.
pub async fn seed_database(pool: &PgPool) -> Result<SeedReport, SeedError> {
    sqlx::query("TRUNCATE shopping_list_items, shopping_lists, items")
        .execute(pool)
        .await
        .map_err(SeedError::ClearFailed)?;
    tracing::info!("Cleared existing data");

    let item_repository = ItemRepositoryPostgres::new(pool.clone());
    let shopping_list_repository = ShoppingListRepositoryPostgres::new(pool.clone());
    let entry_repository = ShoppingListItemRepositoryPostgres::new(pool.clone());

    let items = sample_items()?;
    for item in &items {
        item_repository.save(item).await?;
    }
    tracing::info!(count = items.len(), "Inserted items");

    let shopping_lists = sample_shopping_lists()?;
    for list in &shopping_lists {
        shopping_list_repository.save(list).await?;
    }
    tracing::info!(count = shopping_lists.len(), "Inserted shopping lists");

    let entries = sample_entries(&shopping_lists, &items)?;
    for entry in &entries {
        entry_repository.save(entry).await?;
    }
    tracing::info!(count = entries.len(), "Inserted shopping list items");

    Ok(SeedReport {
        items: items.len(),
        shopping_lists: shopping_lists.len(),
        entries: entries.len(),
    })
}

fn sample_items() -> Result<Vec<Item>, SeedError> {
    ITEMS
        .iter()
        .map(|(name, description)| {
            Item::new(name.to_string(), Some(description.to_string()))
                .map_err(|e| SeedError::InvalidFixture(e.to_string()))
        })
        .collect()
}

fn sample_shopping_lists() -> Result<Vec<ShoppingList>, SeedError> {
    SHOPPING_LISTS
        .iter()
        .map(|(name, description)| {
            ShoppingList::new(name.to_string(), Some(description.to_string()))
                .map_err(|e| SeedError::InvalidFixture(e.to_string()))
        })
        .collect()
}

fn sample_entries(
    shopping_lists: &[ShoppingList],
    items: &[Item],
) -> Result<Vec<ShoppingListItem>, SeedError> {
    ENTRIES
        .iter()
        .map(|&(list_index, item_index, quantity, purchased)| {
            let list = shopping_lists.get(list_index).ok_or_else(|| {
                SeedError::InvalidFixture(format!("shopping list index {list_index}"))
            })?;
            let item = items
                .get(item_index)
                .ok_or_else(|| SeedError::InvalidFixture(format!("item index {item_index}")))?;

            let mut entry = ShoppingListItem::new(list.id.clone(), item.id.clone(), quantity)
                .map_err(|e| SeedError::InvalidFixture(e.to_string()))?;
            entry.status = purchased;
            Ok(entry)
        })
        .collect()
}
