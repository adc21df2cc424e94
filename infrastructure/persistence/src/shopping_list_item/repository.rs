use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::EntityId;
use business::domain::shopping_list_item::model::ShoppingListItem;
use business::domain::shopping_list_item::repository::ShoppingListItemRepository;

use super::entity::ShoppingListItemEntity;
use crate::db::{query_error, write_error};

const COLUMNS: &str = "id, shopping_list_id, item_id, quantity, status";

pub struct ShoppingListItemRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingListItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingListItemRepository for ShoppingListItemRepositoryPostgres {
    async fn find_entry(
        &self,
        shopping_list_id: &EntityId,
        item_id: &EntityId,
    ) -> Result<Option<ShoppingListItem>, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingListItemEntity>(&format!(
            "SELECT {COLUMNS} FROM shopping_list_items WHERE shopping_list_id = $1 AND item_id = $2"
        ))
        .bind(shopping_list_id.as_str())
        .bind(item_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_by_shopping_list(
        &self,
        shopping_list_id: &EntityId,
    ) -> Result<Vec<ShoppingListItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingListItemEntity>(&format!(
            "SELECT {COLUMNS} FROM shopping_list_items WHERE shopping_list_id = $1 ORDER BY id"
        ))
        .bind(shopping_list_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_item(
        &self,
        item_id: &EntityId,
    ) -> Result<Vec<ShoppingListItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingListItemEntity>(&format!(
            "SELECT {COLUMNS} FROM shopping_list_items WHERE item_id = $1 ORDER BY id"
        ))
        .bind(item_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_status(&self, status: bool) -> Result<Vec<ShoppingListItem>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingListItemEntity>(&format!(
            "SELECT {COLUMNS} FROM shopping_list_items WHERE status = $1 ORDER BY id"
        ))
        .bind(status)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn count_by_status(&self, status: bool) -> Result<u64, RepositoryError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM shopping_list_items WHERE status = $1")
                .bind(status)
                .fetch_one(&self.pool)
                .await
                .map_err(query_error)?;

        Ok(count as u64)
    }

    async fn save(&self, entry: &ShoppingListItem) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO shopping_list_items (id, shopping_list_id, item_id, quantity, status)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (id) DO UPDATE SET
                quantity = EXCLUDED.quantity,
                status = EXCLUDED.status"#,
        )
        .bind(entry.id.as_str())
        .bind(entry.shopping_list_id.as_str())
        .bind(entry.item_id.as_str())
        .bind(entry.quantity)
        .bind(entry.status)
        .execute(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM shopping_list_items WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(shopping_list_id: &EntityId, quantity: i32, status: bool) -> ShoppingListItem {
        let item_id = EntityId::generate();
        let mut entry = ShoppingListItem::new(shopping_list_id.clone(), item_id, quantity).unwrap();
        entry.status = status;
        entry
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn should_split_total_between_statuses(pool: PgPool) {
        let repository = ShoppingListItemRepositoryPostgres::new(pool.clone());
        let list_id = EntityId::generate();
        for (quantity, status) in [(1, false), (2, true), (3, false), (4, false)] {
            repository.save(&entry(&list_id, quantity, status)).await.unwrap();
        }

        let purchased = repository.count_by_status(true).await.unwrap();
        let pending = repository.count_by_status(false).await.unwrap();
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shopping_list_items")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert_eq!(purchased, 1);
        assert_eq!(pending, 3);
        assert_eq!(purchased + pending, total as u64);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn should_report_duplicated_pair(pool: PgPool) {
        let repository = ShoppingListItemRepositoryPostgres::new(pool);
        let list_id = EntityId::generate();
        let first = entry(&list_id, 1, false);
        repository.save(&first).await.unwrap();

        let second = ShoppingListItem::new(list_id.clone(), first.item_id.clone(), 5).unwrap();
        let result = repository.save(&second).await;

        assert!(matches!(result, Err(RepositoryError::Duplicated)));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn should_update_existing_entry_in_place(pool: PgPool) {
        let repository = ShoppingListItemRepositoryPostgres::new(pool);
        let list_id = EntityId::generate();
        let mut stored = entry(&list_id, 1, false);
        repository.save(&stored).await.unwrap();

        stored.quantity = 7;
        stored.status = true;
        repository.save(&stored).await.unwrap();

        let found = repository
            .find_entry(&list_id, &stored.item_id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, stored);
        assert_eq!(repository.find_by_shopping_list(&list_id).await.unwrap().len(), 1);
    }
}
