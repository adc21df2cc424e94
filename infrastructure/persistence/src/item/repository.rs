use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;
use business::domain::shared::value_objects::EntityId;

use super::entity::ItemEntity;
use crate::db::query_error;

pub struct ItemRepositoryPostgres {
    pool: PgPool,
}

impl ItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Item>, RepositoryError> {
        let entities = sqlx::query_as::<_, ItemEntity>(
            "SELECT id, name, description FROM items ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: &EntityId) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(
            "SELECT id, name, description FROM items WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_ids(&self, ids: &[EntityId]) -> Result<Vec<Item>, RepositoryError> {
        let ids: Vec<String> = ids.iter().map(|id| id.as_str().to_string()).collect();
        let entities = sqlx::query_as::<_, ItemEntity>(
            "SELECT id, name, description FROM items WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, item: &Item) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO items (id, name, description)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description"#,
        )
        .bind(item.id.as_str())
        .bind(&item.name)
        .bind(&item.description)
        .execute(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(count as u64)
    }
}
