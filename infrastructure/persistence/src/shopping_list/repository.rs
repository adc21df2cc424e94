use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::EntityId;
use business::domain::shopping_list::model::ShoppingList;
use business::domain::shopping_list::repository::ShoppingListRepository;

use super::entity::ShoppingListEntity;
use crate::db::query_error;

pub struct ShoppingListRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingListRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingListRepository for ShoppingListRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<ShoppingList>, RepositoryError> {
        let entities = sqlx::query_as::<_, ShoppingListEntity>(
            "SELECT id, name, description, created_at FROM shopping_lists ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: &EntityId) -> Result<ShoppingList, RepositoryError> {
        let entity = sqlx::query_as::<_, ShoppingListEntity>(
            "SELECT id, name, description, created_at FROM shopping_lists WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(query_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn find_by_ids(&self, ids: &[EntityId]) -> Result<Vec<ShoppingList>, RepositoryError> {
        let ids: Vec<String> = ids.iter().map(|id| id.as_str().to_string()).collect();
        let entities = sqlx::query_as::<_, ShoppingListEntity>(
            "SELECT id, name, description, created_at FROM shopping_lists WHERE id = ANY($1) ORDER BY id",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn search(&self, query: &str) -> Result<Vec<ShoppingList>, RepositoryError> {
        // strpos keeps the query literal, unlike LIKE patterns
        let entities = sqlx::query_as::<_, ShoppingListEntity>(
            r#"SELECT id, name, description, created_at FROM shopping_lists
            WHERE strpos(lower(name), lower($1)) > 0
               OR strpos(lower(coalesce(description, '')), lower($1)) > 0
            ORDER BY id"#,
        )
        .bind(query)
        .fetch_all(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn save(&self, list: &ShoppingList) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO shopping_lists (id, name, description, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description"#,
        )
        .bind(list.id.as_str())
        .bind(&list.name)
        .bind(&list.description)
        .bind(list.created_at)
        .execute(&self.pool)
        .await
        .map_err(query_error)?;

        Ok(())
    }

    async fn delete(&self, id: &EntityId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM shopping_lists WHERE id = $1")
            .bind(id.as_str())
            .execute(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shopping_lists")
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)?;

        Ok(count as u64)
    }
}
