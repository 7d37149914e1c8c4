use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::pickme::{CategoryFilter, Pickme, PickmeFields};
use crate::domain::repositories::{PickmeRepository, RepositoryError, RepositoryResult};

/// PostgreSQL implementation of PickmeRepository
pub struct PostgresPickmeRepository {
    pool: PgPool,
}

impl PostgresPickmeRepository {
    /// Creates a new PostgresPickmeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PickmeRepository for PostgresPickmeRepository {
    async fn find_all(&self, filter: CategoryFilter, limit: i64) -> RepositoryResult<Vec<Pickme>> {
        let category_id = match filter {
            CategoryFilter::All => None,
            CategoryFilter::Only(id) => Some(id),
        };

        let pickmes = sqlx::query_as::<_, Pickme>(
            r#"
            SELECT id, name, description, image, category_id, created_at, updated_at
            FROM pickmes
            WHERE $1::BIGINT IS NULL OR category_id = $1
            ORDER BY id
            LIMIT $2
            "#,
        )
        .bind(category_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(pickmes)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Pickme>> {
        let pickme = sqlx::query_as::<_, Pickme>(
            r#"
            SELECT id, name, description, image, category_id, created_at, updated_at
            FROM pickmes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(pickme)
    }

    async fn create(&self, fields: &PickmeFields) -> RepositoryResult<Pickme> {
        sqlx::query_as::<_, Pickme>(
            r#"
            INSERT INTO pickmes (name, description, image, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, description, image, category_id, created_at, updated_at
            "#,
        )
        .bind(fields.name())
        .bind(fields.description())
        .bind(fields.image())
        .bind(fields.category_id())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)
    }

    async fn update(&self, id: i64, fields: &PickmeFields) -> RepositoryResult<Option<Pickme>> {
        sqlx::query_as::<_, Pickme>(
            r#"
            UPDATE pickmes
            SET name = $2, description = $3, image = $4, category_id = $5, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, description, image, category_id, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(fields.name())
        .bind(fields.description())
        .bind(fields.image())
        .bind(fields.category_id())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM pickmes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, rows = result.rows_affected(), "deleted pickme");

        Ok(())
    }
}
