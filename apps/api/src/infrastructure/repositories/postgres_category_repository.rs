use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::category::{Category, CategoryFields};
use crate::domain::repositories::{CategoryRepository, RepositoryError, RepositoryResult};

/// PostgreSQL implementation of CategoryRepository
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    /// Creates a new PostgresCategoryRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_all(&self, limit: i64) -> RepositoryResult<Vec<Category>> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, title, description, image, created_at, updated_at
            FROM categories
            ORDER BY id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Category>> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, title, description, image, created_at, updated_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(category)
    }

    async fn create(&self, fields: &CategoryFields) -> RepositoryResult<Category> {
        sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (title, description, image)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, image, created_at, updated_at
            "#,
        )
        .bind(fields.title())
        .bind(fields.description())
        .bind(fields.image())
        .fetch_one(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)
    }

    async fn update(&self, id: i64, fields: &CategoryFields) -> RepositoryResult<Option<Category>> {
        sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET title = $2, description = $3, image = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, description, image, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(fields.title())
        .bind(fields.description())
        .bind(fields.image())
        .fetch_optional(&self.pool)
        .await
        .map_err(RepositoryError::from_sqlx)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, rows = result.rows_affected(), "deleted category");

        Ok(())
    }
}
