//! Tag repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use carnet_core::{Error, Result, Tag, TagInput, TagRepository};

/// PostgreSQL implementation of TagRepository.
pub struct PgTagRepository {
    pool: Pool<Postgres>,
}

impl PgTagRepository {
    /// Create a new PgTagRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for PgTagRepository {
    async fn create(&self, input: TagInput) -> Result<Tag> {
        let tag =
            sqlx::query_as::<_, Tag>("INSERT INTO tag (name) VALUES ($1) RETURNING id, name")
                .bind(&input.name)
                .fetch_one(&self.pool)
                .await
                .map_err(Error::Database)?;

        Ok(tag)
    }

    async fn update(&self, id: i32, input: TagInput) -> Result<Tag> {
        let tag = sqlx::query_as::<_, Tag>(
            "UPDATE tag SET name = $2 WHERE id = $1 RETURNING id, name",
        )
        .bind(id)
        .bind(&input.name)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?
        .ok_or_else(|| Error::NotFound(format!("Tag {}", id)))?;

        Ok(tag)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM tag WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Tag {}", id)));
        }
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tag WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(exists)
    }
}
