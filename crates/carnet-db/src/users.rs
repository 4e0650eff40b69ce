//! User repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use carnet_core::{Error, Result, User, UserInput, UserRepository};

/// PostgreSQL implementation of UserRepository.
///
/// Backed by the `app_user` table (`user` is reserved in PostgreSQL).
pub struct PgUserRepository {
    pool: Pool<Postgres>,
}

impl PgUserRepository {
    /// Create a new PgUserRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, input: UserInput) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO app_user (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.password)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(user)
    }

    async fn update(&self, id: i32, input: UserInput) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE app_user
            SET name = $2, email = $3, password = $4
            WHERE id = $1
            RETURNING id, name, email, password
            "#,
        )
        .bind(id)
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.password)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?
        .ok_or_else(|| Error::NotFound(format!("User {}", id)))?;

        Ok(user)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let result = sqlx::query("DELETE FROM app_user WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("User {}", id)));
        }
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM app_user WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(Error::Database)?;

        Ok(exists)
    }
}
