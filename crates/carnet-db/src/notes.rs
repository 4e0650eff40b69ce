//! Note repository implementation.

use async_trait::async_trait;
use sqlx::{Pool, Postgres, Row};

use carnet_core::{
    Category, Error, Note, NoteInput, NoteRepository, NoteWithRelations, Result, User,
};

/// PostgreSQL implementation of NoteRepository.
pub struct PgNoteRepository {
    pool: Pool<Postgres>,
}

impl PgNoteRepository {
    /// Create a new PgNoteRepository with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn create(&self, input: NoteInput) -> Result<Note> {
        // Referential integrity for user_id/category_id is enforced by the
        // store, not pre-checked here. A violation surfaces as a database
        // error.
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO note (title, content, user_id, category_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, user_id, category_id
            "#,
        )
        .bind(&input.title)
        .bind(&input.content)
        .bind(input.user_id)
        .bind(input.category_id)
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(note)
    }

    async fn update(&self, id: i32, input: NoteInput) -> Result<Note> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            UPDATE note
            SET title = $2, content = $3, user_id = $4, category_id = $5
            WHERE id = $1
            RETURNING id, title, content, user_id, category_id
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.content)
        .bind(input.user_id)
        .bind(input.category_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?
        .ok_or_else(|| Error::NotFound(format!("Note {}", id)))?;

        Ok(note)
    }

    async fn delete(&self, id: i32) -> Result<()> {
        // note_tag rows cascade at the store level.
        let result = sqlx::query("DELETE FROM note WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Note {}", id)));
        }
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM note WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;

        Ok(exists)
    }

    async fn list_with_relations(&self) -> Result<Vec<NoteWithRelations>> {
        let rows = sqlx::query(
            r#"
            SELECT n.id, n.title, n.content, n.user_id, n.category_id,
                   u.name AS user_name, u.email AS user_email,
                   u.password AS user_password,
                   c.name AS category_name
            FROM note n
            JOIN app_user u ON u.id = n.user_id
            JOIN category c ON c.id = n.category_id
            ORDER BY n.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows
            .into_iter()
            .map(|row| NoteWithRelations {
                id: row.get("id"),
                title: row.get("title"),
                content: row.get("content"),
                user_id: row.get("user_id"),
                category_id: row.get("category_id"),
                user: User {
                    id: row.get("user_id"),
                    name: row.get("user_name"),
                    email: row.get("user_email"),
                    password: row.get("user_password"),
                },
                category: Category {
                    id: row.get("category_id"),
                    name: row.get("category_name"),
                },
            })
            .collect())
    }

    async fn connect_tag(&self, note_id: i32, tag_id: i32) -> Result<()> {
        // Idempotent: connecting an already-connected tag is a no-op.
        sqlx::query(
            "INSERT INTO note_tag (note_id, tag_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(note_id)
        .bind(tag_id)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(())
    }
}
