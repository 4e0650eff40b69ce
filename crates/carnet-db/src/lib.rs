//! # carnet-db
//!
//! PostgreSQL database layer for carnet.
//!
//! This crate provides:
//! - Connection pool management
//! - Repository implementations for all core entities
//! - A combined [`Database`] context with an explicit lifecycle: construct
//!   before the listener starts, [`Database::close`] on graceful shutdown
//!
//! ## Example
//!
//! ```rust,ignore
//! use carnet_core::UserInput;
//! use carnet_db::Database;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::connect("postgres://localhost/carnet").await?;
//!
//!     let user = db.users.create(UserInput {
//!         name: "Jean Dupont".to_string(),
//!         email: "jean.dupont@example.com".to_string(),
//!         password: "securepassword123".to_string(),
//!     }).await?;
//!
//!     println!("Created user: {}", user.id);
//!     db.close().await;
//!     Ok(())
//! }
//! ```

pub mod categories;
pub mod notes;
pub mod pool;
pub mod tags;
pub mod users;

// Re-export core types
pub use carnet_core::*;

// Re-export repository implementations
pub use categories::PgCategoryRepository;
pub use notes::PgNoteRepository;
pub use pool::{create_pool, create_pool_with_config, PoolConfig};
pub use tags::PgTagRepository;
pub use users::PgUserRepository;

/// Combined database context with all repositories.
pub struct Database {
    /// The underlying connection pool.
    pub pool: sqlx::Pool<sqlx::Postgres>,
    /// User repository for CRUD operations.
    pub users: PgUserRepository,
    /// Category repository for CRUD operations.
    pub categories: PgCategoryRepository,
    /// Tag repository for CRUD operations.
    pub tags: PgTagRepository,
    /// Note repository for CRUD operations and tag associations.
    pub notes: PgNoteRepository,
}

impl Database {
    /// Create a new Database instance from a connection pool.
    pub fn new(pool: sqlx::Pool<sqlx::Postgres>) -> Self {
        Self {
            users: PgUserRepository::new(pool.clone()),
            categories: PgCategoryRepository::new(pool.clone()),
            tags: PgTagRepository::new(pool.clone()),
            notes: PgNoteRepository::new(pool.clone()),
            pool,
        }
    }

    /// Create a new Database instance by connecting to the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = create_pool(url).await?;
        Ok(Self::new(pool))
    }

    /// Create with custom pool configuration.
    pub async fn connect_with_config(url: &str, config: PoolConfig) -> Result<Self> {
        let pool = create_pool_with_config(url, config).await?;
        Ok(Self::new(pool))
    }

    /// Run pending migrations.
    #[cfg(feature = "migrations")]
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("../../migrations")
            .run(&self.pool)
            .await
            .map_err(|e| Error::Database(sqlx::Error::Migrate(Box::new(e))))?;
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &sqlx::Pool<sqlx::Postgres> {
        &self.pool
    }

    /// Close the connection pool, waiting for in-flight connections to
    /// finish. Called on graceful shutdown.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
