//! Shared application state.

use std::sync::Arc;

use carnet_core::{CategoryRepository, NoteRepository, TagRepository, UserRepository};
use carnet_db::Database;

/// Handler state: one repository per resource family, injected at startup.
///
/// Repositories are held as trait objects so tests can substitute in-memory
/// implementations for the PostgreSQL ones.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub notes: Arc<dyn NoteRepository>,
}

impl AppState {
    /// Build state over a connected database, one repository per entity.
    pub fn from_database(db: Database) -> Self {
        Self {
            users: Arc::new(db.users),
            categories: Arc::new(db.categories),
            tags: Arc::new(db.tags),
            notes: Arc::new(db.notes),
        }
    }
}
