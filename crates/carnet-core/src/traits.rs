//! Repository traits for carnet entities.
//!
//! These traits define the persistence interfaces that concrete
//! implementations must satisfy, enabling pluggable backends and
//! testability. Each request type carries the full set of scalar fields:
//! updates are full replacements, never partial patches.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::*;

// =============================================================================
// USER REPOSITORY
// =============================================================================

/// Request for creating or fully replacing a user.
#[derive(Debug, Clone)]
pub struct UserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Repository for user CRUD operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user and return the persisted record.
    async fn create(&self, input: UserInput) -> Result<User>;

    /// Replace all scalar fields of an existing user.
    async fn update(&self, id: i32, input: UserInput) -> Result<User>;

    /// Remove a user by id.
    async fn delete(&self, id: i32) -> Result<()>;

    /// Check whether a user with the given id exists.
    async fn exists(&self, id: i32) -> Result<bool>;
}

// =============================================================================
// CATEGORY REPOSITORY
// =============================================================================

/// Request for creating or fully replacing a category.
#[derive(Debug, Clone)]
pub struct CategoryInput {
    pub name: String,
}

/// Repository for category CRUD operations.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    async fn create(&self, input: CategoryInput) -> Result<Category>;
    async fn update(&self, id: i32, input: CategoryInput) -> Result<Category>;
    async fn delete(&self, id: i32) -> Result<()>;
    async fn exists(&self, id: i32) -> Result<bool>;
}

// =============================================================================
// TAG REPOSITORY
// =============================================================================

/// Request for creating or fully replacing a tag.
#[derive(Debug, Clone)]
pub struct TagInput {
    pub name: String,
}

/// Repository for tag CRUD operations.
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn create(&self, input: TagInput) -> Result<Tag>;
    async fn update(&self, id: i32, input: TagInput) -> Result<Tag>;
    async fn delete(&self, id: i32) -> Result<()>;
    async fn exists(&self, id: i32) -> Result<bool>;
}

// =============================================================================
// NOTE REPOSITORY
// =============================================================================

/// Request for creating or fully replacing a note.
#[derive(Debug, Clone)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
    pub user_id: i32,
    pub category_id: i32,
}

/// Repository for note CRUD operations and the tag association.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    async fn create(&self, input: NoteInput) -> Result<Note>;
    async fn update(&self, id: i32, input: NoteInput) -> Result<Note>;
    async fn delete(&self, id: i32) -> Result<()>;
    async fn exists(&self, id: i32) -> Result<bool>;

    /// List every note with its user and category embedded.
    async fn list_with_relations(&self) -> Result<Vec<NoteWithRelations>>;

    /// Associate a tag with a note. Connecting an already-connected tag
    /// is a no-op, not an error.
    async fn connect_tag(&self, note_id: i32, tag_id: i32) -> Result<()>;
}
