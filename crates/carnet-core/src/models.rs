//! Core data models for carnet.
//!
//! These types are shared across all carnet crates and represent the four
//! domain entities and their relation expansions. JSON field names follow
//! the HTTP contract: camelCase for multi-word keys (`userId`, `categoryId`).

use serde::{Deserialize, Serialize};

// =============================================================================
// USER
// =============================================================================

/// A registered user. Owns zero or more notes.
///
/// The password is stored and returned in plain text, matching the service
/// contract this system reproduces. See DESIGN.md for the migration note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

// =============================================================================
// CATEGORY
// =============================================================================

/// A note category. Owns zero or more notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

// =============================================================================
// TAG
// =============================================================================

/// A tag, associated with notes through the `note_tag` join table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

// =============================================================================
// NOTE
// =============================================================================

/// A note, owned by exactly one user and one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub user_id: i32,
    pub category_id: i32,
}

/// A note with its owning user and category embedded inline.
///
/// Produced by the list endpoint's read-only join expansion; never used as
/// a write model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteWithRelations {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub user_id: i32,
    pub category_id: i32,
    pub user: User,
    pub category: Category,
}
