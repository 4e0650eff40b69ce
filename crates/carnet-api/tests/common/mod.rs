//! Shared test harness: an in-memory store standing in for PostgreSQL.
//!
//! The fakes mirror the store-level behavior the handlers rely on:
//! per-table id sequences, unique email, foreign keys on notes (RESTRICT
//! on user/category deletion, CASCADE on note_tag), and idempotent tag
//! connects. Store-contract violations surface as `Error::Database`, the
//! same tier a real constraint violation lands in.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use carnet_api::{app, AppState};
use carnet_core::{
    Category, CategoryInput, CategoryRepository, Error, Note, NoteInput, NoteRepository,
    NoteWithRelations, Result, Tag, TagInput, TagRepository, User, UserInput, UserRepository,
};

#[derive(Default)]
pub struct StoreData {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub notes: Vec<Note>,
    pub note_tags: HashSet<(i32, i32)>,
    next_user_id: i32,
    next_category_id: i32,
    next_tag_id: i32,
    next_note_id: i32,
}

/// In-memory stand-in for the relational store.
#[derive(Default)]
pub struct SharedStore {
    data: Mutex<StoreData>,
}

impl SharedStore {
    pub fn lock(&self) -> MutexGuard<'_, StoreData> {
        self.data.lock().unwrap()
    }
}

fn constraint_violation(detail: &str) -> Error {
    Error::Database(sqlx::Error::Protocol(detail.to_string()))
}

pub struct FakeUsers(pub Arc<SharedStore>);

#[async_trait]
impl UserRepository for FakeUsers {
    async fn create(&self, input: UserInput) -> Result<User> {
        let mut data = self.0.lock();
        if data.users.iter().any(|u| u.email == input.email) {
            return Err(constraint_violation("unique constraint: app_user.email"));
        }
        data.next_user_id += 1;
        let user = User {
            id: data.next_user_id,
            name: input.name,
            email: input.email,
            password: input.password,
        };
        data.users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: i32, input: UserInput) -> Result<User> {
        let mut data = self.0.lock();
        if data
            .users
            .iter()
            .any(|u| u.email == input.email && u.id != id)
        {
            return Err(constraint_violation("unique constraint: app_user.email"));
        }
        let user = data
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| Error::NotFound(format!("User {}", id)))?;
        user.name = input.name;
        user.email = input.email;
        user.password = input.password;
        Ok(user.clone())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut data = self.0.lock();
        if data.notes.iter().any(|n| n.user_id == id) {
            return Err(constraint_violation("foreign key: note.user_id RESTRICT"));
        }
        let before = data.users.len();
        data.users.retain(|u| u.id != id);
        if data.users.len() == before {
            return Err(Error::NotFound(format!("User {}", id)));
        }
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.0.lock().users.iter().any(|u| u.id == id))
    }
}

pub struct FakeCategories(pub Arc<SharedStore>);

#[async_trait]
impl CategoryRepository for FakeCategories {
    async fn create(&self, input: CategoryInput) -> Result<Category> {
        let mut data = self.0.lock();
        data.next_category_id += 1;
        let category = Category {
            id: data.next_category_id,
            name: input.name,
        };
        data.categories.push(category.clone());
        Ok(category)
    }

    async fn update(&self, id: i32, input: CategoryInput) -> Result<Category> {
        let mut data = self.0.lock();
        let category = data
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| Error::NotFound(format!("Category {}", id)))?;
        category.name = input.name;
        Ok(category.clone())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut data = self.0.lock();
        if data.notes.iter().any(|n| n.category_id == id) {
            return Err(constraint_violation(
                "foreign key: note.category_id RESTRICT",
            ));
        }
        let before = data.categories.len();
        data.categories.retain(|c| c.id != id);
        if data.categories.len() == before {
            return Err(Error::NotFound(format!("Category {}", id)));
        }
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.0.lock().categories.iter().any(|c| c.id == id))
    }
}

pub struct FakeTags(pub Arc<SharedStore>);

#[async_trait]
impl TagRepository for FakeTags {
    async fn create(&self, input: TagInput) -> Result<Tag> {
        let mut data = self.0.lock();
        data.next_tag_id += 1;
        let tag = Tag {
            id: data.next_tag_id,
            name: input.name,
        };
        data.tags.push(tag.clone());
        Ok(tag)
    }

    async fn update(&self, id: i32, input: TagInput) -> Result<Tag> {
        let mut data = self.0.lock();
        let tag = data
            .tags
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound(format!("Tag {}", id)))?;
        tag.name = input.name;
        Ok(tag.clone())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut data = self.0.lock();
        let before = data.tags.len();
        data.tags.retain(|t| t.id != id);
        if data.tags.len() == before {
            return Err(Error::NotFound(format!("Tag {}", id)));
        }
        data.note_tags.retain(|(_, tag_id)| *tag_id != id);
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.0.lock().tags.iter().any(|t| t.id == id))
    }
}

pub struct FakeNotes(pub Arc<SharedStore>);

#[async_trait]
impl NoteRepository for FakeNotes {
    async fn create(&self, input: NoteInput) -> Result<Note> {
        let mut data = self.0.lock();
        if !data.users.iter().any(|u| u.id == input.user_id) {
            return Err(constraint_violation("foreign key: note.user_id"));
        }
        if !data.categories.iter().any(|c| c.id == input.category_id) {
            return Err(constraint_violation("foreign key: note.category_id"));
        }
        data.next_note_id += 1;
        let note = Note {
            id: data.next_note_id,
            title: input.title,
            content: input.content,
            user_id: input.user_id,
            category_id: input.category_id,
        };
        data.notes.push(note.clone());
        Ok(note)
    }

    async fn update(&self, id: i32, input: NoteInput) -> Result<Note> {
        let mut data = self.0.lock();
        if !data.users.iter().any(|u| u.id == input.user_id) {
            return Err(constraint_violation("foreign key: note.user_id"));
        }
        if !data.categories.iter().any(|c| c.id == input.category_id) {
            return Err(constraint_violation("foreign key: note.category_id"));
        }
        let note = data
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| Error::NotFound(format!("Note {}", id)))?;
        note.title = input.title;
        note.content = input.content;
        note.user_id = input.user_id;
        note.category_id = input.category_id;
        Ok(note.clone())
    }

    async fn delete(&self, id: i32) -> Result<()> {
        let mut data = self.0.lock();
        let before = data.notes.len();
        data.notes.retain(|n| n.id != id);
        if data.notes.len() == before {
            return Err(Error::NotFound(format!("Note {}", id)));
        }
        data.note_tags.retain(|(note_id, _)| *note_id != id);
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool> {
        Ok(self.0.lock().notes.iter().any(|n| n.id == id))
    }

    async fn list_with_relations(&self) -> Result<Vec<NoteWithRelations>> {
        let data = self.0.lock();
        data.notes
            .iter()
            .map(|n| {
                let user = data
                    .users
                    .iter()
                    .find(|u| u.id == n.user_id)
                    .cloned()
                    .ok_or_else(|| constraint_violation("dangling note.user_id"))?;
                let category = data
                    .categories
                    .iter()
                    .find(|c| c.id == n.category_id)
                    .cloned()
                    .ok_or_else(|| constraint_violation("dangling note.category_id"))?;
                Ok(NoteWithRelations {
                    id: n.id,
                    title: n.title.clone(),
                    content: n.content.clone(),
                    user_id: n.user_id,
                    category_id: n.category_id,
                    user,
                    category,
                })
            })
            .collect()
    }

    async fn connect_tag(&self, note_id: i32, tag_id: i32) -> Result<()> {
        self.0.lock().note_tags.insert((note_id, tag_id));
        Ok(())
    }
}

/// Build the full application router over an in-memory store.
pub fn test_app() -> (axum::Router, Arc<SharedStore>) {
    let store = Arc::new(SharedStore::default());
    let state = AppState {
        users: Arc::new(FakeUsers(store.clone())),
        categories: Arc::new(FakeCategories(store.clone())),
        tags: Arc::new(FakeTags(store.clone())),
        notes: Arc::new(FakeNotes(store.clone())),
    };
    (app(state), store)
}

/// Send a JSON request through the router, returning status and parsed body.
pub async fn send(
    router: axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(json) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };

    let response: Response<_> = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Seed one user and one category straight into the store, bypassing HTTP.
#[allow(dead_code)]
pub fn seed_user_and_category(store: &SharedStore) -> (i32, i32) {
    let mut data = store.lock();
    data.next_user_id += 1;
    let user_id = data.next_user_id;
    data.users.push(User {
        id: user_id,
        name: "Jean Dupont".to_string(),
        email: "jean.dupont@example.com".to_string(),
        password: "securepassword123".to_string(),
    });
    data.next_category_id += 1;
    let category_id = data.next_category_id;
    data.categories.push(Category {
        id: category_id,
        name: "Travail".to_string(),
    });
    (user_id, category_id)
}
