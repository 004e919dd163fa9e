//! In-process repositories
//!
//! Same contract as the PostgreSQL repositories, including the username
//! uniqueness constraint. Used by the test suite.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use common::error::{DatabaseError, DatabaseResult};
use uuid::Uuid;

use super::{NoteRepository, UserRepository};
use crate::models::{NewUser, Note, NoteDraft, UpdateNote, User};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory note repository
#[derive(Clone, Debug, Default)]
pub struct MemoryNoteRepository {
    notes: Arc<Mutex<Vec<Note>>>,
}

impl MemoryNoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteRepository for MemoryNoteRepository {
    async fn create(&self, draft: &NoteDraft) -> DatabaseResult<Note> {
        let note = Note {
            id: Uuid::new_v4(),
            content: draft.content.clone(),
            important: draft.important,
        };
        lock(&self.notes).push(note.clone());
        Ok(note)
    }

    async fn find_all(&self) -> DatabaseResult<Vec<Note>> {
        Ok(lock(&self.notes).clone())
    }

    async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<Note>> {
        Ok(lock(&self.notes).iter().find(|n| n.id == id).cloned())
    }

    async fn update_by_id(&self, id: Uuid, update: &UpdateNote) -> DatabaseResult<Option<Note>> {
        let mut notes = lock(&self.notes);
        let Some(note) = notes.iter_mut().find(|n| n.id == id) else {
            return Ok(None);
        };

        if let Some(content) = &update.content {
            note.content = content.clone();
        }
        if let Some(important) = update.important {
            note.important = important;
        }

        Ok(Some(note.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> DatabaseResult<bool> {
        let mut notes = lock(&self.notes);
        let before = notes.len();
        notes.retain(|n| n.id != id);
        Ok(notes.len() < before)
    }
}

/// In-memory user repository
#[derive(Clone, Debug, Default)]
pub struct MemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn create(&self, new_user: &NewUser) -> DatabaseResult<User> {
        let mut users = lock(&self.users);

        if users.iter().any(|u| u.username == new_user.username) {
            return Err(DatabaseError::UniqueViolation {
                field: "username".to_string(),
                value: new_user.username.clone(),
            });
        }

        let user = User {
            id: Uuid::new_v4(),
            username: new_user.username.clone(),
            name: new_user.name.clone(),
            password_hash: new_user.password_hash.clone(),
            notes: Vec::new(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_all(&self) -> DatabaseResult<Vec<User>> {
        Ok(lock(&self.users).clone())
    }

    async fn count(&self) -> DatabaseResult<i64> {
        Ok(lock(&self.users).len() as i64)
    }
}
