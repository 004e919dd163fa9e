//! Repositories for database operations
//!
//! The handlers only see the [`NoteRepository`] and [`UserRepository`]
//! traits. PostgreSQL backs them in production; the in-memory versions in
//! [`memory`] back the test suite.

use async_trait::async_trait;
use common::error::DatabaseResult;
use uuid::Uuid;

use crate::models::{NewUser, Note, NoteDraft, UpdateNote, User};

pub mod memory;
pub mod note;
pub mod user;

pub use memory::{MemoryNoteRepository, MemoryUserRepository};
pub use note::PgNoteRepository;
pub use user::PgUserRepository;

/// Storage for notes
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a note; the store assigns its id
    async fn create(&self, draft: &NoteDraft) -> DatabaseResult<Note>;

    /// Get all notes in creation order
    async fn find_all(&self) -> DatabaseResult<Vec<Note>>;

    /// Find a note by ID
    async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<Note>>;

    /// Apply the present fields of `update` and return the updated note
    async fn update_by_id(&self, id: Uuid, update: &UpdateNote) -> DatabaseResult<Option<Note>>;

    /// Delete a note, returning whether it existed
    async fn delete_by_id(&self, id: Uuid) -> DatabaseResult<bool>;
}

/// Storage for users
///
/// `create` must reject a username that is already taken with
/// [`common::error::DatabaseError::UniqueViolation`].
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user
    async fn create(&self, new_user: &NewUser) -> DatabaseResult<User>;

    /// Get all users in creation order
    async fn find_all(&self) -> DatabaseResult<Vec<User>>;

    /// Number of stored users
    async fn count(&self) -> DatabaseResult<i64>;
}
