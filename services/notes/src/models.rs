//! API models for request and response payloads

pub mod note;
pub mod user;

pub use note::{NewNote, Note, NoteDraft, UpdateNote};
pub use user::{NewUser, NewUserRequest, User};
