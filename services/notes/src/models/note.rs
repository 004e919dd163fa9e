//! Note models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Note entity, as stored and as returned to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Note {
    pub id: Uuid,
    pub content: String,
    pub important: bool,
}

/// Request body for note creation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewNote {
    pub content: Option<String>,
    pub important: Option<bool>,
}

/// A creation payload that passed validation, with defaults applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub content: String,
    pub important: bool,
}

/// Request body for note updates
///
/// Omitted fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateNote {
    pub content: Option<String>,
    pub important: Option<bool>,
}
