//! Application state shared across handlers

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::repositories::{NoteRepository, UserRepository};

/// Application state shared across handlers
///
/// Built once at startup with the repositories injected; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    notes: Arc<dyn NoteRepository>,
    users: Arc<dyn UserRepository>,
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(
        notes: Arc<dyn NoteRepository>,
        users: Arc<dyn UserRepository>,
        config: ServerConfig,
    ) -> Self {
        Self {
            notes,
            users,
            config: Arc::new(config),
        }
    }

    /// Note storage.
    pub fn notes(&self) -> &dyn NoteRepository {
        self.notes.as_ref()
    }

    /// User storage.
    pub fn users(&self) -> &dyn UserRepository {
        self.users.as_ref()
    }

    /// Server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
