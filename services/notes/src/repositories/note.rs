//! Note repository backed by PostgreSQL

use async_trait::async_trait;
use common::error::DatabaseResult;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::NoteRepository;
use crate::models::{Note, NoteDraft, UpdateNote};

/// Note repository
#[derive(Clone)]
pub struct PgNoteRepository {
    pool: PgPool,
}

impl PgNoteRepository {
    /// Create a new note repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NoteRepository for PgNoteRepository {
    async fn create(&self, draft: &NoteDraft) -> DatabaseResult<Note> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (content, important)
            VALUES ($1, $2)
            RETURNING id, content, important
            "#,
        )
        .bind(&draft.content)
        .bind(draft.important)
        .fetch_one(&self.pool)
        .await?;

        info!("Created note {}", note.id);
        Ok(note)
    }

    async fn find_all(&self) -> DatabaseResult<Vec<Note>> {
        let notes = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, content, important
            FROM notes
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(notes)
    }

    async fn find_by_id(&self, id: Uuid) -> DatabaseResult<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, content, important
            FROM notes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    async fn update_by_id(&self, id: Uuid, update: &UpdateNote) -> DatabaseResult<Option<Note>> {
        let note = sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET content = COALESCE($2, content),
                important = COALESCE($3, important)
            WHERE id = $1
            RETURNING id, content, important
            "#,
        )
        .bind(id)
        .bind(update.content.as_deref())
        .bind(update.important)
        .fetch_optional(&self.pool)
        .await?;

        Ok(note)
    }

    async fn delete_by_id(&self, id: Uuid) -> DatabaseResult<bool> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
