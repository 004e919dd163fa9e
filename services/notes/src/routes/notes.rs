//! Note routes
//!
//! - GET /api/notes
//! - GET /api/notes/:id
//! - POST /api/notes
//! - PUT /api/notes/:id
//! - DELETE /api/notes/:id

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::{debug, info};

use crate::{
    error::{ApiError, ApiResult},
    extract::{ApiJson, ObjectId},
    models::{NewNote, UpdateNote},
    state::AppState,
    validation::{validate_note, validate_note_update},
};

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(get_notes).post(create_note))
        .route(
            "/api/notes/:id",
            get(get_note).put(update_note).delete(delete_note),
        )
}

/// Get all notes
pub async fn get_notes(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let notes = state.notes().find_all().await?;
    Ok(Json(notes))
}

/// Get a note by ID
pub async fn get_note(
    State(state): State<AppState>,
    ObjectId(id): ObjectId,
) -> ApiResult<impl IntoResponse> {
    let note = state
        .notes()
        .find_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(note))
}

/// Create a new note
pub async fn create_note(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewNote>,
) -> ApiResult<impl IntoResponse> {
    let draft = validate_note(payload)?;
    let note = state.notes().create(&draft).await?;

    Ok(Json(note))
}

/// Update the content and importance of a note
pub async fn update_note(
    State(state): State<AppState>,
    ObjectId(id): ObjectId,
    ApiJson(payload): ApiJson<UpdateNote>,
) -> ApiResult<impl IntoResponse> {
    let update = validate_note_update(payload)?;
    let note = state
        .notes()
        .update_by_id(id, &update)
        .await?
        .ok_or(ApiError::NotFound)?;

    info!("Updated note {}", note.id);
    Ok(Json(note))
}

/// Delete a note by ID
pub async fn delete_note(
    State(state): State<AppState>,
    ObjectId(id): ObjectId,
) -> ApiResult<impl IntoResponse> {
    let deleted = state.notes().delete_by_id(id).await?;
    if !deleted {
        debug!("Delete of unknown note {}", id);
    }

    Ok(StatusCode::NO_CONTENT)
}
