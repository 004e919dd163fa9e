//! User routes

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::error;

use crate::{
    error::{ApiError, ApiResult},
    extract::ApiJson,
    models::{NewUser, NewUserRequest},
    password::hash_password,
    state::AppState,
    validation::{Registration, validate_new_user},
};

/// Build user routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/users", get(get_users).post(create_user))
}

/// Get all users
pub async fn get_users(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let users = state.users().find_all().await?;
    Ok(Json(users))
}

/// Register a new user
pub async fn create_user(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<NewUserRequest>,
) -> ApiResult<impl IntoResponse> {
    let Registration {
        username,
        name,
        password,
    } = validate_new_user(payload)?;

    // argon2 is CPU bound, keep it off the async workers
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| ApiError::Internal(format!("password hashing task failed: {}", e)))?
        .map_err(|e| {
            error!("Failed to hash password: {}", e);
            ApiError::Internal("password hashing failed".to_string())
        })?;

    let user = state
        .users()
        .create(&NewUser {
            username,
            name,
            password_hash,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}
