//! Notes service routes

use axum::{
    Json, Router,
    handler::HandlerWithoutStateExt,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use serde_json::json;
use tower_http::services::ServeDir;

use crate::state::AppState;

pub mod notes;
pub mod users;

/// Create the router for the notes service
///
/// Requests that match no route are answered by the static directory when
/// one is configured, and by [`unknown_endpoint`] otherwise.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(notes::routes())
        .merge(users::routes());

    let router = match &state.config().static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(unknown_endpoint.into_service()),
        ),
        None => router.fallback(unknown_endpoint),
    };

    router.with_state(state)
}

/// Greeting page
pub async fn root() -> Html<&'static str> {
    Html("<h1>Hello World!</h1>")
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "notes"
    }))
}

/// Fallback for requests that match no route
pub async fn unknown_endpoint() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "unknown endpoint" })),
    )
}
