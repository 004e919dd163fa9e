//! notes: REST backend for notes and users
//!
//! The service exposes CRUD endpoints over notes plus user registration.
//! Every request passes through the request logger before routing; every
//! handler failure is translated into a response by [`error::ApiError`].
//!
//! ```rust,ignore
//! let state = AppState::new(notes, users, ServerConfig::from_env()?);
//! let app = notes::build_app(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;

use axum::Router;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;

/// Build the router with the full middleware stack
pub fn build_app(state: AppState) -> Router {
    let cors = middleware::build_cors_layer(&state.config().cors_allowed_origins);

    routes::create_router(state)
        .layer(axum::middleware::from_fn(middleware::request_logger))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
