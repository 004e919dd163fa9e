//! Cross-cutting request middleware

use axum::{
    body::{Body, HttpBody, to_bytes},
    extract::Request,
    http::HeaderValue,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::error::ApiError;

/// Bodies larger than this are not buffered for logging.
pub const MAX_LOGGED_BODY: usize = 64 * 1024;

/// Fields whose values never reach the log.
const REDACTED_FIELDS: &[&str] = &["password", "passwordHash", "password_hash"];

/// Log method, path and body of every request, then pass it on unchanged
///
/// Bodies without a known size bound are forwarded untouched and logged as
/// `<streamed>`. A bounded body that cannot be read is answered with 400,
/// since the handler would otherwise see an empty payload.
pub async fn request_logger(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();

    let (body, logged) = match body.size_hint().upper() {
        Some(0) => (body, String::new()),
        Some(len) if len <= MAX_LOGGED_BODY as u64 => match to_bytes(body, MAX_LOGGED_BODY).await {
            Ok(bytes) => {
                let logged = describe_body(&bytes);
                (Body::from(bytes), logged)
            }
            Err(e) => {
                warn!(
                    method = %parts.method,
                    path = %parts.uri.path(),
                    error = %e,
                    "Failed to read request body"
                );
                return ApiError::Validation(format!("Failed to read request body: {e}"))
                    .into_response();
            }
        },
        Some(_) => (body, String::from("<too large>")),
        None => (body, String::from("<streamed>")),
    };

    info!(
        method = %parts.method,
        path = %parts.uri.path(),
        body = %logged,
        "Incoming request"
    );

    next.run(Request::from_parts(parts, body)).await
}

/// Render a request body for the log, masking credentials in JSON objects
fn describe_body(bytes: &[u8]) -> String {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(mut map)) => {
            for field in REDACTED_FIELDS {
                if let Some(value) = map.get_mut(*field) {
                    *value = Value::String("[redacted]".to_string());
                }
            }
            Value::Object(map).to_string()
        }
        Ok(other) => other.to_string(),
        Err(_) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

/// Build CORS layer from configuration.
pub fn build_cors_layer(allowed_origins: &str) -> CorsLayer {
    if allowed_origins.trim() == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match s.parse() {
            Ok(origin) => Some(origin),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", s);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
