//! Request extractors that reject with [`ApiError`] instead of axum's defaults.

use axum::{
    Json, async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::error::ApiError;

/// Record id taken from the `:id` path segment
///
/// Anything that does not parse as a UUID is a malformed id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for ObjectId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MalformedId)?;

        Uuid::parse_str(&raw)
            .map(ObjectId)
            .map_err(|_| ApiError::MalformedId)
    }
}

/// JSON body whose rejections are reported as validation failures
#[derive(Debug, Clone)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError::Validation(rejection.body_text())),
        }
    }
}
