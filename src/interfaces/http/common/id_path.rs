//! Integer identifier path extractor
//!
//! `IdPath` reads the single `{id}` path segment as an `i32`. A segment that
//! is not an integer in range does not match any resource, so it is rejected
//! with [`ApiError::NotFound`] instead of axum's plain-text 400.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use tracing::warn;

use super::ApiError;

pub struct IdPath(pub i32);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                warn!(method = %parts.method, path = %parts.uri.path(), error = %rejection, "Missing identifier");
                ApiError::NotFound
            })?;

        raw.parse::<i32>().map(IdPath).map_err(|_| {
            warn!(method = %parts.method, path = %parts.uri.path(), id = %raw, "Identifier is not a valid integer");
            ApiError::NotFound
        })
    }
}
