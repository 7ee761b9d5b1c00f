//! Path and query-string extractors whose rejections use the JSON error body.

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Like [`axum::extract::Path`], but a segment that fails to parse (for
/// example `/api/personnel/abc`) is a 400 `BAD_REQUEST` JSON error.
#[derive(Debug, Clone, Copy)]
pub struct ApiPath<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: PathRejection| {
                tracing::debug!(error = %rejection, "Rejected path parameters");
                AppError::BadRequest(rejection.body_text())
            })?;
        Ok(ApiPath(value))
    }
}

/// Like [`axum::extract::Query`], with the same JSON rejection as [`ApiPath`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection: QueryRejection| {
                tracing::debug!(error = %rejection, "Rejected query string");
                AppError::BadRequest(rejection.body_text())
            })?;
        Ok(ApiQuery(value))
    }
}
