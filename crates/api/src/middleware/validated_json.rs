//! JSON body extractor that runs `validator` rules before the handler.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// Deserialize a JSON body into `T` and validate it.
///
/// A body that does not parse is a 400 `BAD_REQUEST`; one that parses but
/// breaks a rule is a 400 `VALIDATION_ERROR` with per-field details.
///
/// ```ignore
/// async fn create(ValidatedJson(input): ValidatedJson<CreateCase>) -> AppResult<Json<Case>> {
///     // input passed every #[validate] rule
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::debug!(error = %rejection, "Rejected request body");
                AppError::BadRequest(rejection.body_text())
            })?;

        value.validate().inspect_err(|errors| {
            tracing::debug!(error = %errors, "Request body failed validation");
        })?;

        Ok(ValidatedJson(value))
    }
}
