//! Request body extractors.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body that rejects malformed input with 400 Bad Request.
///
/// Axum's plain [`Json`] extractor answers missing fields and type mismatches
/// with 422; clients of this service expect every malformed body (bad syntax,
/// wrong shape, wrong content type) to come back as a 400 in the standard
/// error envelope.
///
/// ```ignore
/// async fn create(JsonBody(input): JsonBody<NewPresentation>) -> AppResult<Json<Presentation>> {
///     // input is fully deserialized here
/// }
/// ```
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        Json::<T>::from_request(req, state)
            .await
            .map(|Json(value)| JsonBody(value))
            .map_err(reject)
    }
}

fn reject(rejection: JsonRejection) -> AppError {
    let message = rejection.body_text();
    tracing::debug!(status = %rejection.status(), error = %message, "Rejected request body");
    AppError::BadRequest(message)
}
