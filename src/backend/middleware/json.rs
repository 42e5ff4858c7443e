/**
 * JSON Body Extractor
 *
 * `AppJson` behaves like `axum::Json` but rejects undecodable bodies with a
 * `BackendError`, so a malformed body or missing content type produces the
 * usual `{ "errors": ... }` 400 response instead of axum's plain text 415/422.
 */

use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::backend::error::BackendError;
use crate::shared::SharedError;

#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(BackendError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        BackendError::Invalid(SharedError::serialization(rejection.body_text()))
    }
}
