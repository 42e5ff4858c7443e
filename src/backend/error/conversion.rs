/**
 * Error Conversion
 *
 * All backend errors implement `IntoResponse` from Axum, so handlers and
 * middleware return them directly and every failure leaves the server in the
 * same shape.
 *
 * # Response Format
 *
 * ```json
 * { "errors": "Username already exists" }
 * ```
 *
 * Schema violations carry the messages of every invalid field:
 *
 * ```json
 * { "errors": { "username": ["must not be empty"], "name": ["must not be empty"] } }
 * ```
 */

use axum::response::{IntoResponse, Json, Response};
use serde_json::{json, Value};

use crate::backend::error::types::BackendError;
use crate::shared::SharedError;

impl BackendError {
    /// JSON error body, `{ "errors": ... }`
    pub fn body(&self) -> Value {
        match self {
            Self::Invalid(SharedError::ValidationError { errors }) => json!({ "errors": errors }),
            _ => json!({ "errors": self.message() }),
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_internal() {
            tracing::error!("Request failed: {}", self);
        }

        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use http_body_util::BodyExt;

    use crate::backend::auth::users::StoreError;

    async fn body_json(response: Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_response_lists_fields() {
        let error = BackendError::from(SharedError::validation("username", "must not be empty"));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["errors"]["username"][0], "must not be empty");
    }

    #[tokio::test]
    async fn test_unauthorized_response() {
        let response = BackendError::unauthorized("Unauthorized").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await, json!({ "errors": "Unauthorized" }));
    }

    #[tokio::test]
    async fn test_internal_response_hides_detail() {
        let error = BackendError::from(StoreError::Database(sqlx::Error::PoolClosed));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await, json!({ "errors": "Internal server error" }));
    }
}
