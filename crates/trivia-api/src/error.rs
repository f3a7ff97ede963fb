use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Error taxonomy surfaced to clients as the uniform JSON envelope
/// `{success: false, error: <code>, message: <text>}`.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed or incomplete client input.
    #[error("bad request")]
    BadRequest,
    /// Referenced category, question, or page does not exist.
    #[error("resource not found")]
    NotFound,
    /// Persistence failure during a write, after validation passed. The
    /// pending transaction has already been rolled back when this surfaces.
    #[error("unprocessable content")]
    Unprocessable,
    /// Read-path database failure; not part of the client-facing taxonomy.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::BadRequest => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Unprocessable => (StatusCode::UNPROCESSABLE_ENTITY, self.to_string()),
            Self::Database(error) => {
                tracing::error!("database error: {error}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "error": status.as_u16(),
            "message": message,
        }));

        (status, body).into_response()
    }
}
