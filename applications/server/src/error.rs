/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roster_core::RosterError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("User not found")]
    NotFound,

    #[error("Name and email are required")]
    Validation,

    #[error("User with this email already exists")]
    Conflict,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Wrap an unexpected failure for the 500 responder.
    ///
    /// The body detail is selected here, at construction: the real
    /// message when verbose errors are enabled (development), a fixed
    /// generic string otherwise. `IntoResponse` never consults the
    /// environment.
    pub fn internal(err: anyhow::Error, verbose_errors: bool) -> Self {
        tracing::error!("Unhandled error: {err:#}");
        if verbose_errors {
            Self::Internal(err.to_string())
        } else {
            Self::Internal("Internal server error".to_string())
        }
    }
}

impl From<RosterError> for ServerError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::UserNotFound(_) => ServerError::NotFound,
            RosterError::MissingFields => ServerError::Validation,
            RosterError::DuplicateEmail(_) => ServerError::Conflict,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ServerError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "success": false, "error": self.to_string() }),
            ),
            ServerError::Validation => (
                StatusCode::BAD_REQUEST,
                json!({ "success": false, "error": self.to_string() }),
            ),
            ServerError::Conflict => (
                StatusCode::CONFLICT,
                json!({ "success": false, "error": self.to_string() }),
            ),
            ServerError::Config(msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Something went wrong!", "message": "Internal server error" }),
                )
            }
            // Note the different envelope: 500s carry no `success` field
            ServerError::Internal(message) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Something went wrong!", "message": message }),
            ),
        };

        (status, Json(body)).into_response()
    }
}
