use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use warden_application::AuthError;
use warden_core::UserError;

/// JSON body used for every non-token response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Username already exists")]
    DuplicateUsername,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, message) = match self {
            AuthApiError::InvalidInput(_) | AuthApiError::DuplicateUsername => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }

            AuthApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),

            AuthApiError::UnexpectedError(ref e) => {
                tracing::error!(error = %e, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status_code, Json(MessageResponse::new(message))).into_response()
    }
}

impl From<UserError> for AuthApiError {
    fn from(error: UserError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<AuthError> for AuthApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::DuplicateUsername => AuthApiError::DuplicateUsername,
            AuthError::InvalidCredentials => AuthApiError::InvalidCredentials,
            AuthError::StoreUnavailable(_)
            | AuthError::HashingFailed(_)
            | AuthError::TokenIssuanceFailed(_) => AuthApiError::UnexpectedError(error.to_string()),
        }
    }
}
