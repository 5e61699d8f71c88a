use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::errors::{HomeRepositoryError, HomeUseCaseError, UserUseCaseError};
use crate::domain::authorization::AuthorizationError;

/// API error response
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));

        (self.status, body).into_response()
    }
}

// Convert use case errors to API errors

impl From<HomeRepositoryError> for ApiError {
    fn from(err: HomeRepositoryError) -> Self {
        match err {
            HomeRepositoryError::IdNotEmpty
            | HomeRepositoryError::EmptyPhotoName
            | HomeRepositoryError::DuplicatePhotoName(_) => ApiError::bad_request(err.to_string()),
            HomeRepositoryError::IdNotFound(_) => ApiError::not_found(err.to_string()),
            HomeRepositoryError::Storage { operation, source } => {
                // driver details stay in the log
                error!(operation, error = %source, "Storage failure");
                ApiError::internal_error(format!("storage failure during {}", operation))
            }
        }
    }
}

impl From<HomeUseCaseError> for ApiError {
    fn from(err: HomeUseCaseError) -> Self {
        match err {
            HomeUseCaseError::InvalidRequest(msg) => ApiError::bad_request(msg),
            HomeUseCaseError::Forbidden(msg) => ApiError::forbidden(msg),
            HomeUseCaseError::Domain(e) => ApiError::bad_request(e.to_string()),
            HomeUseCaseError::Repository(e) => e.into(),
        }
    }
}

impl From<UserUseCaseError> for ApiError {
    fn from(err: UserUseCaseError) -> Self {
        match err {
            UserUseCaseError::InvalidRequest(msg) => ApiError::bad_request(msg),
            UserUseCaseError::DuplicateEmail(_) => ApiError::bad_request(err.to_string()),
            UserUseCaseError::EmailNotFound(_) => ApiError::not_found(err.to_string()),
            UserUseCaseError::IncorrectPassword => ApiError::unauthorized(err.to_string()),
            UserUseCaseError::Credentials(_) | UserUseCaseError::Store(_) => {
                error!(error = %err, "User operation failed");
                ApiError::internal_error("user operation failed")
            }
        }
    }
}

impl From<AuthorizationError> for ApiError {
    fn from(err: AuthorizationError) -> Self {
        match err {
            AuthorizationError::AuthenticationRequired(_) | AuthorizationError::InvalidToken(_) => {
                ApiError::unauthorized(err.to_string())
            }
            AuthorizationError::AccessForbidden(msg) => ApiError::forbidden(msg),
        }
    }
}
