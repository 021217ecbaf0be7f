//! Unified error handling with Sentry integration.
//!
//! `AppError` is returned by HTTP handlers and by the GraphQL operation
//! helpers. Server errors are captured to Sentry before the client sees a
//! generic message.

use async_graphql::ErrorExtensions;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;

pub const PERMISSION_DENIED_MESSAGE: &str = "You do not have permission to perform this action";
pub const READ_ONLY_MESSAGE: &str = "Be aware admin pirate! API runs in read-only mode!";
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Application-level error type for the accounts API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication operation failed unexpectedly.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Caller lacks the permission an operation requires.
    #[error("You do not have permission to perform this action")]
    PermissionDenied,

    /// Mutation rejected because the API runs in read-only mode.
    #[error("Be aware admin pirate! API runs in read-only mode!")]
    ReadOnly,

    /// Query argument rejected.
    #[error("{field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    const fn is_server_error(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Auth(_) | Self::Internal(_))
    }

    const fn code(&self) -> &'static str {
        match self {
            Self::Database(_) | Self::Auth(_) | Self::Internal(_) => "INTERNAL_SERVER_ERROR",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::ReadOnly => "READ_ONLY",
            Self::InvalidInput { .. } => "INVALID",
        }
    }

    /// Message safe to show to clients.
    fn public_message(&self) -> String {
        if self.is_server_error() {
            INTERNAL_MESSAGE.to_string()
        } else if let Self::InvalidInput { message, .. } = self {
            message.clone()
        } else {
            self.to_string()
        }
    }

    fn report(&self) {
        if self.is_server_error() {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.report();

        let status = match &self {
            Self::Database(_) | Self::Auth(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::PermissionDenied | Self::ReadOnly => StatusCode::FORBIDDEN,
            Self::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        };

        (status, self.public_message()).into_response()
    }
}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        self.report();

        async_graphql::Error::new(self.public_message()).extend_with(|_, e| {
            e.set("code", self.code());
            if let Self::InvalidInput { field, .. } = self {
                e.set("field", *field);
            }
        })
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Set the Sentry user context for the authenticated caller.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(get_status(AppError::PermissionDenied), StatusCode::FORBIDDEN);
        assert_eq!(get_status(AppError::ReadOnly), StatusCode::FORBIDDEN);
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Database(RepositoryError::NotFound)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_graphql_error_hides_internal_details() {
        let err = AppError::Internal("connection reset by peer".to_string()).extend();
        assert_eq!(err.message, "Internal server error");

        let extensions = serde_json::to_value(err.extensions.unwrap()).unwrap();
        assert_eq!(extensions["code"], "INTERNAL_SERVER_ERROR");
    }

    #[test]
    fn test_graphql_permission_error() {
        let err = AppError::PermissionDenied.extend();
        assert_eq!(
            err.message,
            "You do not have permission to perform this action"
        );
        let extensions = serde_json::to_value(err.extensions.unwrap()).unwrap();
        assert_eq!(extensions["code"], "PERMISSION_DENIED");
    }

    #[test]
    fn test_invalid_input_carries_field() {
        let err = AppError::InvalidInput {
            field: "countryCode",
            message: "Invalid country code.".to_string(),
        }
        .extend();
        assert_eq!(err.message, "Invalid country code.");
        let extensions = serde_json::to_value(err.extensions.unwrap()).unwrap();
        assert_eq!(extensions["field"], "countryCode");
    }
}
