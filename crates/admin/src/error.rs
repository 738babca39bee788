//! Application error types and HTTP responses.
//!
//! Every handler returns [`AppError`], rendered as the same JSON body
//! the commerce API uses: `{"error": message}`. Server faults are
//! reported to Sentry before the response is built; routine rejections
//! are not.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::commerce::ApiError;

/// Admin service error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Commerce API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Session persistence failed.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Request requires a signed-in identity of the right class.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Signed in, but not allowed to act here.
    #[error("forbidden: {0}")]
    Forbidden(String),
}

/// Convenience alias for handler results.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// HTTP status for this error.
    fn status(&self) -> StatusCode {
        match self {
            Self::Api(api) => match api {
                ApiError::Transport(_) | ApiError::Payload(_) => StatusCode::BAD_GATEWAY,
                ApiError::AuthRequired { .. } => StatusCode::UNAUTHORIZED,
                ApiError::Rejected { status, .. } => {
                    StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
                }
            },
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }

    /// Message safe to show an operator.
    fn client_message(&self) -> String {
        match self {
            Self::Api(api) => match api {
                ApiError::Transport(_) | ApiError::Payload(_) => {
                    "Commerce API is temporarily unavailable. Please try again.".to_string()
                }
                ApiError::AuthRequired { message } | ApiError::Rejected { message, .. } => {
                    message.clone()
                }
            },
            Self::Session(_) => "Internal server error".to_string(),
            Self::Unauthorized(message) | Self::Forbidden(message) => message.clone(),
        }
    }

    /// Whether this error is our fault rather than the caller's.
    fn is_server_fault(&self) -> bool {
        match self {
            Self::Api(api) => api.is_server_fault(),
            Self::Session(_) => true,
            Self::Unauthorized(_) | Self::Forbidden(_) => false,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_fault() {
            tracing::error!(error = %self, "request failed");
            sentry::capture_error(&self);
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let status = self.status();
        let body = Json(json!({ "error": self.client_message() }));
        (status, body).into_response()
    }
}

/// Attach the signed-in operator to the Sentry scope.
pub fn set_sentry_user(id: i32, email: &str) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(id.to_string()),
            email: Some(email.to_string()),
            ..Default::default()
        }));
    });
}

/// Remove the operator from the Sentry scope after logout.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_forbidden_keeps_its_message() {
        let error = AppError::Forbidden("Administrator account required".to_string());
        assert_eq!(error.status(), StatusCode::FORBIDDEN);
        assert_eq!(error.client_message(), "Administrator account required");
        assert!(!error.is_server_fault());
    }

    #[test]
    fn test_backend_not_found_passes_through() {
        let error = AppError::Api(ApiError::Rejected {
            status: 404,
            message: "Vendor not found".to_string(),
        });
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.client_message(), "Vendor not found");
    }

    #[test]
    fn test_backend_5xx_is_server_fault() {
        let error = AppError::Api(ApiError::Rejected {
            status: 502,
            message: "upstream".to_string(),
        });
        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
        assert!(error.is_server_fault());
    }
}
