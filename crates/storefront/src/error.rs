//! Application error types and HTTP responses.
//!
//! Every handler returns [`AppError`], which renders as the same JSON
//! body the commerce API uses: `{"error": message}`. Server faults are
//! reported to Sentry before the response is built; client mistakes
//! (bad input, missing auth) are not.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::commerce::ApiError;

/// Storefront error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Commerce API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Session persistence failed.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),

    /// Request referenced something that does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Request requires a signed-in shopper.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Request was malformed or violated a precondition.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Request cannot proceed in the current state.
    #[error("conflict: {0}")]
    Conflict(String),
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
                ApiError::Rejected { status, .. } => StatusCode::from_u16(*status)
                    .unwrap_or(StatusCode::BAD_GATEWAY),
            },
            Self::Session(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    /// Message safe to show a shopper.
    pub(crate) fn client_message(&self) -> String {
        match self {
            Self::Api(api) => match api {
                ApiError::Transport(_) | ApiError::Payload(_) => {
                    "Store is temporarily unavailable. Please try again.".to_string()
                }
                ApiError::AuthRequired { message } | ApiError::Rejected { message, .. } => {
                    message.clone()
                }
            },
            Self::Session(_) => "Internal server error".to_string(),
            Self::NotFound(message)
            | Self::Unauthorized(message)
            | Self::BadRequest(message)
            | Self::Conflict(message) => message.clone(),
        }
    }

    /// Whether this error is our fault rather than the caller's.
    fn is_server_fault(&self) -> bool {
        match self {
            Self::Api(api) => api.is_server_fault(),
            Self::Session(_) => true,
            Self::NotFound(_) | Self::Unauthorized(_) | Self::BadRequest(_) | Self::Conflict(_) => {
                false
            }
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

/// Attach the signed-in user to the Sentry scope.
pub fn set_sentry_user(id: i32, email: &str) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(id.to_string()),
            email: Some(email.to_string()),
            ..Default::default()
        }));
    });
}

/// Remove the user from the Sentry scope after logout.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Record a navigation-level breadcrumb for error context.
pub fn add_breadcrumb(category: &str, message: &str) {
    sentry::add_breadcrumb(sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    });
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_status_passes_through() {
        let error = AppError::Api(ApiError::Rejected {
            status: 404,
            message: "Product not found".to_string(),
        });
        assert_eq!(error.status(), StatusCode::NOT_FOUND);
        assert_eq!(error.client_message(), "Product not found");
        assert!(!error.is_server_fault());
    }

    #[test]
    fn test_backend_5xx_is_server_fault() {
        let error = AppError::Api(ApiError::Rejected {
            status: 500,
            message: "boom".to_string(),
        });
        assert!(error.is_server_fault());
    }

    #[test]
    fn test_auth_required_maps_to_401() {
        let error = AppError::Api(ApiError::AuthRequired {
            message: "Token has expired".to_string(),
        });
        assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(error.client_message(), "Token has expired");
    }

    #[test]
    fn test_payload_errors_hide_detail_from_clients() {
        let decode_error =
            serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = AppError::Api(ApiError::Payload(decode_error));
        assert_eq!(error.status(), StatusCode::BAD_GATEWAY);
        assert!(error.client_message().starts_with("Store is temporarily"));
        assert!(error.is_server_fault());
    }

    #[test]
    fn test_conflict_keeps_its_message() {
        let error = AppError::Conflict("Add a delivery address to continue".to_string());
        assert_eq!(error.status(), StatusCode::CONFLICT);
        assert_eq!(error.client_message(), "Add a delivery address to continue");
    }
}
