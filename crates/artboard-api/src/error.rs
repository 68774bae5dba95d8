use artboard_core::{AuthError, DomainError};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        match error {
            DomainError::Auth(AuthError::Rejected(msg)) => ApiError::Unauthorized(msg),
            DomainError::Auth(e) => ApiError::ServiceUnavailable(e.to_string()),
            DomainError::Report(e) => ApiError::Validation(e.to_string()),
            e @ (DomainError::InvalidRoutePattern { .. } | DomainError::ReportDelivery(_)) => {
                ApiError::InternalError(e.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Unauthorized(msg) => {
                tracing::warn!("Unauthorized: {}", msg);
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg)
            }
            ApiError::Validation(msg) => {
                tracing::warn!("Validation failed: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", msg)
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg)
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!("Auth service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "AUTH_SERVICE_UNAVAILABLE", msg)
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ApiResponse::<()>::error(code, &message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use artboard_core::{ReportError, ReportReason};

    #[test]
    fn maps_domain_errors_to_status() {
        let cases = [
            (DomainError::Auth(AuthError::Rejected("bad".into())), StatusCode::UNAUTHORIZED),
            (DomainError::Auth(AuthError::Transport("down".into())), StatusCode::SERVICE_UNAVAILABLE),
            (
                DomainError::Report(ReportError::MissingContext(ReportReason::Other)),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (DomainError::ReportDelivery("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, status) in cases {
            assert_eq!(ApiError::from(error).into_response().status(), status);
        }
    }
}
