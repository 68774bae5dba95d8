//! Domain errors

use thiserror::Error;

use crate::domain::ReportReason;

/// Failure talking to the external auth service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The service answered and refused the token, code, or credentials.
    #[error("Rejected by auth service: {0}")]
    Rejected(String),

    /// The service could not be reached.
    #[error("Auth service unreachable: {0}")]
    Transport(String),

    /// The service answered with something we cannot interpret.
    #[error("Unexpected auth service response: {0}")]
    Unexpected(String),
}

impl AuthError {
    pub fn is_rejection(&self) -> bool {
        matches!(self, AuthError::Rejected(_))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("{}", .0.missing_context_message())]
    MissingContext(ReportReason),
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid route pattern `{pattern}`: {reason}")]
    InvalidRoutePattern { pattern: String, reason: String },

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("Report could not be delivered: {0}")]
    ReportDelivery(String),
}
