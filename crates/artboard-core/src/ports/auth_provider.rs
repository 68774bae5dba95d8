//! External auth service port

use async_trait::async_trait;

use crate::domain::{AuthSession, AuthUser, SignUpOutcome};
use crate::error::AuthError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    /// Where the confirmation email sends the user back to.
    pub redirect_to: String,
    pub code_challenge: String,
}

/// Identity operations delegated to the hosted auth service.
///
/// A refused token or credential is `AuthError::Rejected`; anything else is a
/// failure to talk to the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError>;

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, AuthError>;

    async fn exchange_code(
        &self,
        auth_code: &str,
        code_verifier: Option<String>,
    ) -> Result<AuthSession, AuthError>;

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError>;

    async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpOutcome, AuthError>;

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
}
