//! Wire types of the auth API

use artboard_core::{AuthSession, AuthUser};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub(crate) struct UserResponse {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub app_metadata: AppMetadata,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AppMetadata {
    #[serde(default)]
    pub role: Option<String>,
}

impl From<UserResponse> for AuthUser {
    /// Application roles live in `app_metadata`; the top-level role is the
    /// database role and only used when no application role is set.
    fn from(user: UserResponse) -> Self {
        let role = user
            .app_metadata
            .role
            .filter(|r| !r.is_empty())
            .or(user.role.filter(|r| !r.is_empty()));
        AuthUser::new(user.id, user.email.filter(|e| !e.is_empty()), role)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SessionResponse {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub expires_in: i64,
    #[serde(default)]
    pub expires_at: Option<i64>,
    pub user: UserResponse,
}

impl From<SessionResponse> for AuthSession {
    fn from(session: SessionResponse) -> Self {
        AuthSession {
            access_token: session.access_token,
            refresh_token: session.refresh_token,
            expires_in: session.expires_in,
            expires_at: session.expires_at,
            user: session.user.into(),
        }
    }
}

/// Sign-up answers with a session when confirmation is off, a bare user otherwise.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SignUpResponse {
    Session(SessionResponse),
    User(UserResponse),
}

/// The API has used several error shapes over time.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub error_description: Option<String>,
    #[serde(default)]
    pub msg: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn into_message(self) -> Option<String> {
        self.error_description
            .or(self.msg)
            .or(self.message)
            .or(self.error)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RefreshTokenGrant<'a> {
    pub refresh_token: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct PkceGrant<'a> {
    pub auth_code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_verifier: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignUpBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub code_challenge: &'a str,
    pub code_challenge_method: &'a str,
}
