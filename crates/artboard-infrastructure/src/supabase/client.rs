use std::time::Duration;

use artboard_core::ports::{AuthProvider, SignUpRequest};
use artboard_core::services::pkce::CHALLENGE_METHOD;
use artboard_core::{AuthError, AuthSession, AuthUser, SignUpOutcome};
use artboard_shared::config::SupabaseSettings;
use artboard_shared::utils::join_url;
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::models::{
    ErrorResponse, PasswordGrant, PkceGrant, RefreshTokenGrant, SessionResponse, SignUpBody,
    SignUpResponse, UserResponse,
};

/// Auth API client. Built once at startup and shared by every request.
#[derive(Clone)]
pub struct SupabaseAuthClient {
    client: Client,
    auth_url: String,
    anon_key: String,
}

impl SupabaseAuthClient {
    pub fn new(settings: &SupabaseSettings, timeout_seconds: u64) -> Result<Self, AuthError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds.max(1)))
            .build()
            .map_err(|e| AuthError::Unexpected(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::with_client(client, settings))
    }

    pub fn with_client(client: Client, settings: &SupabaseSettings) -> Self {
        Self {
            client,
            auth_url: join_url(&settings.url, "auth/v1"),
            anon_key: settings.anon_key.clone(),
        }
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, AuthError> {
        let url = join_url(&self.auth_url, path);
        let parsed = if params.is_empty() {
            Url::parse(&url)
        } else {
            Url::parse_with_params(&url, params)
        };
        parsed.map_err(|e| AuthError::Unexpected(format!("Invalid auth URL {}: {}", url, e)))
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("apikey", &self.anon_key)
    }

    async fn token_grant<B: serde::Serialize + ?Sized>(
        &self,
        grant_type: &str,
        body: &B,
    ) -> Result<AuthSession, AuthError> {
        debug!(grant_type, "Requesting token grant");
        let url = self.endpoint("token", &[("grant_type", grant_type)])?;
        let response = send(self.with_key(self.client.post(url)).json(body)).await?;
        let session: SessionResponse = decode(response).await?;
        Ok(session.into())
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuthClient {
    async fn get_user(&self, access_token: &str) -> Result<AuthUser, AuthError> {
        let url = self.endpoint("user", &[])?;
        let response = send(self.with_key(self.client.get(url)).bearer_auth(access_token)).await?;
        let user: UserResponse = decode(response).await?;
        Ok(user.into())
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<AuthSession, AuthError> {
        self.token_grant("refresh_token", &RefreshTokenGrant { refresh_token }).await
    }

    async fn exchange_code(
        &self,
        auth_code: &str,
        code_verifier: Option<String>,
    ) -> Result<AuthSession, AuthError> {
        self.token_grant("pkce", &PkceGrant { auth_code, code_verifier }).await
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthSession, AuthError> {
        self.token_grant("password", &PasswordGrant { email, password }).await
    }

    async fn sign_up(&self, request: SignUpRequest) -> Result<SignUpOutcome, AuthError> {
        let url = self.endpoint("signup", &[("redirect_to", request.redirect_to.as_str())])?;
        let body = SignUpBody {
            email: &request.email,
            password: &request.password,
            code_challenge: &request.code_challenge,
            code_challenge_method: CHALLENGE_METHOD,
        };
        let response = send(self.with_key(self.client.post(url)).json(&body)).await?;
        Ok(match decode::<SignUpResponse>(response).await? {
            SignUpResponse::Session(session) => SignUpOutcome::SignedIn(session.into()),
            SignUpResponse::User(user) => SignUpOutcome::ConfirmationRequired(user.into()),
        })
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let url = self.endpoint("logout", &[])?;
        send(self.with_key(self.client.post(url)).bearer_auth(access_token)).await?;
        Ok(())
    }
}

async fn send(request: RequestBuilder) -> Result<Response, AuthError> {
    let response = request
        .send()
        .await
        .map_err(|e| AuthError::Transport(e.to_string()))?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .and_then(ErrorResponse::into_message)
        .unwrap_or_else(|| format!("{} {}", status, body));

    if is_rejection(status) {
        Err(AuthError::Rejected(message))
    } else {
        Err(AuthError::Unexpected(format!("{}: {}", status, message)))
    }
}

/// Statuses the auth API uses to refuse a token, code, or credential.
fn is_rejection(status: StatusCode) -> bool {
    matches!(
        status,
        StatusCode::BAD_REQUEST
            | StatusCode::UNAUTHORIZED
            | StatusCode::FORBIDDEN
            | StatusCode::NOT_FOUND
            | StatusCode::UNPROCESSABLE_ENTITY
    )
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, AuthError> {
    response
        .json::<T>()
        .await
        .map_err(|e| AuthError::Unexpected(format!("Failed to decode auth response: {}", e)))
}
