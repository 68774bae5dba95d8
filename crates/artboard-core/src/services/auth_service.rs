// ============================================================================
// Artboard Core - Authentication Service
// File: crates/artboard-core/src/services/auth_service.rs
// ============================================================================
//! Sign-in, sign-up, sign-out and the auth callback exchange

use std::sync::Arc;

use artboard_shared::constants::AUTH_CALLBACK_PATH;
use artboard_shared::utils::{join_url, mask_email};
use artboard_shared::CookieSettings;
use tracing::{info, warn};

use crate::domain::{AuthUser, CookieMutation, SignUpOutcome};
use crate::error::DomainError;
use crate::ports::{AuthProvider, SignUpRequest};
use crate::services::pkce::PkcePair;

/// Authentication flows. Every outcome carries the cookie writes the HTTP
/// layer must apply.
#[derive(Clone)]
pub struct AuthService {
    provider: Arc<dyn AuthProvider>,
    cookies: CookieSettings,
    callback_url: String,
}

impl AuthService {
    pub fn new(provider: Arc<dyn AuthProvider>, cookies: CookieSettings, site_url: &str) -> Self {
        Self {
            provider,
            cookies,
            callback_url: join_url(site_url, AUTH_CALLBACK_PATH),
        }
    }

    pub fn callback_url(&self) -> &str {
        &self.callback_url
    }

    /// Login with email and password
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResult, DomainError> {
        info!("Login attempt for email: {}", mask_email(email));

        let session = self
            .provider
            .sign_in_with_password(email, password)
            .await
            .inspect_err(|e| warn!("Login failed for {}: {}", mask_email(email), e))?;

        info!(user_id = %session.user.id, "Login successful");

        Ok(LoginResult {
            cookies: CookieMutation::store_session(&self.cookies, &session),
            user: session.user,
        })
    }

    /// Register a new account. Confirmation links come back through the callback.
    pub async fn register(&self, email: &str, password: &str) -> Result<RegisterResult, DomainError> {
        info!("Registration attempt for email: {}", mask_email(email));

        let pkce = PkcePair::generate();
        let outcome = self
            .provider
            .sign_up(SignUpRequest {
                email: email.to_string(),
                password: password.to_string(),
                redirect_to: self.callback_url.clone(),
                code_challenge: pkce.challenge,
            })
            .await
            .inspect_err(|e| warn!("Registration failed for {}: {}", mask_email(email), e))?;

        let mut cookies = vec![CookieMutation::Set {
            name: self.cookies.code_verifier_name(),
            value: pkce.verifier,
        }];

        let result = match outcome {
            SignUpOutcome::ConfirmationRequired(user) => {
                info!(user_id = %user.id, "Registration pending email confirmation");
                RegisterResult { user, requires_email_confirmation: true, cookies }
            }
            SignUpOutcome::SignedIn(session) => {
                info!(user_id = %session.user.id, "Registration signed in immediately");
                cookies.extend(CookieMutation::store_session(&self.cookies, &session));
                RegisterResult { user: session.user, requires_email_confirmation: false, cookies }
            }
        };

        Ok(result)
    }

    /// Exchange an auth callback code for a session.
    ///
    /// Without a code the auth service is not called. A failed exchange is
    /// logged and yields no session cookies; the caller redirects either way.
    pub async fn exchange_code(&self, code: Option<&str>, code_verifier: Option<String>) -> CallbackOutcome {
        let Some(code) = code.filter(|c| !c.is_empty()) else {
            return CallbackOutcome::default();
        };

        let mut cookies = Vec::new();
        if code_verifier.is_some() {
            cookies.push(CookieMutation::Remove { name: self.cookies.code_verifier_name() });
        }

        match self.provider.exchange_code(code, code_verifier).await {
            Ok(session) => {
                info!(user_id = %session.user.id, "Auth code exchanged for session");
                cookies.extend(CookieMutation::store_session(&self.cookies, &session));
                CallbackOutcome { user: Some(session.user), cookies }
            }
            Err(e) => {
                warn!("Auth code exchange failed: {}", e);
                CallbackOutcome { user: None, cookies }
            }
        }
    }

    /// Sign out at the auth service (best effort) and drop the session cookies.
    pub async fn logout(&self, access_token: Option<&str>) -> Vec<CookieMutation> {
        if let Some(token) = access_token {
            if let Err(e) = self.provider.sign_out(token).await {
                warn!("Sign-out at auth service failed: {}", e);
            }
        }
        CookieMutation::clear_session(&self.cookies)
    }
}

/// Result of successful login
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub user: AuthUser,
    pub cookies: Vec<CookieMutation>,
}

/// Result of successful registration
#[derive(Debug, Clone)]
pub struct RegisterResult {
    pub user: AuthUser,
    pub requires_email_confirmation: bool,
    pub cookies: Vec<CookieMutation>,
}

#[derive(Debug, Clone, Default)]
pub struct CallbackOutcome {
    pub user: Option<AuthUser>,
    pub cookies: Vec<CookieMutation>,
}
