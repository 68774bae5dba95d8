//! Resolves the user behind a request's session cookies

use std::sync::Arc;

use artboard_shared::CookieSettings;
use tracing::{debug, warn};

use crate::domain::{CookieMutation, SessionCookies, SessionResolution};
use crate::error::AuthError;
use crate::ports::AuthProvider;

/// Turns session cookies into `user | none`.
///
/// Resolution never fails: a refused session is anonymous, and so is a
/// session the auth service could not be asked about.
#[derive(Clone)]
pub struct SessionResolver {
    provider: Arc<dyn AuthProvider>,
    cookies: CookieSettings,
}

impl SessionResolver {
    pub fn new(provider: Arc<dyn AuthProvider>, cookies: CookieSettings) -> Self {
        Self { provider, cookies }
    }

    pub fn cookie_settings(&self) -> &CookieSettings {
        &self.cookies
    }

    pub async fn resolve(&self, session: &SessionCookies) -> SessionResolution {
        if session.is_empty() {
            return SessionResolution::anonymous();
        }

        if let Some(access_token) = session.access_token.as_deref() {
            match self.provider.get_user(access_token).await {
                Ok(user) => {
                    debug!(user_id = %user.id, "Session resolved");
                    return SessionResolution::authenticated(user);
                }
                Err(AuthError::Rejected(reason)) => {
                    debug!(%reason, "Access token refused, trying refresh");
                }
                Err(e) => return fail_closed(e),
            }
        }

        let Some(refresh_token) = session.refresh_token.as_deref() else {
            return SessionResolution {
                user: None,
                cookies: CookieMutation::clear_session(&self.cookies),
            };
        };

        match self.provider.refresh_session(refresh_token).await {
            Ok(rotated) => {
                debug!(user_id = %rotated.user.id, "Session refreshed");
                SessionResolution {
                    cookies: CookieMutation::store_session(&self.cookies, &rotated),
                    user: Some(rotated.user),
                }
            }
            Err(AuthError::Rejected(reason)) => {
                debug!(%reason, "Refresh token refused, clearing session cookies");
                SessionResolution {
                    user: None,
                    cookies: CookieMutation::clear_session(&self.cookies),
                }
            }
            Err(e) => fail_closed(e),
        }
    }
}

fn fail_closed(error: AuthError) -> SessionResolution {
    warn!(error = %error, "Could not resolve session, treating request as anonymous");
    SessionResolution::anonymous()
}
