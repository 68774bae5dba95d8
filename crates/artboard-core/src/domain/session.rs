//! Session tokens and the cookie writes that carry them

use artboard_shared::CookieSettings;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::AuthUser;

/// Token pair issued by the external auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub expires_at: Option<i64>,
    pub user: AuthUser,
}

impl AuthSession {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at.and_then(|ts| DateTime::from_timestamp(ts, 0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignUpOutcome {
    /// Email confirmation pending; the callback finishes the sign-up.
    ConfirmationRequired(AuthUser),
    SignedIn(AuthSession),
}

/// Session cookie values found on an inbound request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionCookies {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl SessionCookies {
    /// Reads the session cookies through `lookup`, treating empty values as absent.
    pub fn read<F>(settings: &CookieSettings, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: String| lookup(&name).filter(|v| !v.is_empty());
        Self {
            access_token: non_empty(settings.access_token_name()),
            refresh_token: non_empty(settings.refresh_token_name()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.access_token.is_none() && self.refresh_token.is_none()
    }
}

/// A cookie write that must reach the outgoing response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieMutation {
    Set { name: String, value: String },
    Remove { name: String },
}

impl CookieMutation {
    pub fn name(&self) -> &str {
        match self {
            CookieMutation::Set { name, .. } | CookieMutation::Remove { name } => name,
        }
    }

    /// Writes for both session cookies after a session is issued or rotated.
    pub fn store_session(settings: &CookieSettings, session: &AuthSession) -> Vec<Self> {
        vec![
            CookieMutation::Set {
                name: settings.access_token_name(),
                value: session.access_token.clone(),
            },
            CookieMutation::Set {
                name: settings.refresh_token_name(),
                value: session.refresh_token.clone(),
            },
        ]
    }

    pub fn clear_session(settings: &CookieSettings) -> Vec<Self> {
        vec![
            CookieMutation::Remove { name: settings.access_token_name() },
            CookieMutation::Remove { name: settings.refresh_token_name() },
        ]
    }
}

/// Outcome of resolving a request's session: who it is, and which cookies changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionResolution {
    pub user: Option<AuthUser>,
    pub cookies: Vec<CookieMutation>,
}

impl SessionResolution {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(user: AuthUser) -> Self {
        Self { user: Some(user), cookies: Vec::new() }
    }

    pub fn user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn reads_configured_cookie_names() {
        let settings = CookieSettings::default();
        let jar: HashMap<&str, &str> =
            [("sb-access-token", "at"), ("sb-refresh-token", ""), ("other", "x")].into();

        let cookies = SessionCookies::read(&settings, |name| jar.get(name).map(|v| v.to_string()));

        assert_eq!(cookies.access_token.as_deref(), Some("at"));
        assert_eq!(cookies.refresh_token, None);
        assert!(!cookies.is_empty());
    }

    #[test]
    fn clear_session_targets_both_cookies() {
        let settings = CookieSettings { prefix: "art".into(), ..Default::default() };
        let names: Vec<_> = CookieMutation::clear_session(&settings)
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        assert_eq!(names, vec!["art-access-token", "art-refresh-token"]);
    }
}
