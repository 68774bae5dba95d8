//! Cookie header parsing and `Set-Cookie` rendering

use std::sync::Arc;

use artboard_core::{CookieMutation, SessionCookies};
use artboard_shared::CookieSettings;
use axum::http::{header, HeaderMap, HeaderValue};
use parking_lot::Mutex;

/// Value of cookie `name`, searching every `Cookie` header on the request.
///
/// Pairs are decoded one at a time; a pair that is not UTF-8 is skipped
/// without hiding the rest of the header.
pub fn parse_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .flat_map(|value| value.as_bytes().split(|b| *b == b';'))
        .filter_map(|pair| std::str::from_utf8(pair).ok())
        .find_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name).then(|| value.trim_matches('"').to_string())
        })
}

pub fn session_cookies(headers: &HeaderMap, settings: &CookieSettings) -> SessionCookies {
    SessionCookies::read(settings, |name| parse_cookie(headers, name))
}

/// Renders a mutation with the shared cookie attributes.
pub fn render_set_cookie(
    mutation: &CookieMutation,
    settings: &CookieSettings,
) -> Result<HeaderValue, header::InvalidHeaderValue> {
    let (name, value, max_age) = match mutation {
        CookieMutation::Set { name, value } => (name.as_str(), value.as_str(), settings.max_age_seconds),
        CookieMutation::Remove { name } => (name.as_str(), "", 0),
    };

    let mut cookie = format!(
        "{}={}; Path={}; Max-Age={}; HttpOnly; SameSite={}",
        name,
        value,
        settings.path,
        max_age,
        settings.same_site.as_str()
    );
    if let Some(domain) = &settings.domain {
        cookie.push_str("; Domain=");
        cookie.push_str(domain);
    }
    if settings.secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Cookie writes collected while a request is handled, flushed onto the
/// response by [`crate::middleware::propagate_session_cookies`].
#[derive(Debug, Clone, Default)]
pub struct PendingCookies(Arc<Mutex<Vec<CookieMutation>>>);

impl PendingCookies {
    pub fn extend(&self, mutations: impl IntoIterator<Item = CookieMutation>) {
        self.0.lock().extend(mutations);
    }

    pub fn take(&self) -> Vec<CookieMutation> {
        std::mem::take(&mut *self.0.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.0.lock().is_empty()
    }
}
