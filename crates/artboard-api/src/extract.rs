//! Session extractors: the page-level gate and its API/optional variants

use std::convert::Infallible;

use artboard_core::services::decide_access;
use artboard_core::{AccessDecision, AuthUser, RoleRequirement};
use artboard_shared::constants::LOGIN_PATH;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};

use crate::cookies::{session_cookies, PendingCookies};
use crate::error::ApiError;
use crate::state::AppState;

/// Session already resolved earlier in this request.
#[derive(Debug, Clone)]
pub struct ResolvedSession(pub Option<AuthUser>);

/// Resolves the request's session at most once.
///
/// The first caller asks the auth service and records the result in the
/// request extensions; later callers (the page gate after the route gate)
/// reuse it. Cookie rotations go to [`PendingCookies`].
pub async fn resolve_request(state: &AppState, parts: &mut Parts) -> Option<AuthUser> {
    if let Some(ResolvedSession(user)) = parts.extensions.get::<ResolvedSession>() {
        return user.clone();
    }

    let cookies = session_cookies(&parts.headers, &state.cookies);
    let resolution = state.resolver.resolve(&cookies).await;

    match parts.extensions.get::<PendingCookies>() {
        Some(pending) => pending.extend(resolution.cookies),
        None if !resolution.cookies.is_empty() => {
            tracing::warn!("Session cookies changed but no cookie propagation layer is installed");
        }
        None => {}
    }

    parts.extensions.insert(ResolvedSession(resolution.user.clone()));
    resolution.user
}

/// Page-level gate: pages in the authenticated section take this and never
/// render without a session.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub AuthUser);

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        let user = resolve_request(&state, parts).await;

        let decision = decide_access(Some(&RoleRequirement::Authenticated), user.as_ref());
        match (decision, user) {
            (AccessDecision::Allow, Some(user)) => Ok(AuthenticatedUser(user)),
            (AccessDecision::Redirect(target), _) => {
                tracing::info!(path = %parts.uri.path(), redirect = target, "Page gate redirect");
                Err(Redirect::to(target).into_response())
            }
            (AccessDecision::Allow, None) => Err(Redirect::to(LOGIN_PATH).into_response()),
        }
    }
}

/// For JSON endpoints: no session is a 401, not a redirect.
#[derive(Debug, Clone)]
pub struct ApiUser(pub AuthUser);

impl<S> FromRequestParts<S> for ApiUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        resolve_request(&state, parts)
            .await
            .map(ApiUser)
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}

/// The current user if there is one. Never rejects.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<AuthUser>);

impl<S> FromRequestParts<S> for MaybeUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);
        Ok(MaybeUser(resolve_request(&state, parts).await))
    }
}
