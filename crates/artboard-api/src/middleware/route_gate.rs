use artboard_core::services::decide_access;
use artboard_core::AccessDecision;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{debug, info};

use crate::extract::resolve_request;
use crate::state::AppState;

/// Route authorization gate.
///
/// Paths no rule matches go through untouched, without a session lookup.
/// For a matching rule the session is resolved and the shared decision is
/// applied; a redirect ends the request here.
pub async fn route_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();
    let Some(requirement) = state.rules.requirement_for(&path).cloned() else {
        return next.run(request).await;
    };

    let (mut parts, body) = request.into_parts();
    let user = resolve_request(&state, &mut parts).await;

    match decide_access(Some(&requirement), user.as_ref()) {
        AccessDecision::Allow => {
            debug!(%path, "Route gate allowed request");
            next.run(Request::from_parts(parts, body)).await
        }
        AccessDecision::Redirect(target) => {
            info!(%path, redirect = target, authenticated = user.is_some(), "Route gate redirect");
            Redirect::to(target).into_response()
        }
    }
}
