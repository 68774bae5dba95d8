use axum::{
    extract::{Request, State},
    http::header::SET_COOKIE,
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::cookies::{render_set_cookie, PendingCookies};
use crate::state::AppState;

/// Outermost layer: gives the request a [`PendingCookies`] collector and
/// writes whatever was collected onto the response, redirects included.
pub async fn propagate_session_cookies(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let pending = PendingCookies::default();
    request.extensions_mut().insert(pending.clone());

    let mut response = next.run(request).await;

    for mutation in pending.take() {
        match render_set_cookie(&mutation, &state.cookies) {
            Ok(value) => {
                debug!(cookie = mutation.name(), "Writing session cookie");
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => warn!(cookie = mutation.name(), "Dropping unrenderable cookie: {}", e),
        }
    }

    response
}
