use artboard_shared::constants::{
    AUTH_CALLBACK_PATH, DASHBOARD_PATH, LOGIN_PATH, NOT_FOUND_PATH, REGISTER_PATH,
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::handlers::{auth, gallery, health, pages, reports};
use crate::middleware::{propagate_session_cookies, route_gate};
use crate::state::AppState;

/// Builds the application router.
///
/// Layer order, outermost first: request id, tracing, cookie propagation,
/// route gate. The cookie layer sits outside the gate so
/// redirects issued by the gate still carry rotated or cleared cookies.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Pages
        .route("/", get(pages::home))
        .route(LOGIN_PATH, get(pages::login))
        .route(REGISTER_PATH, get(pages::register))
        .route("/about", get(pages::about))
        .route("/faq", get(pages::faq))
        .route("/gallery", get(pages::gallery))
        .route("/plagiarism-checker", get(pages::plagiarism_checker))
        .route(DASHBOARD_PATH, get(pages::dashboard))
        .route("/admin", get(pages::admin))
        .route(NOT_FOUND_PATH, get(pages::not_found_page))
        // Auth routes
        .route(AUTH_CALLBACK_PATH, get(auth::callback).post(auth::callback))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/session", get(auth::current_session))
        // App endpoints
        .route("/api/reports", post(reports::submit_report))
        .route("/api/gallery/posts/{id}/vote", post(gallery::vote))
        .fallback(pages::fallback)
        .layer(middleware::from_fn_with_state(state.clone(), route_gate))
        .layer(middleware::from_fn_with_state(state.clone(), propagate_session_cookies))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::new().include_headers(false)))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
