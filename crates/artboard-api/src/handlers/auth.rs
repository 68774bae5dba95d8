// ============================================================================
// Artboard API - Auth Handlers
// File: crates/artboard-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (login, register, logout, callback)

use artboard_core::AuthUser;
use artboard_shared::constants::DASHBOARD_PATH;
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::Redirect,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;
use validator::Validate;

use crate::cookies::{parse_cookie, PendingCookies};
use crate::error::ApiError;
use crate::extract::ApiUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Register request payload
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    #[validate(length(min = 6, max = 128, message = "Password must be between 6 and 128 characters"))]
    pub password: String,
}

/// Query the auth service appends to the callback URL
#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Authentication response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: AuthUser,
}

/// Register success response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: AuthUser,
    pub requires_email_confirmation: bool,
    pub message: String,
}

fn validate<T: Validate>(payload: &T) -> Result<(), ApiError> {
    payload.validate().map_err(|e| ApiError::Validation(e.to_string()))
}

/// Login handler - POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Extension(pending): Extension<PendingCookies>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<ApiResponse<AuthResponse>>, ApiError> {
    validate(&payload)?;

    let result = state.auth.login(&payload.email, &payload.password).await?;
    pending.extend(result.cookies);

    Ok(Json(ApiResponse::success(AuthResponse { user: result.user })))
}

/// Register handler - POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Extension(pending): Extension<PendingCookies>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RegisterResponse>>), ApiError> {
    validate(&payload)?;

    let result = state.auth.register(&payload.email, &payload.password).await?;
    pending.extend(result.cookies);

    let message = if result.requires_email_confirmation {
        "Registration successful. Please check your email to confirm your account."
    } else {
        "Registration successful."
    };

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(RegisterResponse {
            user: result.user,
            requires_email_confirmation: result.requires_email_confirmation,
            message: message.to_string(),
        })),
    ))
}

/// Logout handler - POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    Extension(pending): Extension<PendingCookies>,
    headers: HeaderMap,
) -> Json<ApiResponse<()>> {
    let access_token = parse_cookie(&headers, &state.cookies.access_token_name());
    pending.extend(state.auth.logout(access_token.as_deref()).await);
    Json(ApiResponse::success(()))
}

/// Current session - GET /api/auth/session
pub async fn current_session(ApiUser(user): ApiUser) -> Json<ApiResponse<AuthResponse>> {
    Json(ApiResponse::success(AuthResponse { user }))
}

/// Auth callback - GET|POST /auth/callback?code=...
///
/// Always lands on the dashboard; when no session came out of the exchange
/// the route gate sends the browser on to the login page.
pub async fn callback(
    State(state): State<AppState>,
    Extension(pending): Extension<PendingCookies>,
    headers: HeaderMap,
    Query(query): Query<CallbackQuery>,
) -> Redirect {
    if let Some(error) = &query.error {
        warn!(
            error = %error,
            description = query.error_description.as_deref().unwrap_or(""),
            "Auth service returned an error to the callback"
        );
    }

    let verifier = parse_cookie(&headers, &state.cookies.code_verifier_name());
    let outcome = state.auth.exchange_code(query.code.as_deref(), verifier).await;
    pending.extend(outcome.cookies);

    Redirect::to(DASHBOARD_PATH)
}
