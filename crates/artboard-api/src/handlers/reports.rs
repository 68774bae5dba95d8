//! Artwork report submission

use artboard_core::{GalleryAction, GuardOutcome, ReportForm, ReportPayload};
use axum::{extract::State, http::StatusCode, Json};

use crate::error::ApiError;
use crate::extract::MaybeUser;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Submit report - POST /api/reports
///
/// Anonymous callers get the gallery's login-required message. Forms whose
/// reason needs context and has none are refused before the sink sees them.
pub async fn submit_report(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Json(form): Json<ReportForm>,
) -> Result<(StatusCode, Json<ApiResponse<ReportPayload>>), ApiError> {
    let reporter = match GalleryAction::Report.guard(user.as_ref()) {
        GuardOutcome::Proceed(user) => user,
        GuardOutcome::LoginRequired(message) => {
            return Err(ApiError::Unauthorized(message.to_string()))
        }
    };

    let payload = state.reports.submit(reporter, form).await?;

    Ok((StatusCode::ACCEPTED, Json(ApiResponse::success(payload))))
}
