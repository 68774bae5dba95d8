//! Gallery post votes

use artboard_core::{GalleryAction, GuardOutcome};
use axum::{
    extract::Path,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ApiError;
use crate::extract::MaybeUser;
use crate::response::ApiResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    fn action(self) -> GalleryAction {
        match self {
            VoteDirection::Up => GalleryAction::UpVote,
            VoteDirection::Down => GalleryAction::DownVote,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub direction: VoteDirection,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteAccepted {
    pub post_id: String,
    pub direction: VoteDirection,
}

/// Vote on a post - POST /api/gallery/posts/{id}/vote
pub async fn vote(
    MaybeUser(user): MaybeUser,
    Path(post_id): Path<String>,
    Json(request): Json<VoteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<VoteAccepted>>), ApiError> {
    let voter = match request.direction.action().guard(user.as_ref()) {
        GuardOutcome::Proceed(user) => user,
        GuardOutcome::LoginRequired(message) => {
            return Err(ApiError::Unauthorized(message.to_string()))
        }
    };

    if post_id.trim().is_empty() {
        return Err(ApiError::BadRequest("Post id is required".to_string()));
    }

    info!(voter = %voter.id, post_id = %post_id, direction = ?request.direction, "Vote recorded");

    Ok((
        StatusCode::ACCEPTED,
        Json(ApiResponse::success(VoteAccepted { post_id, direction: request.direction })),
    ))
}
