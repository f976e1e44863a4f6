//! Like handler

use axum::{extract::State, Json};
use junban_domain::{
    like::LikeOutcome,
    ports::{EventPublisher, PageRepository},
};
use tracing::{error, info, warn};

use crate::{
    dto::like::{ErrorResponse, LikeRequest, LikeResponse},
    handlers::error::ApiError,
    AppState,
};

/// Handle like requests
#[utoipa::path(
    post,
    path = "/api/like",
    request_body = LikeRequest,
    responses(
        (status = 200, description = "Like published, or ignored because publishing is not configured", body = LikeResponse),
        (status = 500, description = "The publish sink rejected the event", body = ErrorResponse)
    ),
    tag = "likes"
)]
pub async fn like_handler<R, P>(
    State(state): State<AppState<R, P>>,
    Json(payload): Json<LikeRequest>,
) -> Result<Json<LikeResponse>, ApiError>
where
    R: PageRepository,
    P: EventPublisher,
{
    match state
        .ordering_service
        .record_like(&payload.page_id, &payload.id)
        .await
    {
        Ok(outcome) => {
            match &outcome {
                LikeOutcome::Published { message_id } => info!(
                    page_id = %payload.page_id,
                    message_id = %message_id,
                    "Published like event"
                ),
                LikeOutcome::Ignored { reason } => warn!(
                    page_id = %payload.page_id,
                    id = %payload.id,
                    reason = %reason,
                    "Like event ignored"
                ),
            }
            Ok(Json(LikeResponse::from(outcome)))
        }
        Err(err) => {
            error!(error = ?err, page_id = %payload.page_id, "Failed to publish like event");
            Err(ApiError(err))
        }
    }
}
