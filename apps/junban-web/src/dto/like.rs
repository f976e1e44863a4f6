//! DTOs for the like endpoint

use junban_domain::like::LikeOutcome;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for the like endpoint
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    /// Page the liked entry belongs to
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    #[serde(alias = "page_id")]
    pub page_id: String,
    /// The liked name
    #[schema(example = "Alice")]
    pub id: String,
}

/// Response body for a handled like
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    /// `success` when published, `ignored` when publishing is not configured
    #[schema(example = "success")]
    pub status: String,
    /// Sink-assigned message id
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "0-42")]
    pub message_id: Option<String>,
    /// Why the like was ignored
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "publisher not configured")]
    pub reason: Option<String>,
}

impl From<LikeOutcome> for LikeResponse {
    fn from(outcome: LikeOutcome) -> Self {
        match outcome {
            LikeOutcome::Published { message_id } => Self {
                status: "success".to_string(),
                message_id: Some(message_id),
                reason: None,
            },
            LikeOutcome::Ignored { reason } => Self {
                status: "ignored".to_string(),
                message_id: None,
                reason: Some(reason.to_string()),
            },
        }
    }
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "Publish failed: broker unreachable")]
    pub error: String,
}
