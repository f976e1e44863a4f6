//! Mapping from domain errors to HTTP responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use junban_domain::ordering::OrderingError;

use crate::dto::like::ErrorResponse;

fn status_for(err: &OrderingError) -> StatusCode {
    match err {
        OrderingError::NotFound(_) => StatusCode::NOT_FOUND,
        OrderingError::StoreUnavailable(_)
        | OrderingError::InvalidRecord(_)
        | OrderingError::PublishFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Error returned by JSON endpoints: `{"error": message}`
#[derive(Debug)]
pub struct ApiError(pub OrderingError);

impl From<OrderingError> for ApiError {
    fn from(err: OrderingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        (
            status,
            Json(ErrorResponse {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

/// Error returned by HTML endpoints as plain text
#[derive(Debug)]
pub struct PageError(pub OrderingError);

impl From<OrderingError> for PageError {
    fn from(err: OrderingError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let message = match &self.0 {
            OrderingError::NotFound(_) => "Page not found".to_string(),
            other => other.to_string(),
        };
        (status, message).into_response()
    }
}
