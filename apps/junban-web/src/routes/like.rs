//! Like API routes

use axum::{routing::post, Router};
use junban_domain::ports::{EventPublisher, PageRepository};

use crate::{handlers::like::like_handler, AppState};

/// Create like routes
pub fn routes<R, P>() -> Router<AppState<R, P>>
where
    R: PageRepository + 'static,
    P: EventPublisher + 'static,
{
    Router::new().route("/api/like", post(like_handler::<R, P>))
}
