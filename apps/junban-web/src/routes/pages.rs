//! HTML page routes

use axum::{
    routing::{get, post},
    Router,
};
use junban_domain::ports::{EventPublisher, PageRepository};

use crate::{
    handlers::pages::{index_handler, page_handler, submit_handler},
    AppState,
};

/// Create page routes
pub fn routes<R, P>() -> Router<AppState<R, P>>
where
    R: PageRepository + 'static,
    P: EventPublisher + 'static,
{
    Router::new()
        .route("/", get(index_handler))
        .route("/submit", post(submit_handler::<R, P>))
        .route("/pages/:page_id", get(page_handler::<R, P>))
}
