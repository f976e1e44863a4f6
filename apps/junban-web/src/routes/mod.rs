//! API routes

pub mod like;
pub mod pages;

use std::path::Path;

use axum::Router;
use junban_domain::ports::{EventPublisher, PageRepository};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::like::{ErrorResponse, LikeRequest, LikeResponse},
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::like::like_handler,
        health_handler
    ),
    components(
        schemas(LikeRequest, LikeResponse, ErrorResponse)
    ),
    tags(
        (name = "likes", description = "Like events for shared pages"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Junban API",
        version = "0.1.0",
        description = "Shuffle a list of names into a shareable ordering page",
        contact(
            name = "Junban Team"
        )
    )
)]
pub struct ApiDoc;

/// Create the main application router
///
/// Stylesheet and like script are served from `static_dir` under `/static`.
pub fn create_router<R, P>(state: AppState<R, P>, static_dir: impl AsRef<Path>) -> Router
where
    R: PageRepository + 'static,
    P: EventPublisher + 'static,
{
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(pages::routes())
        .merge(like::routes())
        .route("/health", axum::routing::get(health_handler))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}
