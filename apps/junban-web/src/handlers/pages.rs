//! HTML page handlers: submission form, submit, page view

use axum::{
    extract::{Path, State},
    response::Redirect,
    Form,
};
use junban_domain::{
    ordering::SubmitOutcome,
    ports::{EventPublisher, PageRepository},
};
use tracing::{debug, error, info};

use crate::{
    dto::submit::SubmitForm,
    handlers::error::PageError,
    templates::{IndexTemplate, ResultTemplate},
    AppState,
};

/// Render the submission form
pub async fn index_handler() -> IndexTemplate {
    IndexTemplate::new()
}

/// Shuffle and store the submitted names, then redirect to the new page
///
/// Blank submissions redirect back to the form without any message.
pub async fn submit_handler<R, P>(
    State(state): State<AppState<R, P>>,
    Form(form): Form<SubmitForm>,
) -> Result<Redirect, PageError>
where
    R: PageRepository,
    P: EventPublisher,
{
    debug!(
        input_size = form.names.len(),
        enable_likes = form.enable_likes,
        "Received submission"
    );

    match state
        .ordering_service
        .submit(&form.names, form.enable_likes)
        .await
    {
        Ok(SubmitOutcome::Created(page_id)) => {
            info!(page_id = %page_id, "Created ordering page");
            Ok(Redirect::to(&format!("/pages/{}", page_id)))
        }
        Ok(SubmitOutcome::EmptyInput) => {
            info!("Submission had no names, redirecting to form");
            Ok(Redirect::to("/"))
        }
        Err(err) => {
            error!(error = ?err, "Failed to create ordering page");
            Err(PageError(err))
        }
    }
}

/// Render a stored page
pub async fn page_handler<R, P>(
    State(state): State<AppState<R, P>>,
    Path(page_id): Path<String>,
) -> Result<ResultTemplate, PageError>
where
    R: PageRepository,
    P: EventPublisher,
{
    match state.ordering_service.retrieve(&page_id).await {
        Ok(page) => Ok(ResultTemplate::new(page_id, page)),
        Err(err) => {
            if err.is_not_found() {
                debug!(page_id = %page_id, "Page not found");
            } else {
                error!(page_id = %page_id, error = ?err, "Failed to load page");
            }
            Err(PageError(err))
        }
    }
}
