//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Click Tracking
///
/// A click event is sent to a bounded channel for async processing after
/// the lookup succeeds. If the queue is full the click is dropped; the
/// redirect itself never waits on the counter update and never fails
/// because of it.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.shortener.resolve(&code).await?;

    let _ = state.click_sender.try_send(ClickEvent::new(link.code));

    Ok(Redirect::temporary(&link.target_url))
}
