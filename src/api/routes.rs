//! API route configuration.

use crate::api::handlers::{links_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// API routes under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a shortened URL
/// - `GET  /links`   - List all links with click counts
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/links", get(links_handler))
}
