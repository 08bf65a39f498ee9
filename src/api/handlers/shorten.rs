//! Handler for the link shortening endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "aK3x9_Qw",
///   "short_url": "https://s.example.com/aK3x9_Qw",
///   "long_url": "https://example.com"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or malformed.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let link = state.shortener.shorten(payload.url).await?;
    let short_url = state.shortener.short_url(&state.base_url, &link.code);

    Ok(Json(ShortenResponse {
        code: link.code,
        short_url,
        long_url: link.target_url,
    }))
}
