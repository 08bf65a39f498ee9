//! Handler for the link listing endpoint.

use axum::{Json, extract::State};

use crate::api::dto::links::LinkListItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all live links with their click counts.
///
/// # Endpoint
///
/// `GET /api/links`
///
/// Links are returned in creation order.
pub async fn links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkListItem>>, AppError> {
    let links = state.shortener.list_links().await?;

    let items = links
        .into_iter()
        .map(|link| {
            let short_url = state.shortener.short_url(&state.base_url, &link.code);
            LinkListItem::from_link(link, short_url)
        })
        .collect();

    Ok(Json(items))
}
