//! DTOs for the link listing endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::ShortLink;

/// A single link in the listing response.
#[derive(Debug, Serialize)]
pub struct LinkListItem {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl LinkListItem {
    pub fn from_link(link: ShortLink, short_url: String) -> Self {
        Self {
            code: link.code,
            long_url: link.target_url,
            short_url,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}
