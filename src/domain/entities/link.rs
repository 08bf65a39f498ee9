//! Short link entity representing a code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL mapping with its click counter.
///
/// `code` is the public key of the mapping and is unique among live records.
/// `clicks` starts at zero and only ever grows; nothing else is mutated
/// after creation.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub id: i64,
    pub code: String,
    pub target_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        code: String,
        target_url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            code,
            target_url,
            clicks,
            created_at,
            deleted_at,
        }
    }

    /// Returns true if the link has been soft-deleted.
    ///
    /// Soft-deleted records are invisible to lookups.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Input data for creating a new short link.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub code: String,
    pub target_url: String,
}
