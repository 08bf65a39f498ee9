//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the short link mapping store.
///
/// The repository is the sole authority on code uniqueness and click
/// accounting: uniqueness is enforced by the storage layer itself, and the
/// click counter is incremented with a single atomic update rather than a
/// read-modify-write at the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-memory,
///   used by tests and local runs
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link with a zero click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if `code` already denotes a live
    /// record. Exactly one of two concurrent creates with the same code
    /// succeeds; the other observes the conflict.
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// storage errors.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a live link by its short code.
    ///
    /// Soft-deleted records are never returned.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Atomically increments the click counter for `code`.
    ///
    /// Implemented as `clicks = clicks + 1` at the storage layer so that
    /// concurrent increments of the same code are never lost.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live record matches `code`.
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// storage errors. Never retried here; retry policy belongs to the
    /// caller.
    async fn increment_clicks(&self, code: &str) -> Result<(), AppError>;

    /// Lists all live links in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on
    /// storage errors.
    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError>;
}
