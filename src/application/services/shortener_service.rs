//! Shorten and resolve orchestration.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Maximum code generation attempts before giving up on a shorten request.
const MAX_ATTEMPTS: usize = 10;

/// Service composing the code generator and the mapping store.
///
/// The repository is injected explicitly so tests can substitute the
/// in-memory backend or a mock.
pub struct ShortenerService {
    links: Arc<dyn LinkRepository>,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(links: Arc<dyn LinkRepository>) -> Self {
        Self { links }
    }

    /// Creates a short link for a target URL.
    ///
    /// Generates a code and inserts directly, relying on the store's
    /// uniqueness constraint rather than a check-then-insert: under
    /// concurrency the store decides which create wins. A conflict
    /// regenerates the code, at most [`MAX_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `target_url` is empty (URL syntax
    /// is validated upstream at the API boundary).
    /// Returns [`AppError::Internal`] if every attempt collided.
    /// All other storage errors propagate unchanged.
    pub async fn shorten(&self, target_url: String) -> Result<ShortLink, AppError> {
        if target_url.trim().is_empty() {
            return Err(AppError::bad_request(
                "Target URL must not be empty",
                json!({}),
            ));
        }

        for _ in 0..MAX_ATTEMPTS {
            let new_link = NewShortLink {
                code: generate_code(&target_url),
                target_url: target_url.clone(),
            };

            match self.links.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }

    /// Resolves a short code to its link.
    ///
    /// Click accounting is not performed here; the caller enqueues a click
    /// event after responding so resolution never blocks on the counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no live link matches `code`.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        self.links.find_by_code(code).await?.ok_or_else(|| {
            AppError::not_found("Short link not found", json!({ "code": code }))
        })
    }

    /// Lists all live links in creation order.
    pub async fn list_links(&self) -> Result<Vec<ShortLink>, AppError> {
        self.links.list_all().await
    }

    /// Checks that the mapping store answers queries.
    ///
    /// A miss is a healthy answer; only transport-level failures surface.
    pub async fn probe_storage(&self) -> Result<(), AppError> {
        self.links.find_by_code("_probe").await.map(|_| ())
    }

    /// Constructs the full short URL from a base URL and code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
