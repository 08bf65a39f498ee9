//! Click event model for asynchronous click tracking.

/// An in-memory click event passed from the redirect handler to the
/// background worker via a bounded channel.
///
/// Decouples the HTTP response from the counter update so redirects never
/// block on database writes. Click accounting is best-effort: a full queue
/// drops the event, and a failed increment is never surfaced to the caller
/// that resolved the link.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub code: String,
}

impl ClickEvent {
    /// Creates a new click event for the given short code.
    pub fn new(code: String) -> Self {
        Self { code }
    }
}
