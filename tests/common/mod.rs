#![allow(dead_code)]

use std::sync::Arc;
use tokio::sync::mpsc;
use urlhash::application::services::ShortenerService;
use urlhash::domain::click_event::ClickEvent;
use urlhash::domain::entities::NewShortLink;
use urlhash::domain::repositories::LinkRepository;
use urlhash::infrastructure::persistence::MemoryLinkRepository;
use urlhash::state::AppState;

pub const TEST_BASE_URL: &str = "https://s.example.com";

/// Builds an [`AppState`] over the in-memory store.
///
/// Returns the state, the click event receiver (so tests can observe or
/// drain enqueued clicks), and the repository handle for direct setup and
/// assertions.
pub fn create_test_state() -> (
    AppState,
    mpsc::Receiver<ClickEvent>,
    Arc<MemoryLinkRepository>,
) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let (tx, rx) = mpsc::channel(100);

    let links: Arc<dyn LinkRepository> = repo.clone();
    let shortener = Arc::new(ShortenerService::new(links));
    let state = AppState::new(shortener, tx, TEST_BASE_URL.to_string());

    (state, rx, repo)
}

pub async fn create_test_link(repo: &MemoryLinkRepository, code: &str, url: &str) {
    repo.create(NewShortLink {
        code: code.to_string(),
        target_url: url.to_string(),
    })
    .await
    .unwrap();
}
