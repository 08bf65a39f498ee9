use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::ShortenerService;
use crate::domain::click_event::ClickEvent;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
    pub click_sender: mpsc::Sender<ClickEvent>,
    pub base_url: String,
}

impl AppState {
    pub fn new(
        shortener: Arc<ShortenerService>,
        click_sender: mpsc::Sender<ClickEvent>,
        base_url: String,
    ) -> Self {
        Self {
            shortener,
            click_sender,
            base_url,
        }
    }
}
