//! Background worker draining click events into the mapping store.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::click_event::ClickEvent;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Processes click events until the channel closes.
///
/// Each event becomes one atomic `clicks = clicks + 1` against the store.
/// Transient storage failures are retried with jittered exponential backoff;
/// a miss means the link was deleted after the redirect and the event is
/// dropped.
pub async fn run_click_worker(mut rx: mpsc::Receiver<ClickEvent>, links: Arc<dyn LinkRepository>) {
    while let Some(ev) = rx.recv().await {
        let strategy = ExponentialBackoff::from_millis(50)
            .max_delay(Duration::from_secs(2))
            .map(jitter)
            .take(3);

        let result = RetryIf::spawn(
            strategy,
            || links.increment_clicks(&ev.code),
            |e: &AppError| matches!(e, AppError::Unavailable { .. }),
        )
        .await;

        match result {
            Ok(()) => {
                metrics::counter!("urlhash_clicks_recorded_total").increment(1);
            }
            Err(AppError::NotFound { .. }) => {
                tracing::debug!(code = %ev.code, "click for missing link dropped");
            }
            Err(e) => {
                metrics::counter!("urlhash_clicks_failed_total").increment(1);
                tracing::warn!(code = %ev.code, error = %e, "failed to record click");
            }
        }
    }
}
