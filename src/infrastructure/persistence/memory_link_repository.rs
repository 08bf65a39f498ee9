//! In-memory implementation of the link repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// In-memory repository backed by a `HashMap` behind an async `RwLock`.
///
/// Used by integration tests and local runs without a database. The write
/// lock makes create and increment atomic, matching the uniqueness and
/// lost-update guarantees of the PostgreSQL backend.
#[derive(Default)]
pub struct MemoryLinkRepository {
    links: RwLock<HashMap<String, ShortLink>>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let mut links = self.links.write().await;

        if links.contains_key(&new_link.code) {
            return Err(AppError::conflict(
                "Short code already exists",
                json!({ "code": new_link.code }),
            ));
        }

        let link = ShortLink::new(
            self.next_id.fetch_add(1, Ordering::Relaxed),
            new_link.code.clone(),
            new_link.target_url,
            0,
            Utc::now(),
            None,
        );

        links.insert(new_link.code, link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        let links = self.links.read().await;
        Ok(links.get(code).filter(|l| !l.is_deleted()).cloned())
    }

    async fn increment_clicks(&self, code: &str) -> Result<(), AppError> {
        let mut links = self.links.write().await;

        match links.get_mut(code).filter(|l| !l.is_deleted()) {
            Some(link) => {
                link.clicks += 1;
                Ok(())
            }
            None => Err(AppError::not_found(
                "Short link not found",
                json!({ "code": code }),
            )),
        }
    }

    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        let links = self.links.read().await;

        let mut all: Vec<ShortLink> = links.values().filter(|l| !l.is_deleted()).cloned().collect();
        all.sort_by_key(|l| l.id);
        Ok(all)
    }
}
