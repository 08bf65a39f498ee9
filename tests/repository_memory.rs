mod common;

use std::sync::Arc;
use urlhash::application::services::ShortenerService;
use urlhash::domain::entities::NewShortLink;
use urlhash::domain::repositories::LinkRepository;
use urlhash::error::AppError;
use urlhash::infrastructure::persistence::MemoryLinkRepository;

fn new_link(code: &str, url: &str) -> NewShortLink {
    NewShortLink {
        code: code.to_string(),
        target_url: url.to_string(),
    }
}

#[tokio::test]
async fn test_create_and_find() {
    let repo = MemoryLinkRepository::new();

    let created = repo
        .create(new_link("test1234", "https://example.com"))
        .await
        .unwrap();
    assert_eq!(created.code, "test1234");
    assert_eq!(created.clicks, 0);

    let found = repo.find_by_code("test1234").await.unwrap().unwrap();
    assert_eq!(found.target_url, "https://example.com");
}

#[tokio::test]
async fn test_find_by_code_not_found() {
    let repo = MemoryLinkRepository::new();

    let result = repo.find_by_code("doesnotexist").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_create_duplicate_code_conflicts() {
    let repo = MemoryLinkRepository::new();

    repo.create(new_link("taken123", "https://a.example"))
        .await
        .unwrap();

    let result = repo.create(new_link("taken123", "https://b.example")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));

    // The original mapping is untouched.
    let found = repo.find_by_code("taken123").await.unwrap().unwrap();
    assert_eq!(found.target_url, "https://a.example");
}

#[tokio::test]
async fn test_concurrent_creates_same_code_exactly_one_wins() {
    let repo = Arc::new(MemoryLinkRepository::new());

    let mut handles = Vec::new();
    for i in 0..10 {
        let repo = repo.clone();
        handles.push(tokio::spawn(async move {
            repo.create(new_link("race1234", &format!("https://example.com/{i}")))
                .await
        }));
    }

    let mut successes = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(AppError::Conflict { .. }) => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 9);
}

#[tokio::test]
async fn test_increment_clicks() {
    let repo = MemoryLinkRepository::new();

    repo.create(new_link("counted1", "https://example.com"))
        .await
        .unwrap();

    repo.increment_clicks("counted1").await.unwrap();
    repo.increment_clicks("counted1").await.unwrap();

    let found = repo.find_by_code("counted1").await.unwrap().unwrap();
    assert_eq!(found.clicks, 2);
}

#[tokio::test]
async fn test_increment_clicks_not_found() {
    let repo = MemoryLinkRepository::new();

    let result = repo.increment_clicks("doesnotexist").await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[tokio::test]
async fn test_concurrent_increments_lose_no_updates() {
    let repo = Arc::new(MemoryLinkRepository::new());

    repo.create(new_link("busy1234", "https://example.com"))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..10 {
        let repo = repo.clone();
        handles.push(tokio::spawn(
            async move { repo.increment_clicks("busy1234").await },
        ));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let found = repo.find_by_code("busy1234").await.unwrap().unwrap();
    assert_eq!(found.clicks, 10);
}

#[tokio::test]
async fn test_list_all_in_creation_order() {
    let repo = MemoryLinkRepository::new();

    repo.create(new_link("first123", "https://a.example"))
        .await
        .unwrap();
    repo.create(new_link("second12", "https://b.example"))
        .await
        .unwrap();
    repo.create(new_link("third123", "https://c.example"))
        .await
        .unwrap();

    let all = repo.list_all().await.unwrap();

    let codes: Vec<_> = all.iter().map(|l| l.code.as_str()).collect();
    assert_eq!(codes, vec!["first123", "second12", "third123"]);
}

#[tokio::test]
async fn test_concurrent_shortens_never_share_codes() {
    let repo = Arc::new(MemoryLinkRepository::new());
    let links: Arc<dyn LinkRepository> = repo.clone();
    let service = Arc::new(ShortenerService::new(links));

    let mut handles = Vec::new();
    for _ in 0..20 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.shorten("https://example.com/popular".to_string()).await
        }));
    }

    let mut codes = std::collections::HashSet::new();
    for handle in handles {
        let link = handle.await.unwrap().unwrap();
        assert!(codes.insert(link.code.clone()), "duplicate code issued");
        assert_eq!(link.target_url, "https://example.com/popular");
    }

    assert_eq!(repo.list_all().await.unwrap().len(), 20);
}
