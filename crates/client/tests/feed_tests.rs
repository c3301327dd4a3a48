use std::time::Duration;

use serde_json::{Value, json};
use welf_client::{
    FALLBACK_WARNING, FeedController, FeedError, StoryFeed, StoryFeedClient, fallback_stories,
};
use welf_core::StoryCategory;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn story(id: u32) -> Value {
    json!({
        "id": id,
        "title": format!("Story {id}"),
        "date": "2024-11-10",
        "summary": "summary",
        "tags": ["Rescue"],
        "category": "latest"
    })
}

fn page_body(ids: &[u32], page: usize, total: usize) -> Value {
    json!({
        "status": "success",
        "data": ids.iter().map(|&id| story(id)).collect::<Vec<_>>(),
        "total": total,
        "page": page,
        "totalPages": total.div_ceil(3)
    })
}

fn controller_for(server: &MockServer) -> FeedController {
    FeedController::new(StoryFeedClient::new(&server.uri()).unwrap(), StoryFeed::default())
}

#[tokio::test]
async fn test_fetch_page_sends_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stories"))
        .and(query_param("category", "featured"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[8, 10, 12], 2, 6)))
        .expect(1)
        .mount(&server)
        .await;

    let client = StoryFeedClient::new(&server.uri()).unwrap();
    let page = client.fetch_page(StoryCategory::Featured, 2, 3).await.unwrap();
    assert_eq!(page.data.iter().map(|s| s.id).collect::<Vec<_>>(), vec![8, 10, 12]);
    assert_eq!(page.total_pages, 2);
}

#[tokio::test]
async fn test_error_status_carries_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stories"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"status": "error", "message": "Failed to fetch stories"})),
        )
        .mount(&server)
        .await;

    let client = StoryFeedClient::new(&server.uri()).unwrap();
    match client.fetch_page(StoryCategory::Latest, 1, 3).await {
        Err(FeedError::HttpStatus { code, message }) => {
            assert_eq!(code, 500);
            assert_eq!(message, "Failed to fetch stories");
        },
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_refresh_shows_live_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[2, 3, 5], 1, 6)))
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    assert!(controller.refresh().await);
    let feed = controller.snapshot().await;
    assert!(feed.warning().is_none());
    assert_eq!(feed.stories().len(), 3);
    assert_eq!(feed.total_pages(), 2);
}

#[tokio::test]
async fn test_server_error_falls_back_with_warning() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stories"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    controller.refresh().await;
    let feed = controller.snapshot().await;
    assert_eq!(feed.warning(), Some(FALLBACK_WARNING));
    let latest: Vec<u32> = fallback_stories()
        .iter()
        .filter(|s| s.category == StoryCategory::Latest)
        .map(|s| s.id)
        .collect();
    assert_eq!(feed.stories().iter().map(|s| s.id).collect::<Vec<_>>(), latest);
    assert_eq!(latest, vec![2]);

    assert!(controller.select_category(StoryCategory::Featured).await);
    let feed = controller.snapshot().await;
    assert_eq!(feed.warning(), Some(FALLBACK_WARNING));
    assert_eq!(feed.stories().iter().map(|s| s.id).collect::<Vec<_>>(), vec![1]);
}

#[tokio::test]
async fn test_non_array_data_falls_back() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stories"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "success", "data": "nope", "total": 1})),
        )
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    controller.refresh().await;
    let feed = controller.snapshot().await;
    assert!(feed.warning().is_some());
    assert!(!feed.stories().is_empty());
}

#[tokio::test]
async fn test_unreachable_server_falls_back() {
    let client = StoryFeedClient::new("http://127.0.0.1:1").unwrap();
    let controller = FeedController::new(client, StoryFeed::default());
    controller.refresh().await;
    assert_eq!(controller.snapshot().await.warning(), Some(FALLBACK_WARNING));
}

#[tokio::test]
async fn test_superseded_query_does_not_overwrite_newer_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stories"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page_body(&[2, 3, 5], 1, 6))
                .set_delay(Duration::from_millis(400)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stories"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[7, 9, 11], 2, 6)))
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    let slow = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.load(StoryCategory::Latest, 1).await })
    };
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(controller.load(StoryCategory::Latest, 2).await);
    assert!(!slow.await.unwrap(), "page 1 response should be discarded");

    let feed = controller.snapshot().await;
    assert_eq!(feed.page(), 2);
    assert_eq!(feed.stories().iter().map(|s| s.id).collect::<Vec<_>>(), vec![7, 9, 11]);
    assert!(!feed.is_loading());
}

#[tokio::test]
async fn test_tab_switch_requeries_page_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/stories"))
        .and(query_param("category", "featured"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[1, 4, 6], 1, 6)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/stories"))
        .and(query_param("category", "latest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page_body(&[7, 9, 11], 2, 6)))
        .mount(&server)
        .await;

    let controller = controller_for(&server);
    controller.load(StoryCategory::Latest, 2).await;
    assert!(controller.select_category(StoryCategory::Featured).await);
    let feed = controller.snapshot().await;
    assert_eq!(feed.category(), StoryCategory::Featured);
    assert_eq!(feed.page(), 1);
    assert_eq!(feed.stories()[0].id, 1);
}
