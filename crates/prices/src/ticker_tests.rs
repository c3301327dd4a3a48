use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::client::{PriceClient, SIMPLE_PRICE_PATH};
use crate::ticker::{PriceTicker, shared_board};

async fn price_server(status: u16) -> MockServer {
    let server = MockServer::start().await;
    let template = if status == 200 {
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "bitcoin": { "usd": 100.0, "usd_24h_change": 1.0 },
            "ethereum": { "usd": 10.0, "usd_24h_change": 2.0 },
            "solana": { "usd": 1.0, "usd_24h_change": 3.0 }
        }))
    } else {
        ResponseTemplate::new(status)
    };
    Mock::given(method("GET")).and(path(SIMPLE_PRICE_PATH)).respond_with(template).mount(&server).await;
    server
}

async fn request_count(server: &MockServer) -> usize {
    server.received_requests().await.map_or(0, |r| r.len())
}

fn client_for(server: &MockServer) -> PriceClient {
    PriceClient::new(&server.uri(), Duration::from_secs(2)).unwrap()
}

#[tokio::test]
async fn test_board_starts_loading() {
    let board = shared_board();
    let guard = board.read().await;
    assert!(guard.loading);
    assert!(guard.prices.is_empty());
    assert!(guard.updated_at.is_none());
}

#[tokio::test]
async fn test_first_poll_is_immediate() {
    let server = price_server(200).await;
    let board = shared_board();
    let handle = PriceTicker::spawn(client_for(&server), board.clone(), Duration::from_secs(3600));

    let mut filled = false;
    for _ in 0..50 {
        if !board.read().await.loading {
            filled = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    assert!(filled, "first poll did not complete");
    let guard = board.read().await;
    assert_eq!(guard.prices.len(), 3);
    assert!(guard.updated_at.is_some());
    drop(guard);
    handle.shutdown().await;
}

#[tokio::test]
async fn test_failed_poll_clears_loading_with_empty_prices() {
    let server = price_server(503).await;
    let board = shared_board();
    let handle = PriceTicker::spawn(client_for(&server), board.clone(), Duration::from_secs(3600));

    for _ in 0..50 {
        if !board.read().await.loading {
            break;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    let guard = board.read().await;
    assert!(!guard.loading);
    assert!(guard.prices.is_empty());
    drop(guard);
    handle.shutdown().await;
}

#[tokio::test]
async fn test_ticker_stops_polling_after_shutdown() {
    let server = price_server(200).await;
    let board = shared_board();
    let handle = PriceTicker::spawn(client_for(&server), board, Duration::from_millis(40));

    tokio::time::sleep(Duration::from_millis(200)).await;
    handle.shutdown().await;
    let after_shutdown = request_count(&server).await;
    assert!(after_shutdown >= 2, "expected repeated polls, got {after_shutdown}");

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(request_count(&server).await, after_shutdown);
}

#[tokio::test]
async fn test_dropping_handle_cancels_ticker() {
    let server = price_server(200).await;
    let handle =
        PriceTicker::spawn(client_for(&server), shared_board(), Duration::from_millis(40));

    tokio::time::sleep(Duration::from_millis(120)).await;
    drop(handle);
    // An in-flight request may still land right after abort.
    tokio::time::sleep(Duration::from_millis(50)).await;
    let after_drop = request_count(&server).await;

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(request_count(&server).await, after_drop);
}
