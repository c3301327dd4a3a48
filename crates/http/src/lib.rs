//! HTTP API server for the WELF site.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(unreachable_pub, reason = "pub items are re-exported")]
#![allow(clippy::absolute_paths, reason = "Explicit paths for clarity")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::missing_docs_in_private_items, reason = "Internal crate")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]
#![allow(clippy::min_ident_chars, reason = "Short closure params are idiomatic")]
#![allow(clippy::exhaustive_structs, reason = "HTTP types are stable")]

pub mod api_error;
mod handlers;
pub mod query_types;
pub mod response_types;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use welf_prices::{PriceClient, PriceTicker, SharedPriceBoard, TickerHandle};
use welf_service::{ImpactService, ResourceService, StoryService};
use welf_storage::FixtureStore;

pub use response_types::{ReadinessResponse, VersionResponse};

/// Starts the recurring price poll that keeps `board` fresh.
///
/// The poll lives exactly as long as the returned handle.
pub fn start_price_ticker(
    client: PriceClient,
    board: SharedPriceBoard,
    period: Duration,
) -> TickerHandle {
    tracing::info!(api = client.base_url(), ?period, "starting price ticker");
    PriceTicker::spawn(client, board, period)
}

/// Shared application state for all HTTP handlers.
///
/// Wrapped in `Arc` for thread-safe sharing across handlers.
pub struct AppState {
    /// Paginated story catalog
    pub story_service: Arc<StoryService>,
    /// Impact markers, projection and picking
    pub impact_service: Arc<ImpactService>,
    /// Educational resources
    pub resource_service: Arc<ResourceService>,
    /// Latest prices, written by the ticker
    pub prices: SharedPriceBoard,
}

impl AppState {
    /// State with every service reading from one fixture store.
    pub fn from_fixture(store: Arc<FixtureStore>, prices: SharedPriceBoard) -> Self {
        Self {
            story_service: Arc::new(StoryService::new(store.clone())),
            impact_service: Arc::new(ImpactService::new(store.clone())),
            resource_service: Arc::new(ResourceService::new(store)),
            prices,
        }
    }
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/readiness", get(readiness))
        .route("/api/version", get(version))
        .route("/api/stories", get(handlers::stories::list_stories))
        .route("/api/impact/markers", get(handlers::impact::list_markers))
        .route("/api/impact/globe", get(handlers::impact::globe))
        .route("/api/impact/flat", get(handlers::impact::flat))
        .route("/api/impact/select", get(handlers::impact::select))
        .route("/api/impact/select-flat", get(handlers::impact::select_flat))
        .route("/api/resources", get(handlers::resources::list_resources))
        .route("/api/prices", get(handlers::prices::get_prices))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn readiness() -> (StatusCode, Json<ReadinessResponse>) {
    (StatusCode::OK, Json(ReadinessResponse { status: "ready", message: None }))
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: env!("CARGO_PKG_VERSION") })
}
