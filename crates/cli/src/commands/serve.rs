use std::sync::Arc;

use anyhow::Result;
use welf_http::{AppState, create_router, start_price_ticker};
use welf_prices::{PriceClient, PriceConfig, shared_board};
use welf_storage::FixtureStore;

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let store = Arc::new(FixtureStore::load()?);
    tracing::info!(
        stories = store.stories().len(),
        markers = store.markers().len(),
        resources = store.resources().len(),
        "fixtures loaded"
    );

    let config = PriceConfig::from_env();
    let board = shared_board();
    let ticker =
        start_price_ticker(PriceClient::from_config(&config)?, board.clone(), config.poll_interval);

    let state = Arc::new(AppState::from_fixture(store, board));
    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    let served = axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await;

    ticker.shutdown().await;
    tracing::info!("server stopped");
    served?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}
