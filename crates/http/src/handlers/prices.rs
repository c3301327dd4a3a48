use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::response_types::PricesResponse;

/// Snapshot of the board the ticker maintains. Never fails: a failed poll
/// shows up as an empty price list.
pub async fn get_prices(State(state): State<Arc<AppState>>) -> Json<PricesResponse> {
    let board = state.prices.read().await.clone();
    Json(board.into())
}
