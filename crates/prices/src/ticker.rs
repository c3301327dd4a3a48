//! Recurring price poll bound to an owning handle.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{RwLock, oneshot};
use tokio::task::JoinHandle;
use welf_core::CoinPrice;

use crate::client::PriceClient;

/// Latest known prices as shown by the stats banner.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceBoard {
    pub prices: Vec<CoinPrice>,
    /// True until the first poll completes.
    pub loading: bool,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for PriceBoard {
    fn default() -> Self {
        Self { prices: Vec::new(), loading: true, updated_at: None }
    }
}

pub type SharedPriceBoard = Arc<RwLock<PriceBoard>>;

pub fn shared_board() -> SharedPriceBoard {
    Arc::new(RwLock::new(PriceBoard::default()))
}

/// Spawns the recurring poll.
#[derive(Debug)]
pub struct PriceTicker;

impl PriceTicker {
    /// Polls once immediately, then every `period`, until the returned
    /// handle is shut down or dropped.
    ///
    /// Must be called inside a tokio runtime. `period` must be non-zero.
    pub fn spawn(client: PriceClient, board: SharedPriceBoard, period: Duration) -> TickerHandle {
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = interval.tick() => {},
                }
                let prices = tokio::select! {
                    _ = &mut stop_rx => break,
                    prices = client.prices_or_empty() => prices,
                };
                tracing::debug!(count = prices.len(), "price poll finished");
                let mut guard = board.write().await;
                guard.prices = prices;
                guard.loading = false;
                guard.updated_at = Some(Utc::now());
            }
            tracing::debug!("price ticker stopped");
        });
        TickerHandle { stop: Some(stop_tx), task: Some(task) }
    }
}

/// Owner of a running ticker. Dropping it cancels the poll.
#[derive(Debug)]
pub struct TickerHandle {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl TickerHandle {
    /// Stops the ticker and waits for the task to finish.
    pub async fn shutdown(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            tracing::warn!("price ticker task ended abnormally: {e:?}");
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.as_ref().is_none_or(JoinHandle::is_finished)
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
