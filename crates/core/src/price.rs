//! Crypto price types shared by the price client and the HTTP layer.

use serde::{Deserialize, Serialize};

/// Latest USD quote of one tracked asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinPrice {
    /// Price API identifier, e.g. `bitcoin`
    pub id: String,
    /// Ticker symbol, e.g. `BTC`
    pub symbol: String,
    pub current_price: f64,
    pub price_change_24h_percentage: f64,
}

/// An asset shown in the stats banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedAsset {
    pub id: &'static str,
    pub symbol: &'static str,
}

/// Assets shown in the stats banner, in display order.
pub const TRACKED_ASSETS: [TrackedAsset; 3] = [
    TrackedAsset { id: "bitcoin", symbol: "BTC" },
    TrackedAsset { id: "ethereum", symbol: "ETH" },
    TrackedAsset { id: "solana", symbol: "SOL" },
];
