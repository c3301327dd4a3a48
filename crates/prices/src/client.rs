use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use welf_core::constants::{
    DEFAULT_PRICE_API_URL, PRICE_POLL_INTERVAL_SECS, PRICE_REQUEST_TIMEOUT_SECS,
};
use welf_core::env_config::{env_parse_with_default, env_string_with_default};
use welf_core::{CoinPrice, TRACKED_ASSETS};

use crate::error::PriceError;

/// Path of the simple-price endpoint under the API base URL.
pub const SIMPLE_PRICE_PATH: &str = "/api/v3/simple/price";

/// Price feed settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceConfig {
    pub base_url: String,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
}

impl Default for PriceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PRICE_API_URL.to_owned(),
            poll_interval: Duration::from_secs(PRICE_POLL_INTERVAL_SECS),
            request_timeout: Duration::from_secs(PRICE_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl PriceConfig {
    /// Reads `WELF_PRICE_API_URL`, `WELF_PRICE_POLL_SECS` and `WELF_PRICE_TIMEOUT_SECS`.
    ///
    /// A zero poll interval is rejected in favour of the default since the
    /// ticker cannot run on a zero period.
    pub fn from_env() -> Self {
        let base_url = env_string_with_default("WELF_PRICE_API_URL", DEFAULT_PRICE_API_URL);
        let mut poll_secs = env_parse_with_default("WELF_PRICE_POLL_SECS", PRICE_POLL_INTERVAL_SECS);
        if poll_secs == 0 {
            tracing::warn!("WELF_PRICE_POLL_SECS must be positive, using default");
            poll_secs = PRICE_POLL_INTERVAL_SECS;
        }
        let timeout_secs =
            env_parse_with_default("WELF_PRICE_TIMEOUT_SECS", PRICE_REQUEST_TIMEOUT_SECS);
        Self {
            base_url,
            poll_interval: Duration::from_secs(poll_secs),
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// One asset in the simple-price response.
#[derive(Debug, Deserialize)]
struct SimpleQuote {
    usd: f64,
    #[serde(default)]
    usd_24h_change: Option<f64>,
}

/// Client for the public simple-price API.
#[derive(Debug, Clone)]
pub struct PriceClient {
    client: reqwest::Client,
    base_url: String,
}

impl PriceClient {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend failure).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, PriceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PriceError::ClientInit(e.to_string()))?;
        Ok(Self { client, base_url: base_url.trim_end_matches('/').to_owned() })
    }

    /// # Errors
    /// Same as [`PriceClient::new`].
    pub fn from_config(config: &PriceConfig) -> Result<Self, PriceError> {
        Self::new(&config.base_url, config.request_timeout)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches USD quotes for every tracked asset in display order.
    ///
    /// Single attempt; the ticker's next tick is the retry.
    ///
    /// # Errors
    /// Returns an error if the request fails, the API answers non-2xx, the
    /// body is not the expected JSON, or a tracked asset is absent.
    pub async fn fetch_prices(&self) -> Result<Vec<CoinPrice>, PriceError> {
        let ids = TRACKED_ASSETS.iter().map(|a| a.id).collect::<Vec<_>>().join(",");
        let response = self
            .client
            .get(format!("{}{SIMPLE_PRICE_PATH}", self.base_url))
            .query(&[
                ("ids", ids.as_str()),
                ("vs_currencies", "usd"),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body =
                response.text().await.unwrap_or_else(|_| "Could not read error body".to_owned());
            return Err(PriceError::HttpStatus { code: status.as_u16(), body });
        }

        let body = response.text().await?;
        let mut quotes: HashMap<String, SimpleQuote> =
            serde_json::from_str(&body).map_err(|e| PriceError::JsonParse {
                context: format!("simple price response (body: {})", truncate(&body, 200)),
                source: e,
            })?;

        TRACKED_ASSETS
            .iter()
            .map(|asset| {
                let quote = quotes
                    .remove(asset.id)
                    .ok_or_else(|| PriceError::MissingAsset(asset.id.to_owned()))?;
                Ok(CoinPrice {
                    id: asset.id.to_owned(),
                    symbol: asset.symbol.to_owned(),
                    current_price: quote.usd,
                    price_change_24h_percentage: quote.usd_24h_change.unwrap_or(0.0),
                })
            })
            .collect()
    }

    /// Like [`fetch_prices`](Self::fetch_prices) but never fails: any error is
    /// logged and an empty list returned.
    pub async fn prices_or_empty(&self) -> Vec<CoinPrice> {
        match self.fetch_prices().await {
            Ok(prices) => prices,
            Err(e) => {
                tracing::warn!(error = %e, transient = e.is_transient(), "price fetch failed");
                Vec::new()
            },
        }
    }
}

/// Truncates a string to the given maximum length at a char boundary.
fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    s.get(..end).unwrap_or(s)
}
