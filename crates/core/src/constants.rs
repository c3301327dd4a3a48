//! Shared constants for the WELF backend.
//!
//! Centralizes values that the HTTP layer, the CLI and the feed client must agree on.

/// Page number used when the caller does not supply one.
pub const DEFAULT_PAGE: usize = 1;

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Largest page size a story query accepts.
pub const MAX_PAGE_SIZE: usize = 100;

/// Page size of the story feed cards on the home page.
pub const FEED_PAGE_SIZE: usize = 3;

/// Radius of the rendered earth sphere.
pub const GLOBE_RADIUS: f64 = 2.0;

/// Radius at which impact markers float above the earth surface.
pub const MARKER_RADIUS: f64 = 2.1;

/// Default pointer hit radius on the globe, in globe units.
pub const GLOBE_HIT_RADIUS: f64 = 0.15;

/// Default pointer hit radius on the flat map, in percent of the map size.
pub const FLAT_HIT_RADIUS_PCT: f64 = 2.5;

/// Radians of rotation per pixel of pointer drag.
pub const DRAG_SENSITIVITY: f64 = 0.005;

/// Seconds between price refreshes.
pub const PRICE_POLL_INTERVAL_SECS: u64 = 30;

/// Timeout for a single price API request.
pub const PRICE_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Public simple-price API used when `WELF_PRICE_API_URL` is unset.
pub const DEFAULT_PRICE_API_URL: &str = "https://api.coingecko.com";

/// Address of the WELF API used by the feed client when `WELF_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";
