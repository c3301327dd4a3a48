//! Live crypto prices for the WELF stats banner
//!
//! A single-shot HTTP client for the public simple-price API, a ticker that
//! refreshes a shared board on an interval, and display formatting.

pub mod client;
pub mod error;
pub mod format;
pub mod ticker;

pub use client::{PriceClient, PriceConfig};
pub use error::PriceError;
pub use format::{format_percentage, format_usd};
pub use ticker::{PriceBoard, PriceTicker, SharedPriceBoard, TickerHandle, shared_board};

#[cfg(test)]
mod ticker_tests;
