//! Consumer side of the WELF stories endpoint
//!
//! Fetches story pages, falls back to a bundled collection when the endpoint
//! misbehaves, and drops responses to queries that a later tab or page change
//! superseded.

mod controller;
mod error;
mod fallback;
mod fetch;
mod share;
mod state;

pub use controller::FeedController;
pub use error::FeedError;
pub use fallback::fallback_stories;
pub use fetch::StoryFeedClient;
pub use share::{share_text, twitter_share_url};
pub use state::{FALLBACK_WARNING, FeedRequest, StoryFeed};
