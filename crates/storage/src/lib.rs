//! Storage layer for the WELF backend
//!
//! Read-only stores over embedded JSON fixtures.

mod error;
mod fixture;
#[cfg(test)]
mod tests;
pub mod traits;

pub use error::StorageError;
pub use fixture::FixtureStore;
pub use traits::{ImpactStore, ResourceStore, StoryStore};
