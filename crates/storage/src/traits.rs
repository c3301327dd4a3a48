//! Storage backend trait abstraction
//!
//! Async read-only traits the service layer depends on. The fixture backend
//! implements all of them; tests substitute failing or custom stores.

use async_trait::async_trait;
use welf_core::{ImpactCategory, ImpactMarker, Resource, ResourceFilter, Story, StoryCategory};

use crate::error::StorageError;

/// Story catalog reads.
#[async_trait]
pub trait StoryStore: Send + Sync {
    /// Stories in catalog order, optionally restricted to one category.
    async fn list_stories(
        &self,
        category: Option<StoryCategory>,
    ) -> Result<Vec<Story>, StorageError>;

    /// Story by identifier.
    async fn get_story(&self, id: u32) -> Result<Option<Story>, StorageError>;
}

/// Impact marker reads.
#[async_trait]
pub trait ImpactStore: Send + Sync {
    /// Markers in catalog order, optionally restricted to one category.
    async fn list_markers(
        &self,
        category: Option<ImpactCategory>,
    ) -> Result<Vec<ImpactMarker>, StorageError>;
}

/// Educational resource reads.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    async fn list_resources(&self, filter: ResourceFilter) -> Result<Vec<Resource>, StorageError>;
}
