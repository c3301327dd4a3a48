//! Fixture-backed store.
//!
//! The site has no database: stories, markers and resources are JSON files
//! compiled into the binary, validated once at startup and never mutated.

use std::collections::HashSet;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use welf_core::{ImpactCategory, ImpactMarker, Resource, ResourceFilter, Story, StoryCategory};

use crate::error::StorageError;
use crate::traits::{ImpactStore, ResourceStore, StoryStore};

const STORIES_JSON: &str = include_str!("../fixtures/stories.json");
const MARKERS_JSON: &str = include_str!("../fixtures/impact_markers.json");
const RESOURCES_JSON: &str = include_str!("../fixtures/resources.json");

/// In-memory catalog of everything the site serves.
#[derive(Debug, Clone)]
pub struct FixtureStore {
    stories: Vec<Story>,
    markers: Vec<ImpactMarker>,
    resources: Vec<Resource>,
}

impl FixtureStore {
    /// Loads and validates the embedded fixtures.
    ///
    /// # Errors
    /// Returns `StorageError` if any fixture is malformed, a record breaks a
    /// domain invariant, or two records share an identifier.
    pub fn load() -> Result<Self, StorageError> {
        Self::from_json(STORIES_JSON, MARKERS_JSON, RESOURCES_JSON)
    }

    /// Builds a store from raw JSON documents.
    ///
    /// # Errors
    /// Same as [`FixtureStore::load`].
    pub fn from_json(stories: &str, markers: &str, resources: &str) -> Result<Self, StorageError> {
        Self::new(
            parse("stories fixture", stories)?,
            parse("impact markers fixture", markers)?,
            parse("resources fixture", resources)?,
        )
    }

    /// # Errors
    /// Returns `StorageError` when a record is invalid or an id repeats.
    pub fn new(
        stories: Vec<Story>,
        markers: Vec<ImpactMarker>,
        resources: Vec<Resource>,
    ) -> Result<Self, StorageError> {
        for story in &stories {
            story.validate()?;
        }
        for marker in &markers {
            marker.validate()?;
        }
        ensure_unique("story", stories.iter().map(|s| s.id))?;
        ensure_unique("impact marker", markers.iter().map(|m| m.id))?;
        ensure_unique("resource", resources.iter().map(|r| r.id))?;

        tracing::debug!(
            stories = stories.len(),
            markers = markers.len(),
            resources = resources.len(),
            "fixture store loaded"
        );
        Ok(Self { stories, markers, resources })
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn markers(&self) -> &[ImpactMarker] {
        &self.markers
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }
}

fn parse<T: DeserializeOwned>(context: &str, json: &str) -> Result<Vec<T>, StorageError> {
    serde_json::from_str(json).map_err(|e| StorageError::corrupt(context, e))
}

fn ensure_unique(
    entity: &'static str,
    ids: impl Iterator<Item = u32>,
) -> Result<(), StorageError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(StorageError::DuplicateId { entity, id });
        }
    }
    Ok(())
}

#[async_trait]
impl StoryStore for FixtureStore {
    async fn list_stories(
        &self,
        category: Option<StoryCategory>,
    ) -> Result<Vec<Story>, StorageError> {
        Ok(self
            .stories
            .iter()
            .filter(|s| category.is_none_or(|c| s.category == c))
            .cloned()
            .collect())
    }

    async fn get_story(&self, id: u32) -> Result<Option<Story>, StorageError> {
        Ok(self.stories.iter().find(|s| s.id == id).cloned())
    }
}

#[async_trait]
impl ImpactStore for FixtureStore {
    async fn list_markers(
        &self,
        category: Option<ImpactCategory>,
    ) -> Result<Vec<ImpactMarker>, StorageError> {
        Ok(self
            .markers
            .iter()
            .filter(|m| category.is_none_or(|c| m.category == c))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ResourceStore for FixtureStore {
    async fn list_resources(&self, filter: ResourceFilter) -> Result<Vec<Resource>, StorageError> {
        Ok(self.resources.iter().filter(|r| filter.matches(r)).cloned().collect())
    }
}
