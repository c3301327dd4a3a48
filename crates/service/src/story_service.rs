use std::sync::Arc;

use welf_core::{Story, StoryPage, StoryQuery, paginate};
use welf_storage::StoryStore;

use crate::ServiceError;

pub struct StoryService {
    store: Arc<dyn StoryStore>,
}

impl StoryService {
    #[must_use]
    pub fn new(store: Arc<dyn StoryStore>) -> Self {
        Self { store }
    }

    /// One page of the catalog, filtered by the query category.
    ///
    /// A category with no stories is an empty page, not an error. Store
    /// failures surface as `ServiceError::Storage` and are never retried.
    pub async fn list_stories(&self, query: &StoryQuery) -> Result<StoryPage, ServiceError> {
        tracing::debug!(
            category = query.category.map(|c| c.as_str()),
            page = query.page,
            limit = query.limit,
            "listing stories"
        );
        let stories = self.store.list_stories(query.category).await.map_err(|e| {
            tracing::error!(error = %e, "story store read failed");
            ServiceError::Storage(e)
        })?;
        Ok(paginate(&stories, query))
    }

    pub async fn get_story(&self, id: u32) -> Result<Option<Story>, ServiceError> {
        Ok(self.store.get_story(id).await?)
    }
}
