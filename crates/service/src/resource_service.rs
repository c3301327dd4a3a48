use std::sync::Arc;

use welf_core::{Resource, ResourceFilter};
use welf_storage::ResourceStore;

use crate::ServiceError;

pub struct ResourceService {
    store: Arc<dyn ResourceStore>,
}

impl ResourceService {
    #[must_use]
    pub fn new(store: Arc<dyn ResourceStore>) -> Self {
        Self { store }
    }

    pub async fn list_resources(&self, filter: ResourceFilter) -> Result<Vec<Resource>, ServiceError> {
        Ok(self.store.list_resources(filter).await?)
    }
}
