use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use welf_core::StoryPage;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{StoriesParams, StoriesRequest};
use crate::response_types::StoriesResponse;

const FETCH_FAILED: &str = "Failed to fetch stories";

pub async fn list_stories(
    State(state): State<Arc<AppState>>,
    Query(params): Query<StoriesParams>,
) -> Result<Json<StoriesResponse>, ApiError> {
    let query = match params.into_request()? {
        StoriesRequest::Query(query) => query,
        StoriesRequest::UnknownCategory { page } => {
            return Ok(Json(StoryPage::empty(page).into()));
        },
    };
    let page = state
        .story_service
        .list_stories(&query)
        .await
        .map_err(|e| ApiError::from(e).internal_message(FETCH_FAILED))?;
    Ok(Json(page.into()))
}
