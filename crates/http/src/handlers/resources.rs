use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use welf_core::Resource;

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::ResourceParams;
use crate::response_types::DataResponse;

pub async fn list_resources(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ResourceParams>,
) -> Result<Json<DataResponse<Vec<Resource>>>, ApiError> {
    let resources = state.resource_service.list_resources(params.filter()?).await?;
    Ok(Json(DataResponse::success(resources)))
}
