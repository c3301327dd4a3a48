use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use welf_core::ImpactMarker;
use welf_service::{FlatMarker, GlobeMarker};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::{CategoryParams, GlobeParams, SelectFlatParams, SelectParams};
use crate::response_types::{DataResponse, SelectionResponse};

pub async fn list_markers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoryParams>,
) -> Result<Json<DataResponse<Vec<ImpactMarker>>>, ApiError> {
    let markers = state.impact_service.list_markers(params.category()?).await?;
    Ok(Json(DataResponse::success(markers)))
}

pub async fn globe(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GlobeParams>,
) -> Result<Json<DataResponse<Vec<GlobeMarker>>>, ApiError> {
    let markers = state
        .impact_service
        .globe_markers(params.category()?, params.radius()?, params.rotation()?)
        .await?;
    Ok(Json(DataResponse::success(markers)))
}

pub async fn flat(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CategoryParams>,
) -> Result<Json<DataResponse<Vec<FlatMarker>>>, ApiError> {
    let markers = state.impact_service.flat_markers(params.category()?).await?;
    Ok(Json(DataResponse::success(markers)))
}

pub async fn select(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectParams>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let selected = state
        .impact_service
        .select_on_globe(
            params.pointer()?,
            params.rotation()?,
            params.radius()?,
            params.hit_radius()?,
            params.category()?,
        )
        .await?;
    Ok(Json(selected.into()))
}

pub async fn select_flat(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SelectFlatParams>,
) -> Result<Json<SelectionResponse>, ApiError> {
    let selected = state
        .impact_service
        .select_on_flat(params.pointer()?, params.hit_radius()?, params.category()?)
        .await?;
    Ok(Json(selected.into()))
}
