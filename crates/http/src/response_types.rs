//! Response types (Serialize)

use serde::Serialize;
use welf_core::{ImpactMarker, StoryPage};
use welf_prices::PriceBoard;

const SUCCESS: &str = "success";

/// `{"status": "success", "data": [...], "total", "page", "totalPages"}`
#[derive(Debug, Serialize)]
pub struct StoriesResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub page: StoryPage,
}

impl From<StoryPage> for StoriesResponse {
    fn from(page: StoryPage) -> Self {
        Self { status: SUCCESS, page }
    }
}

/// `{"status": "success", "data": ...}`
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub status: &'static str,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn success(data: T) -> Self {
        Self { status: SUCCESS, data }
    }
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub status: &'static str,
    pub selected: Option<ImpactMarker>,
}

impl From<Option<ImpactMarker>> for SelectionResponse {
    fn from(selected: Option<ImpactMarker>) -> Self {
        Self { status: SUCCESS, selected }
    }
}

#[derive(Debug, Serialize)]
pub struct PricesResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub board: PriceBoard,
}

impl From<PriceBoard> for PricesResponse {
    fn from(board: PriceBoard) -> Self {
        Self { status: SUCCESS, board }
    }
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct ReadinessResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
