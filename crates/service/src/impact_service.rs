use std::sync::Arc;

use serde::Serialize;
use welf_core::{ImpactCategory, ImpactMarker};
use welf_geo::{
    FlatPoint, Rotation, ScreenPoint, Vec3, flat_candidates, globe_candidates, pick_nearest,
    project_2d_coord, project_coord,
};
use welf_storage::ImpactStore;

use crate::ServiceError;

/// A marker placed on the rotated globe.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobeMarker {
    #[serde(flatten)]
    pub marker: ImpactMarker,
    /// Position on the unrotated globe
    pub position: Vec3,
    /// Position after the view rotation; the camera sits on `+z`
    pub view_position: Vec3,
    /// Whether the marker faces the camera
    pub visible: bool,
}

/// A marker placed on the flat map.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlatMarker {
    #[serde(flatten)]
    pub marker: ImpactMarker,
    pub position: FlatPoint,
}

pub struct ImpactService {
    store: Arc<dyn ImpactStore>,
}

impl ImpactService {
    #[must_use]
    pub fn new(store: Arc<dyn ImpactStore>) -> Self {
        Self { store }
    }

    pub async fn list_markers(
        &self,
        category: Option<ImpactCategory>,
    ) -> Result<Vec<ImpactMarker>, ServiceError> {
        Ok(self.store.list_markers(category).await?)
    }

    pub async fn globe_markers(
        &self,
        category: Option<ImpactCategory>,
        radius: f64,
        rotation: Rotation,
    ) -> Result<Vec<GlobeMarker>, ServiceError> {
        check_radius(radius)?;
        check_rotation(rotation)?;
        let markers = self.store.list_markers(category).await?;
        Ok(markers
            .into_iter()
            .map(|marker| {
                let position = project_coord(marker.coordinates, radius);
                let view_position = rotation.apply(position);
                GlobeMarker { marker, position, view_position, visible: view_position.z >= 0.0 }
            })
            .collect())
    }

    pub async fn flat_markers(
        &self,
        category: Option<ImpactCategory>,
    ) -> Result<Vec<FlatMarker>, ServiceError> {
        let markers = self.store.list_markers(category).await?;
        Ok(markers
            .into_iter()
            .map(|marker| {
                let position = project_2d_coord(marker.coordinates);
                FlatMarker { marker, position }
            })
            .collect())
    }

    /// Marker under `pointer` on the rotated globe, if any.
    ///
    /// `pointer` is on the orthographic view plane in globe units. Only
    /// markers in `category` are candidates, as on the drawn globe.
    pub async fn select_on_globe(
        &self,
        pointer: ScreenPoint,
        rotation: Rotation,
        radius: f64,
        hit_radius: f64,
        category: Option<ImpactCategory>,
    ) -> Result<Option<ImpactMarker>, ServiceError> {
        check_radius(radius)?;
        check_rotation(rotation)?;
        check_hit_radius(hit_radius)?;
        check_pointer(pointer)?;
        let markers = self.store.list_markers(category).await?;
        let hit = pick_nearest(pointer, globe_candidates(&markers, radius, rotation), hit_radius);
        tracing::debug!(x = pointer.x, y = pointer.y, hit = hit.map(|h| h.id), "globe pick");
        Ok(hit.and_then(|h| markers.into_iter().find(|m| m.id == h.id)))
    }

    /// Marker under `pointer` on the flat map, if any. `pointer` is in percent.
    pub async fn select_on_flat(
        &self,
        pointer: ScreenPoint,
        hit_radius_pct: f64,
        category: Option<ImpactCategory>,
    ) -> Result<Option<ImpactMarker>, ServiceError> {
        check_hit_radius(hit_radius_pct)?;
        check_pointer(pointer)?;
        let markers = self.store.list_markers(category).await?;
        let hit = pick_nearest(pointer, flat_candidates(&markers), hit_radius_pct);
        tracing::debug!(x = pointer.x, y = pointer.y, hit = hit.map(|h| h.id), "flat pick");
        Ok(hit.and_then(|h| markers.into_iter().find(|m| m.id == h.id)))
    }
}

fn check_radius(radius: f64) -> Result<(), ServiceError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(ServiceError::InvalidInput(format!("radius must be a positive number, got {radius}")))
    }
}

fn check_hit_radius(hit_radius: f64) -> Result<(), ServiceError> {
    if hit_radius.is_finite() && hit_radius >= 0.0 {
        Ok(())
    } else {
        Err(ServiceError::InvalidInput(format!(
            "hit radius must be a non-negative number, got {hit_radius}"
        )))
    }
}

fn check_rotation(rotation: Rotation) -> Result<(), ServiceError> {
    if rotation.yaw.is_finite() && rotation.pitch.is_finite() {
        Ok(())
    } else {
        Err(ServiceError::InvalidInput("rotation angles must be finite".to_owned()))
    }
}

fn check_pointer(pointer: ScreenPoint) -> Result<(), ServiceError> {
    if pointer.x.is_finite() && pointer.y.is_finite() {
        Ok(())
    } else {
        Err(ServiceError::InvalidInput("pointer coordinates must be finite".to_owned()))
    }
}
