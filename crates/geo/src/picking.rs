//! Marker hit-testing in render space.
//!
//! Ordering contract:
//! - The candidate closest to the pointer wins.
//! - At equal distance the lower marker id wins.
//! - Candidates farther than the hit radius never win.

use serde::{Deserialize, Serialize};
use welf_core::ImpactMarker;

use crate::projection::{project_2d_coord, project_coord};
use crate::rotation::Rotation;

/// A position in render space: globe units on the view plane, or map percent.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A marker as it currently appears in render space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickCandidate {
    pub id: u32,
    pub position: ScreenPoint,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PickHit {
    pub id: u32,
    pub distance: f64,
}

/// Nearest candidate within `hit_radius` of `pointer`.
pub fn pick_nearest(
    pointer: ScreenPoint,
    candidates: impl IntoIterator<Item = PickCandidate>,
    hit_radius: f64,
) -> Option<PickHit> {
    if !(hit_radius >= 0.0) {
        return None;
    }
    let mut best: Option<PickHit> = None;
    for candidate in candidates {
        let distance = pointer.distance(&candidate.position);
        if !(distance <= hit_radius) {
            continue;
        }
        best = match best {
            None => Some(PickHit { id: candidate.id, distance }),
            Some(current) => {
                let ord =
                    distance.total_cmp(&current.distance).then_with(|| candidate.id.cmp(&current.id));
                if ord.is_lt() { Some(PickHit { id: candidate.id, distance }) } else { Some(current) }
            },
        };
    }
    best
}

/// Orthographic view-plane positions of the markers facing the camera.
///
/// Markers are projected at `radius`, rotated, and dropped when they end up
/// on the far hemisphere (`z < 0`).
pub fn globe_candidates(
    markers: &[ImpactMarker],
    radius: f64,
    rotation: Rotation,
) -> Vec<PickCandidate> {
    markers
        .iter()
        .filter_map(|m| {
            let p = rotation.apply(project_coord(m.coordinates, radius));
            (p.z >= 0.0).then_some(PickCandidate { id: m.id, position: ScreenPoint::new(p.x, p.y) })
        })
        .collect()
}

/// Flat-map positions in percent, `x` from the left edge and `y` from the top.
pub fn flat_candidates(markers: &[ImpactMarker]) -> Vec<PickCandidate> {
    markers
        .iter()
        .map(|m| {
            let p = project_2d_coord(m.coordinates);
            PickCandidate { id: m.id, position: ScreenPoint::new(p.left_pct, p.top_pct) }
        })
        .collect()
}

/// Currently selected marker. A miss clears the selection.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    selected: Option<u32>,
}

impl Selection {
    pub fn selected(&self) -> Option<u32> {
        self.selected
    }

    /// Runs a pick and stores its outcome, hit or miss.
    pub fn select_at(
        &mut self,
        pointer: ScreenPoint,
        candidates: impl IntoIterator<Item = PickCandidate>,
        hit_radius: f64,
    ) -> Option<u32> {
        self.selected = pick_nearest(pointer, candidates, hit_radius).map(|hit| hit.id);
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }
}
