//! Geographic to render-space projection.
//!
//! Globe convention: `+y` is the north pole, the camera looks down `-z`, and
//! longitude 0 sits on `+x`. The flat map is equirectangular in percent.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use welf_core::LatLon;

const DEG_TO_RAD: f64 = PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / PI;

/// Point in globe space.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance(&self, other: &Self) -> f64 {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z).length()
    }
}

/// Position on the flat map as offsets from the top-left corner.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatPoint {
    pub left_pct: f64,
    pub top_pct: f64,
}

/// Spherical to Cartesian: latitude/longitude in degrees onto a sphere of `radius`.
///
/// `phi` is the polar angle from the north pole and `theta` is longitude
/// shifted by 180°. The sign on `x` keeps the globe from rendering mirrored.
pub fn project(lat: f64, lon: f64, radius: f64) -> Vec3 {
    let phi = (90.0 - lat) * DEG_TO_RAD;
    let theta = (lon + 180.0) * DEG_TO_RAD;
    Vec3 {
        x: -radius * phi.sin() * theta.cos(),
        y: radius * phi.cos(),
        z: radius * phi.sin() * theta.sin(),
    }
}

pub fn project_coord(coord: LatLon, radius: f64) -> Vec3 {
    project(coord.lat, coord.lon, radius)
}

/// Inverse of [`project`]. The radius is taken from the point itself.
///
/// Longitude is reported in `[-180, 180)`; on the antimeridian either end
/// of the range may come back, both naming the same meridian. At the poles
/// longitude is undefined and comes back as whatever `atan2` yields.
/// Returns `None` for the origin.
pub fn unproject(point: Vec3) -> Option<LatLon> {
    let radius = point.length();
    if radius == 0.0 || !radius.is_finite() {
        return None;
    }
    let phi = (point.y / radius).clamp(-1.0, 1.0).acos();
    let theta = point.z.atan2(-point.x);
    let mut lon = theta * RAD_TO_DEG - 180.0;
    if lon < -180.0 {
        lon += 360.0;
    }
    if lon >= 180.0 {
        lon -= 360.0;
    }
    Some(LatLon { lat: 90.0 - phi * RAD_TO_DEG, lon })
}

/// Equirectangular projection onto a map whose corners are (-180, 90) and (180, -90).
pub fn project_2d(lat: f64, lon: f64) -> FlatPoint {
    FlatPoint {
        left_pct: (lon + 180.0) / 360.0 * 100.0,
        top_pct: (90.0 - lat) / 180.0 * 100.0,
    }
}

pub fn project_2d_coord(coord: LatLon) -> FlatPoint {
    project_2d(coord.lat, coord.lon)
}
