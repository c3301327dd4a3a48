//! Globe and flat-map geometry for the impact map
//!
//! Projection, drag rotation and marker picking. Pure functions over `f64`,
//! no rendering.

mod picking;
mod projection;
mod rotation;

pub use picking::{
    PickCandidate, PickHit, ScreenPoint, Selection, flat_candidates, globe_candidates,
    pick_nearest,
};
pub use projection::{
    FlatPoint, Vec3, project, project_2d, project_2d_coord, project_coord, unproject,
};
pub use rotation::{DragState, Rotation};
