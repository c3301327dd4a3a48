//! Globe rotation and drag interaction.

use serde::{Deserialize, Serialize};

use crate::projection::Vec3;

/// Globe orientation in radians. Yaw turns about `+y`, pitch about `+x`.
///
/// Angles are unbounded; the trigonometry wraps them.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub yaw: f64,
    pub pitch: f64,
}

impl Rotation {
    pub const fn new(yaw: f64, pitch: f64) -> Self {
        Self { yaw, pitch }
    }

    /// Rotates `point` by yaw first, then pitch.
    pub fn apply(&self, point: Vec3) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let x = point.x * cy + point.z * sy;
        let z = -point.x * sy + point.z * cy;

        let (sp, cp) = self.pitch.sin_cos();
        Vec3 { x, y: point.y * cp - z * sp, z: point.y * sp + z * cp }
    }
}

/// Pointer-drag state for the globe.
///
/// Every move adds `delta_px * sensitivity` to the rotation: horizontal
/// movement to yaw, vertical movement to pitch. Nothing is clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    rotation: Rotation,
    sensitivity: f64,
    last_pos_px: Option<[f64; 2]>,
}

impl DragState {
    pub fn new(sensitivity: f64) -> Self {
        Self { rotation: Rotation::default(), sensitivity, last_pos_px: None }
    }

    pub fn with_rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn is_dragging(&self) -> bool {
        self.last_pos_px.is_some()
    }

    pub fn on_pointer_down(&mut self, pos_px: [f64; 2]) {
        self.last_pos_px = Some(pos_px);
    }

    /// Applies the movement since the previous event. Ignored when not dragging.
    pub fn on_pointer_move(&mut self, pos_px: [f64; 2]) -> Rotation {
        if let Some([last_x, last_y]) = self.last_pos_px {
            self.rotation.yaw += (pos_px[0] - last_x) * self.sensitivity;
            self.rotation.pitch += (pos_px[1] - last_y) * self.sensitivity;
            self.last_pos_px = Some(pos_px);
        }
        self.rotation
    }

    pub fn on_pointer_up(&mut self) {
        self.last_pos_px = None;
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: Vec3, b: Vec3) -> bool {
        a.distance(&b) < 1e-9
    }

    #[test]
    fn identity_rotation_keeps_point() {
        let p = Vec3::new(0.3, -1.2, 0.7);
        assert_eq!(Rotation::default().apply(p), p);
    }

    #[test]
    fn yaw_moves_front_point_right() {
        let front = Vec3::new(0.0, 0.0, 1.0);
        let turned = Rotation::new(FRAC_PI_2, 0.0).apply(front);
        assert!(close(turned, Vec3::new(1.0, 0.0, 0.0)), "{turned:?}");
    }

    #[test]
    fn pitch_moves_front_point_down() {
        let front = Vec3::new(0.0, 0.0, 1.0);
        let tilted = Rotation::new(0.0, FRAC_PI_2).apply(front);
        assert!(close(tilted, Vec3::new(0.0, -1.0, 0.0)), "{tilted:?}");
    }

    #[test]
    fn full_turn_wraps() {
        let p = Vec3::new(0.5, 0.5, 0.5);
        assert!(close(Rotation::new(2.0 * PI, -4.0 * PI).apply(p), p));
    }

    #[test]
    fn rotation_preserves_length() {
        let p = Vec3::new(1.0, 2.0, -0.5);
        let r = Rotation::new(0.8, -2.3).apply(p);
        assert!((r.length() - p.length()).abs() < EPS);
    }

    #[test]
    fn drag_accumulates_on_both_axes() {
        let mut drag = DragState::new(0.01);
        drag.on_pointer_down([100.0, 100.0]);
        drag.on_pointer_move([110.0, 95.0]);
        let rotation = drag.on_pointer_move([130.0, 95.0]);
        assert!((rotation.yaw - 0.3).abs() < EPS);
        assert!((rotation.pitch + 0.05).abs() < EPS);
    }

    #[test]
    fn move_without_drag_is_ignored() {
        let mut drag = DragState::new(0.01);
        assert_eq!(drag.on_pointer_move([50.0, 50.0]), Rotation::default());
        drag.on_pointer_down([0.0, 0.0]);
        drag.on_pointer_up();
        assert!(!drag.is_dragging());
        assert_eq!(drag.on_pointer_move([500.0, 500.0]), Rotation::default());
    }

    #[test]
    fn drag_is_not_clamped() {
        let mut drag = DragState::new(1.0);
        drag.on_pointer_down([0.0, 0.0]);
        let rotation = drag.on_pointer_move([10.0, -20.0]);
        assert!((rotation.yaw - 10.0).abs() < EPS);
        assert!((rotation.pitch + 20.0).abs() < EPS);
    }

    #[test]
    fn new_drag_continues_from_previous_rotation() {
        let mut drag = DragState::new(0.5).with_rotation(Rotation::new(1.0, 1.0));
        drag.on_pointer_down([0.0, 0.0]);
        let rotation = drag.on_pointer_move([2.0, 2.0]);
        assert!((rotation.yaw - 2.0).abs() < EPS);
        assert!((rotation.pitch - 2.0).abs() < EPS);
    }
}
