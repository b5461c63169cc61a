//! Per-handle enable flags supplied by the host

use serde::{Deserialize, Serialize};
use te_core::{Axis, HandleId, HandleKind};

/// Which translation axes and rotation rings the host enables.
///
/// Plane handles have no flag of their own: a plane is shown only when both
/// of its axes are enabled for translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibilityConfig {
    pub translate_x: bool,
    pub translate_y: bool,
    pub translate_z: bool,
    pub rotate_x: bool,
    pub rotate_y: bool,
    pub rotate_z: bool,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self::all()
    }
}

impl VisibilityConfig {
    /// Every handle enabled
    pub fn all() -> Self {
        Self {
            translate_x: true,
            translate_y: true,
            translate_z: true,
            rotate_x: true,
            rotate_y: true,
            rotate_z: true,
        }
    }

    /// Every handle disabled
    pub fn none() -> Self {
        Self {
            translate_x: false,
            translate_y: false,
            translate_z: false,
            rotate_x: false,
            rotate_y: false,
            rotate_z: false,
        }
    }

    /// Preset for floor tiles: slide in X/Y and spin around Z
    pub fn tile() -> Self {
        Self {
            translate_x: true,
            translate_y: true,
            rotate_z: true,
            ..Self::none()
        }
    }

    pub fn translate(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.translate_x,
            Axis::Y => self.translate_y,
            Axis::Z => self.translate_z,
        }
    }

    pub fn rotate(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.rotate_x,
            Axis::Y => self.rotate_y,
            Axis::Z => self.rotate_z,
        }
    }

    /// Whether a handle should be shown and hit-tested
    pub fn is_visible(&self, handle: HandleId) -> bool {
        match handle.kind() {
            HandleKind::Axis(axis) => self.translate(axis),
            HandleKind::Plane(plane) => {
                let (a, b) = plane.axes();
                self.translate(a) && self.translate(b)
            }
            HandleKind::Rotate(axis) => self.rotate(axis),
        }
    }

    /// Build a config from six flags in `[tx, ty, tz, rx, ry, rz]` order
    pub fn from_flags(flags: [bool; 6]) -> Self {
        let [translate_x, translate_y, translate_z, rotate_x, rotate_y, rotate_z] = flags;
        Self {
            translate_x,
            translate_y,
            translate_z,
            rotate_x,
            rotate_y,
            rotate_z,
        }
    }
}
