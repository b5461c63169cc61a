//! Drag-start snapshot

use glam::Vec3;
use te_core::{HandleId, Plane, Pose, Ray};

/// Kind-specific reference captured when a drag begins
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragAnchor {
    /// Translation along a world axis
    Axis {
        /// Unit world direction of the axis at drag start
        direction: Vec3,
        /// Closest point on the axis line to the drag-start ray
        start_point: Vec3,
    },
    /// Translation within a plane through the drag-start position
    Plane { plane: Plane, start_point: Vec3 },
    /// Rotation around a ring axis
    Rotate {
        /// Plane through the drag-start position, normal to the world rotation axis
        plane: Plane,
        /// Rotation axis in the gizmo's local frame
        local_axis: Vec3,
        /// Drag-start ray/plane intersection
        start_point: Vec3,
        /// In-plane angle of the previous frame's intersection (radians)
        last_angle: f32,
        /// Signed angle accumulated since drag start (radians)
        accumulated_angle: f32,
    },
}

/// State that lives from drag start to drag end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub handle: HandleId,
    /// Pointer ray when the drag began
    pub start_ray: Ray,
    /// Target pose when the drag began
    pub start_pose: Pose,
    pub anchor: DragAnchor,
}
