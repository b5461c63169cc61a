//! The nine gizmo handles
//!
//! A [`Handle`] pairs a fixed identity and geometry with the two pieces of
//! state that may change after creation: visibility and highlight.

use glam::{Vec2, Vec3};
use te_core::constants::HANDLE_COUNT;
use te_core::{Axis, HandleId, HandleKind, PlaneKind, Pose};
use te_renderer::ViewCamera;
use te_renderer::config::GizmoConfig;
use te_renderer::gizmo::collision::{axis_hit, ellipse_annulus_hit, quad_hit};
use te_renderer::projection::{project_circle_to_ellipse, project_quad, project_segment};

/// Kind-specific geometry of a handle, in the gizmo's local frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HandleShape {
    /// Segment along `axis`, centred on the gizmo origin
    Axis {
        axis: Axis,
        length: f32,
        thickness: f32,
    },
    /// Square in one of the three planes
    Plane {
        plane: PlaneKind,
        center: Vec3,
        half_size: f32,
    },
    /// Ring around `axis`, centred on the gizmo origin
    Rotate {
        axis: Axis,
        radius: f32,
        thickness: f32,
    },
}

/// A single manipulable handle
#[derive(Debug, Clone, PartialEq)]
pub struct Handle {
    id: HandleId,
    base_color: [f32; 4],
    shape: HandleShape,
    pub(crate) visible: bool,
    pub(crate) highlighted: bool,
}

impl Handle {
    /// Create a handle from the configured geometry and palette
    pub fn new(id: HandleId, config: &GizmoConfig) -> Self {
        let geometry = &config.geometry;
        let colors = &config.colors;

        let (shape, base_color) = match id.kind() {
            HandleKind::Axis(axis) => (
                HandleShape::Axis {
                    axis,
                    length: geometry.axis_length,
                    thickness: geometry.axis_thickness,
                },
                axis_color(axis, config),
            ),
            HandleKind::Plane(plane) => (
                HandleShape::Plane {
                    plane,
                    center: geometry.plane_center(plane),
                    half_size: geometry.plane_size * 0.5,
                },
                match plane {
                    PlaneKind::XY => colors.xy_plane,
                    PlaneKind::XZ => colors.xz_plane,
                    PlaneKind::YZ => colors.yz_plane,
                },
            ),
            HandleKind::Rotate(axis) => (
                HandleShape::Rotate {
                    axis,
                    radius: geometry.ring_radius,
                    thickness: geometry.ring_thickness,
                },
                axis_color(axis, config),
            ),
        };

        Self {
            id,
            base_color,
            shape,
            visible: true,
            highlighted: false,
        }
    }

    /// Create all nine handles in creation order
    pub fn build_all(config: &GizmoConfig) -> [Handle; HANDLE_COUNT] {
        HandleId::ALL.map(|id| Handle::new(id, config))
    }

    pub fn id(&self) -> HandleId {
        self.id
    }

    pub fn kind(&self) -> HandleKind {
        self.id.kind()
    }

    pub fn shape(&self) -> &HandleShape {
        &self.shape
    }

    pub fn base_color(&self) -> [f32; 4] {
        self.base_color
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Direction (axis handles), normal (plane handles) or rotation axis
    /// (ring handles) in world space for the given gizmo frame
    pub fn world_direction(&self, frame: &Pose) -> Vec3 {
        let local = match self.shape {
            HandleShape::Axis { axis, .. } | HandleShape::Rotate { axis, .. } => axis.direction(),
            HandleShape::Plane { plane, .. } => plane.normal(),
        };
        frame.transform_direction(local).normalize_or_zero()
    }

    /// Screen-space test of the pointer against this handle
    pub fn hit_test(&self, frame: &Pose, camera: &impl ViewCamera, pointer: Vec2) -> bool {
        match self.shape {
            HandleShape::Axis {
                length, thickness, ..
            } => {
                let half = self.world_direction(frame) * (length * 0.5);
                let (a, b) = project_segment(camera, frame.position - half, frame.position + half);
                axis_hit(pointer, a, b, thickness)
            }
            HandleShape::Plane {
                plane,
                center,
                half_size,
            } => {
                let (right, up) = plane.quad_basis();
                let corners = project_quad(
                    camera,
                    frame.transform_point(center),
                    frame.transform_direction(right),
                    frame.transform_direction(up),
                    half_size,
                );
                quad_hit(pointer, &corners)
            }
            HandleShape::Rotate {
                radius, thickness, ..
            } => project_circle_to_ellipse(
                camera,
                frame.position,
                self.world_direction(frame),
                radius,
            )
            .is_some_and(|ellipse| ellipse_annulus_hit(pointer, &ellipse, thickness)),
        }
    }
}

fn axis_color(axis: Axis, config: &GizmoConfig) -> [f32; 4] {
    match axis {
        Axis::X => config.colors.x_axis,
        Axis::Y => config.colors.y_axis,
        Axis::Z => config.colors.z_axis,
    }
}
