//! World to screen projection of gizmo primitives
//!
//! Everything here is a pure function of a [`ViewCamera`]. Results carry the
//! view depth so callers can reject geometry behind the camera.

use glam::{Vec2, Vec3};

use crate::camera::ViewCamera;

/// A projected point: pixel position plus view depth
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    /// Pixel position, origin at the top-left of the viewport
    pub position: Vec2,
    /// Distance along the camera's forward axis
    pub depth: f32,
}

impl ScreenPoint {
    /// Whether the point lies in front of the camera
    pub fn is_visible(&self) -> bool {
        self.depth > 0.0
    }
}

/// Ellipse approximating a projected circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenEllipse {
    /// Projected circle centre
    pub center: Vec2,
    /// Unit direction of the major axis in screen space
    pub major_dir: Vec2,
    /// Major half-axis length in pixels
    pub major: f32,
    /// Minor half-axis length in pixels
    pub minor: f32,
}

/// Project a single world point
pub fn project_point(camera: &impl ViewCamera, point: Vec3) -> ScreenPoint {
    let screen = camera.world_to_screen(point);
    ScreenPoint {
        position: screen.truncate(),
        depth: screen.z,
    }
}

/// Project both endpoints of a world segment
pub fn project_segment(camera: &impl ViewCamera, a: Vec3, b: Vec3) -> (ScreenPoint, ScreenPoint) {
    (project_point(camera, a), project_point(camera, b))
}

/// Project the four corners of a square centred on `center`.
///
/// `right` and `up` span the square; corners are returned in winding order
/// `c - r - u`, `c + r - u`, `c + r + u`, `c - r + u`.
pub fn project_quad(
    camera: &impl ViewCamera,
    center: Vec3,
    right: Vec3,
    up: Vec3,
    half_size: f32,
) -> [ScreenPoint; 4] {
    let r = right * half_size;
    let u = up * half_size;
    [
        center - r - u,
        center + r - u,
        center + r + u,
        center - r + u,
    ]
    .map(|corner| project_point(camera, corner))
}

/// Approximate the projection of a world circle by an ellipse.
///
/// The circle is sampled at four cardinal points of an in-plane basis; half the
/// screen distance between each opposite pair gives one half-axis. Returns
/// `None` when the circle centre is not in front of the camera.
pub fn project_circle_to_ellipse(
    camera: &impl ViewCamera,
    center: Vec3,
    normal: Vec3,
    radius: f32,
) -> Option<ScreenEllipse> {
    let normal = normal.normalize_or_zero();

    let mut axis1 = normal.cross(Vec3::Y).normalize_or_zero();
    if axis1 == Vec3::ZERO {
        axis1 = normal.cross(Vec3::X).normalize_or_zero();
    }
    let axis2 = normal.cross(axis1).normalize_or_zero();

    let screen_center = project_point(camera, center);
    if !screen_center.is_visible() {
        tracing::trace!("Ring centre behind camera, skipping ellipse projection");
        return None;
    }

    let a = project_point(camera, center + axis1 * radius).position;
    let b = project_point(camera, center - axis1 * radius).position;
    let c = project_point(camera, center + axis2 * radius).position;
    let d = project_point(camera, center - axis2 * radius).position;

    let mut major = (a - b).length() * 0.5;
    let mut minor = (c - d).length() * 0.5;
    let mut major_dir = (a - b).normalize_or_zero();

    if minor > major {
        std::mem::swap(&mut major, &mut minor);
        major_dir = (c - d).normalize_or_zero();
    }

    Some(ScreenEllipse {
        center: screen_center.position,
        major_dir,
        major,
        minor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;

    fn front_camera() -> Camera {
        Camera::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn test_project_segment_depths() {
        let camera = front_camera();
        let (a, b) = project_segment(&camera, Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(a.is_visible() && b.is_visible());
        assert!(a.position.x < 400.0 && b.position.x > 400.0);
        assert!((a.position.y - b.position.y).abs() < 1e-3);
    }

    #[test]
    fn test_project_quad_winding() {
        let camera = front_camera();
        let corners = project_quad(&camera, Vec3::ZERO, Vec3::X, Vec3::Y, 0.5);
        // c - r - u is bottom-left on screen (larger y)
        assert!(corners[0].position.x < corners[1].position.x);
        assert!(corners[0].position.y > corners[3].position.y);
        assert!(corners[2].position.x > corners[3].position.x);
    }

    #[test]
    fn test_facing_circle_projects_to_circle() {
        let camera = front_camera();
        let ellipse = project_circle_to_ellipse(&camera, Vec3::ZERO, Vec3::Z, 1.2).unwrap();
        assert!(ellipse.center.abs_diff_eq(Vec2::new(400.0, 300.0), 1e-3));
        assert!((ellipse.major - ellipse.minor).abs() < 1e-2);
        assert!(ellipse.major > 0.0);
    }

    #[test]
    fn test_edge_on_circle_collapses_minor_axis() {
        let camera = front_camera();
        // Normal Y: the ring lies in the XZ plane, seen edge-on from +Z
        let ellipse = project_circle_to_ellipse(&camera, Vec3::ZERO, Vec3::Y, 1.2).unwrap();
        assert!(ellipse.minor < 1e-3);
        assert!(ellipse.major > 50.0);
        assert!(ellipse.major_dir.x.abs() > 0.99);
    }

    #[test]
    fn test_circle_behind_camera() {
        let camera = front_camera();
        let result = project_circle_to_ellipse(&camera, Vec3::new(0.0, 0.0, 20.0), Vec3::Z, 1.0);
        assert!(result.is_none());
    }
}
