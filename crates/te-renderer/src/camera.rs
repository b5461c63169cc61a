//! Perspective camera for the gizmo viewport

use glam::{Mat4, Vec2, Vec3};
use te_core::Ray;

use crate::config::CameraConfig;

/// Camera services the gizmo needs from its host.
///
/// Screen coordinates are pixels with the origin at the top-left corner of the
/// viewport. The `z` component returned by [`ViewCamera::world_to_screen`] is
/// the depth of the point along the camera's forward axis in world units;
/// points with non-positive depth are behind the camera.
pub trait ViewCamera {
    /// Project a world point to (screen x, screen y, view depth)
    fn world_to_screen(&self, point: Vec3) -> Vec3;
    /// World-space ray through a screen position
    fn screen_to_ray(&self, screen: Vec2) -> Ray;
    /// Camera right vector in world space
    fn right(&self) -> Vec3;
    /// Camera up vector in world space
    fn up(&self) -> Vec3;
    /// Camera view direction in world space
    fn forward(&self) -> Vec3;
}

/// Look-at perspective camera
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Eye position
    pub position: Vec3,
    /// Point the camera looks at
    pub target: Vec3,
    /// World up hint
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fov: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
    /// Viewport size in pixels
    pub viewport: Vec2,
}

impl Camera {
    /// Create a camera at `position` looking at `target` with Y up
    pub fn look_at(position: Vec3, target: Vec3, viewport: Vec2) -> Self {
        Self::from_config(&CameraConfig::default(), position, target, viewport)
    }

    /// Create a camera using clip and field-of-view defaults from config
    pub fn from_config(
        config: &CameraConfig,
        position: Vec3,
        target: Vec3,
        viewport: Vec2,
    ) -> Self {
        Self {
            position,
            target,
            up: Vec3::Y,
            fov: config.fov_degrees.to_radians(),
            near: config.near_plane,
            far: config.far_plane,
            viewport,
        }
    }

    /// Update viewport size
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width.max(1.0), height.max(1.0));
    }

    /// Width / height of the viewport
    pub fn aspect(&self) -> f32 {
        self.viewport.x / self.viewport.y
    }

    /// Set field of view in degrees
    pub fn set_fov_degrees(&mut self, fov_degrees: f32) {
        self.fov = fov_degrees.clamp(10.0, 120.0).to_radians();
    }

    /// Get view matrix
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Get projection matrix
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect(), self.near, self.far)
    }

    /// Combined projection * view matrix
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl ViewCamera for Camera {
    fn world_to_screen(&self, point: Vec3) -> Vec3 {
        let clip = self.view_projection_matrix() * point.extend(1.0);
        // For a right-handed perspective projection w is the view depth
        let depth = clip.w;
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;

        Vec3::new(
            (ndc_x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc_y) * 0.5 * self.viewport.y,
            depth,
        )
    }

    fn screen_to_ray(&self, screen: Vec2) -> Ray {
        // Convert to normalized device coordinates
        let ndc_x = (2.0 * screen.x / self.viewport.x) - 1.0;
        let ndc_y = 1.0 - (2.0 * screen.y / self.viewport.y);

        // Direction through the pixel in view space, then rotated into world space
        let half_height = (self.fov * 0.5).tan();
        let view_dir = Vec3::new(
            ndc_x * half_height * self.aspect(),
            ndc_y * half_height,
            -1.0,
        );
        let direction = self.view_matrix().inverse().transform_vector3(view_dir);

        Ray::new(self.position, direction)
    }

    fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize()
    }

    fn up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize()
    }

    fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn front_camera() -> Camera {
        Camera::look_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn test_target_projects_to_viewport_centre() {
        let camera = front_camera();
        let screen = camera.world_to_screen(Vec3::ZERO);
        assert!((screen.x - 400.0).abs() < 1e-3);
        assert!((screen.y - 300.0).abs() < 1e-3);
        assert!((screen.z - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_screen_axes_follow_world_axes() {
        let camera = front_camera();
        let right = camera.world_to_screen(Vec3::X);
        let up = camera.world_to_screen(Vec3::Y);
        assert!(right.x > 400.0);
        // Screen y grows downwards
        assert!(up.y < 300.0);
    }

    #[test]
    fn test_point_behind_camera_has_negative_depth() {
        let camera = front_camera();
        assert!(camera.world_to_screen(Vec3::new(0.0, 0.0, 20.0)).z < 0.0);
    }

    #[test]
    fn test_screen_to_ray_passes_through_projected_point() {
        let camera = front_camera();
        let world = Vec3::new(0.3, -0.2, 0.5);
        let screen = camera.world_to_screen(world);
        let ray = camera.screen_to_ray(screen.truncate());

        // Distance from the world point to the ray line
        let to_point = world - ray.origin;
        let along = to_point.dot(ray.direction);
        let distance = (to_point - ray.direction * along).length();
        assert!(distance < 1e-3);
        assert!(along > 0.0);
    }

    #[test]
    fn test_basis_is_orthonormal() {
        let camera = front_camera();
        assert!(camera.right().abs_diff_eq(Vec3::X, 1e-6));
        assert!(camera.up().abs_diff_eq(Vec3::Y, 1e-6));
        assert!(camera.forward().abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }
}
