//! Rays, planes and line/line closest points

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{LINE_PARALLEL_EPSILON, RAY_PLANE_PARALLEL_EPSILON};

/// A half-line in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// An infinite plane given by a unit normal and a point on it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub normal: Vec3,
    pub point: Vec3,
}

impl Plane {
    pub fn new(normal: Vec3, point: Vec3) -> Self {
        Self {
            normal: normal.normalize_or_zero(),
            point,
        }
    }

    /// Same plane with the normal reversed
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            point: self.point,
        }
    }

    /// Ray parameter of the intersection, if the ray hits the plane in front of its origin.
    ///
    /// Returns `None` when the ray is parallel to the plane or the intersection
    /// lies behind the ray origin.
    pub fn raycast(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < RAY_PLANE_PARALLEL_EPSILON {
            return None;
        }

        let t = (self.point - ray.origin).dot(self.normal) / denom;
        if t <= 0.0 {
            return None;
        }

        Some(t)
    }

    /// Intersection point of the ray with the plane
    pub fn intersect(&self, ray: &Ray) -> Option<Vec3> {
        self.raycast(ray).map(|t| ray.point_at(t))
    }
}

/// Closest point on the axis line `axis_origin + t * axis_dir` to the given ray.
///
/// Minimizes the squared distance between the two lines by solving the 2x2
/// normal equations. When the lines are nearly parallel the system is
/// singular and `axis_origin` is returned unchanged.
pub fn closest_point_on_axis(ray: &Ray, axis_origin: Vec3, axis_dir: Vec3) -> Vec3 {
    let d1 = ray.direction;
    let d2 = axis_dir;

    let a = d1.dot(d1);
    let b = d1.dot(d2);
    let e = d2.dot(d2);
    let d = a * e - b * b;

    if d.abs() < LINE_PARALLEL_EPSILON {
        return axis_origin;
    }

    let r = ray.origin - axis_origin;
    let c = d1.dot(r);
    let f = d2.dot(r);
    let t = (a * f - b * c) / d;

    axis_origin + d2 * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_raycast_hit() {
        let plane = Plane::new(Vec3::Z, Vec3::ZERO);
        let ray = Ray::new(Vec3::new(1.0, 2.0, 5.0), Vec3::NEG_Z);
        let hit = plane.intersect(&ray).unwrap();
        assert!(hit.abs_diff_eq(Vec3::new(1.0, 2.0, 0.0), 1e-6));
    }

    #[test]
    fn test_plane_raycast_behind_origin() {
        let plane = Plane::new(Vec3::Z, Vec3::ZERO);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
        assert!(plane.raycast(&ray).is_none());
    }

    #[test]
    fn test_plane_raycast_parallel() {
        let plane = Plane::new(Vec3::Y, Vec3::ZERO);
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
        assert!(plane.raycast(&ray).is_none());
    }

    #[test]
    fn test_flipped_plane_hits_same_point() {
        let plane = Plane::new(Vec3::Z, Vec3::new(0.0, 0.0, 1.0));
        let ray = Ray::new(Vec3::new(0.5, 0.5, 5.0), Vec3::new(0.0, 0.1, -1.0));
        let a = plane.intersect(&ray).unwrap();
        let b = plane.flipped().intersect(&ray).unwrap();
        assert!(a.abs_diff_eq(b, 1e-5));
    }

    #[test]
    fn test_closest_point_on_axis_crossing_lines() {
        // Ray straight down through (0.3, 0, 0) crosses the X axis there
        let ray = Ray::new(Vec3::new(0.3, 0.0, 10.0), Vec3::NEG_Z);
        let p = closest_point_on_axis(&ray, Vec3::ZERO, Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(0.3, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_closest_point_on_axis_skew_lines() {
        // Ray parallel to Y at x = 2, z = 1; closest point on X axis is (2, 0, 0)
        let ray = Ray::new(Vec3::new(2.0, -5.0, 1.0), Vec3::Y);
        let p = closest_point_on_axis(&ray, Vec3::ZERO, Vec3::X);
        assert!(p.abs_diff_eq(Vec3::new(2.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_closest_point_on_axis_parallel_falls_back_to_origin() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::X);
        assert_eq!(closest_point_on_axis(&ray, origin, Vec3::X), origin);
    }
}
